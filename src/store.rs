//! 알레르기 위험 테이블 저장소 (Supabase REST).
//!
//! `allergy_info(allergen text unique, risk_level text)` 테이블에 대해
//! select / upsert / delete만 수행한다. 트랜잭션·재시도는 없다 (호출 하나가
//! 원자적 원격 연산 하나).

use crate::config::Config;
use crate::error::{AllergyError, Result};
use crate::model::{AllergenRecord, RiskTier};
use crate::parse::validate_allergen;
use serde::Deserialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

const TABLE: &str = "allergy_info";

/// 조회 파이프라인이 필요로 하는 읽기 전용 계약.
/// 저장된 라벨을 그대로 돌려주므로 세 등급 밖의 값도 표현할 수 있다.
#[allow(async_fn_in_trait)]
pub trait RiskLookup {
    /// 여러 성분의 위험 라벨을 일괄 조회. 결과에 없는 키는 미등록 성분이다.
    /// 빈 입력은 네트워크 호출 없이 빈 맵을 돌려준다.
    async fn get_risks(&self, allergens: &[String]) -> Result<HashMap<String, String>>;
}

#[derive(Debug, Deserialize)]
struct AllergyRow {
    allergen: String,
    risk_level: String,
}

pub struct RiskTableStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RiskTableStore {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            api_key: config.supabase_key.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// 성분명 검증 후 등록. 같은 이름이 이미 있으면 등급만 교체된다.
    pub async fn upsert(&self, allergen: &str, tier: RiskTier) -> Result<()> {
        if !validate_allergen(allergen) {
            return Err(AllergyError::InvalidAllergen(allergen.to_string()));
        }

        let response = self
            .request(reqwest::Method::POST)
            .query(&[("on_conflict", "allergen")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(&json!({ "allergen": allergen, "risk_level": tier.label() }))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// 키 일치 삭제. 없는 키를 지워도 성공이다 (저장소 의미론).
    pub async fn delete(&self, allergen: &str) -> Result<()> {
        let response = self
            .request(reqwest::Method::DELETE)
            .query(&[("allergen", format!("eq.{}", allergen))])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// 전체 행을 등급순으로 가져와 세 고정 등급으로 분류한다.
    /// 비어 있는 등급도 항상 키로 존재한다.
    pub async fn list_grouped(&self) -> Result<BTreeMap<RiskTier, Vec<AllergenRecord>>> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "allergen,risk_level"), ("order", "risk_level")])
            .send()
            .await?;
        let rows: Vec<AllergyRow> = check_status(response).await?.json().await?;
        Ok(group_by_tier(rows))
    }

    /// 단일 성분 조회. None은 "미등록"을 뜻한다.
    pub async fn get_risk(&self, allergen: &str) -> Result<Option<RiskTier>> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[
                ("select", "risk_level".to_string()),
                ("allergen", format!("eq.{}", allergen)),
            ])
            .send()
            .await?;
        let rows: Vec<serde_json::Value> = check_status(response).await?.json().await?;
        Ok(rows
            .first()
            .and_then(|row| row["risk_level"].as_str())
            .and_then(RiskTier::from_label))
    }
}

impl RiskLookup for RiskTableStore {
    async fn get_risks(&self, allergens: &[String]) -> Result<HashMap<String, String>> {
        if allergens.is_empty() {
            return Ok(HashMap::new());
        }

        let response = self
            .request(reqwest::Method::GET)
            .query(&[
                ("select", "allergen,risk_level".to_string()),
                ("allergen", in_filter(allergens)),
            ])
            .send()
            .await?;
        let rows: Vec<AllergyRow> = check_status(response).await?.json().await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.allergen, row.risk_level))
            .collect())
    }
}

/// PostgREST `in.(...)` 필터. 공백이 섞인 값을 위해 각 항목을 따옴표로 감싼다.
fn in_filter(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}

/// 행을 세 고정 등급으로 분류. 알 수 없는 라벨의 행은 관리 화면에서 제외한다.
fn group_by_tier(rows: Vec<AllergyRow>) -> BTreeMap<RiskTier, Vec<AllergenRecord>> {
    let mut grouped: BTreeMap<RiskTier, Vec<AllergenRecord>> = RiskTier::ALL
        .into_iter()
        .map(|tier| (tier, Vec::new()))
        .collect();

    for row in rows {
        if let Some(tier) = RiskTier::from_label(&row.risk_level) {
            grouped.entry(tier).or_default().push(AllergenRecord {
                allergen: row.allergen,
                risk_level: tier,
            });
        }
    }
    grouped
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AllergyError::Database(format!("HTTP {}: {}", status, body)))
}
