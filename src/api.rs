//! 외부 식품 API 클라이언트.
//!
//! 두 번의 호출로 구성된다:
//! 1. 바코드 → 제품 정보 (식품안전나라 C005)
//! 2. 품목보고번호 → 영양 성분 + 알레르기 문구
//!
//! 호출 하나가 블로킹 요청/응답 하나이며 재시도는 없다.

use crate::config::Config;
use crate::error::{AllergyError, Result};
use serde::Deserialize;

const PRODUCT_API_BASE: &str = "http://openapi.foodsafetykorea.go.kr/api";
const NUTRITION_API_BASE: &str = "https://apis.data.go.kr/foodnutrition/detail";

/// 알레르기 문구가 없을 때의 원문 관용값
const NO_ALLERGY_SENTINEL: &str = "알레르기 정보 없음";

/// 영양 요약에 쓰는 키와 한글 표기 (출력·음성 공용)
pub const NUTRIENT_FIELDS: [(&str, &str); 6] = [
    ("energy_kcal", "열량"),
    ("carbohydrates", "탄수화물"),
    ("proteins", "단백질"),
    ("fat", "지방"),
    ("sodium", "나트륨"),
    ("saturated_fat", "포화지방"),
];

pub type NutrientMap = serde_json::Map<String, serde_json::Value>;

/// 영양 값 표시 문자열. 값이 없으면 "정보 없음".
pub fn nutrient_display(nutrient: &NutrientMap, key: &str) -> String {
    match nutrient.get(key) {
        None | Some(serde_json::Value::Null) => "정보 없음".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}

/// 제품 조회 결과. 두 필드 모두 응답에 없을 수 있다 (표시 기본값으로 대체).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    #[serde(rename = "PRDLST_NM")]
    pub name: Option<String>,
    #[serde(rename = "PRDLST_REPORT_NO")]
    pub report_no: Option<String>,
}

impl ProductInfo {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("이름 정보 없음")
    }

    pub fn display_report_no(&self) -> &str {
        self.report_no.as_deref().unwrap_or("번호 없음")
    }
}

/// 영양 조회 결과
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionInfo {
    #[serde(default)]
    pub nutrient: NutrientMap,
    #[serde(default)]
    pub allergy: Option<String>,
}

impl NutritionInfo {
    /// 파싱할 알레르기 원문. 필드가 없거나 관용값이면 None.
    /// 공백뿐인 원문은 "있는" 것으로 보고 파싱 단계로 넘긴다
    /// (성분명이 추출되지 않아 성분 정보 없음으로 보고된다).
    pub fn allergy_text(&self) -> Option<&str> {
        match self.allergy.as_deref().map(str::trim) {
            None => None,
            Some(text) if text == NO_ALLERGY_SENTINEL => None,
            Some(text) => Some(text),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// 바코드로 제품 조회. None은 "제품 없음".
    async fn product_by_barcode(&self, barcode: &str) -> Result<Option<ProductInfo>>;
}

#[allow(async_fn_in_trait)]
pub trait NutritionApi {
    /// 품목보고번호로 영양 정보 조회. None은 "영양 정보 없음".
    async fn nutrition_by_report_no(&self, report_no: &str) -> Result<Option<NutritionInfo>>;
}

pub struct FoodApiClient {
    client: reqwest::Client,
    api_key_name: String,
    api_key_detail: String,
}

impl FoodApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            api_key_name: config.api_key_name()?.to_string(),
            api_key_detail: config.api_key_detail()?.to_string(),
        })
    }
}

impl ProductApi for FoodApiClient {
    async fn product_by_barcode(&self, barcode: &str) -> Result<Option<ProductInfo>> {
        let url = format!(
            "{}/{}/C005/json/1/5/BAR_CD={}",
            PRODUCT_API_BASE, self.api_key_name, barcode
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AllergyError::ApiCall(format!(
                "제품 API 응답 코드 {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let Some(row) = body["C005"]["row"].get(0) else {
            return Ok(None);
        };
        let info: ProductInfo = serde_json::from_value(row.clone())
            .map_err(|e| AllergyError::ApiParse(format!("제품 응답 해석 실패: {}", e)))?;
        Ok(Some(info))
    }
}

impl NutritionApi for FoodApiClient {
    async fn nutrition_by_report_no(&self, report_no: &str) -> Result<Option<NutritionInfo>> {
        let response = self
            .client
            .get(NUTRITION_API_BASE)
            .query(&[
                ("report_no", report_no),
                ("api_key", self.api_key_detail.as_str()),
            ])
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AllergyError::ApiCall(format!(
                "성분 API 응답 코드 {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        if body.is_null() || body.as_object().is_some_and(|obj| obj.is_empty()) {
            return Ok(None);
        }
        let info: NutritionInfo = serde_json::from_value(body)
            .map_err(|e| AllergyError::ApiParse(format!("성분 응답 해석 실패: {}", e)))?;
        Ok(Some(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_display_defaults() {
        let info = ProductInfo {
            name: None,
            report_no: None,
        };
        assert_eq!(info.display_name(), "이름 정보 없음");
        assert_eq!(info.display_report_no(), "번호 없음");
    }

    #[test]
    fn test_allergy_text_sentinel() {
        let no_field = NutritionInfo::default();
        assert_eq!(no_field.allergy_text(), None);

        let sentinel = NutritionInfo {
            allergy: Some("알레르기 정보 없음".to_string()),
            ..Default::default()
        };
        assert_eq!(sentinel.allergy_text(), None);

        // 공백뿐인 원문은 관용값이 아니므로 파싱 단계로 넘어간다
        let blank = NutritionInfo {
            allergy: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.allergy_text(), Some(""));

        let present = NutritionInfo {
            allergy: Some("우유, 대두".to_string()),
            ..Default::default()
        };
        assert_eq!(present.allergy_text(), Some("우유, 대두"));
    }

    #[test]
    fn test_nutrient_display() {
        let nutrient: NutrientMap = json!({
            "energy_kcal": "120kcal",
            "sodium": 35,
            "fat": null,
        })
        .as_object()
        .unwrap()
        .clone();

        assert_eq!(nutrient_display(&nutrient, "energy_kcal"), "120kcal");
        assert_eq!(nutrient_display(&nutrient, "sodium"), "35");
        assert_eq!(nutrient_display(&nutrient, "fat"), "정보 없음");
        assert_eq!(nutrient_display(&nutrient, "proteins"), "정보 없음");
    }

    #[test]
    fn test_product_row_deserializes() {
        let row = json!({
            "PRDLST_NM": "테스트우유",
            "PRDLST_REPORT_NO": "12345",
            "BAR_CD": "8801234567890"
        });
        let info: ProductInfo = serde_json::from_value(row).unwrap();
        assert_eq!(info.display_name(), "테스트우유");
        assert_eq!(info.display_report_no(), "12345");
    }
}
