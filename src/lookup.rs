//! 바코드 조회 파이프라인.
//!
//! 바코드 → 제품 정보 → 영양/알레르기 정보 → 성분 파싱 → 위험 분류 → 출력·발화.
//! 각 단계는 순차 실행되며, 항목 단위 실패(제품 없음, 영양 정보 없음, 알레르기
//! 정보 없음)는 결과로 보고하고 루프는 다음 바코드로 넘어간다. 설정·백엔드
//! 오류만 Err로 전파되어 프로세스를 종료시킨다.

use crate::api::{
    nutrient_display, FoodApiClient, NutritionApi, NutrientMap, ProductApi, NUTRIENT_FIELDS,
};
use crate::classify::{classify_mentions, ClassifiedAllergen};
use crate::config::Config;
use crate::error::Result;
use crate::parse::{is_valid_barcode, split_mentions};
use crate::speech::{
    speak_allergen_info, speak_product_info, CommandSpeech, SilentSpeech, SpeechSink,
};
use crate::store::{RiskLookup, RiskTableStore};
use dialoguer::Input;

/// 알레르기 항목의 보고 결과
#[derive(Debug, PartialEq, Eq)]
pub enum AllergyReport {
    /// 원문 자체가 없음 (관용값 포함)
    NoInfo,
    /// 원문은 있으나 성분명이 추출되지 않음
    NoMentions,
    /// 성분은 있으나 등록된 것이 없음
    NoneTracked,
    /// 등록 성분 분류 결과 (추출 순서 유지)
    Classified(Vec<ClassifiedAllergen>),
}

#[derive(Debug)]
pub struct LookupReport {
    pub product_name: String,
    pub report_no: String,
    pub nutrient: NutrientMap,
    pub allergy: AllergyReport,
}

/// 바코드 하나의 조회 결과
#[derive(Debug)]
pub enum LookupOutcome {
    ProductNotFound,
    NutritionNotFound {
        product_name: String,
        report_no: String,
    },
    Report(LookupReport),
}

/// 바코드 하나를 끝까지 처리한다. 발화는 이 안에서 일어나고 출력은
/// [`print_outcome`]이 맡는다.
pub async fn lookup_barcode<P, N, L, S>(
    barcode: &str,
    product_api: &P,
    nutrition_api: &N,
    store: &L,
    speech: &S,
) -> Result<LookupOutcome>
where
    P: ProductApi,
    N: NutritionApi,
    L: RiskLookup,
    S: SpeechSink,
{
    // 1. 바코드로 제품 정보
    let Some(product) = product_api.product_by_barcode(barcode).await? else {
        return Ok(LookupOutcome::ProductNotFound);
    };
    let product_name = product.display_name().to_string();
    let report_no = product.display_report_no().to_string();

    // 2. 품목보고번호로 영양/알레르기 정보
    let Some(nutrition) = nutrition_api.nutrition_by_report_no(&report_no).await? else {
        return Ok(LookupOutcome::NutritionNotFound {
            product_name,
            report_no,
        });
    };

    // 제품명·영양 요약은 알레르기 문구 유무와 무관하게 발화한다
    speak_product_info(speech, &product_name, &nutrition.nutrient);

    // 3. 알레르기 원문 파싱 및 위험 분류
    let allergy = match nutrition.allergy_text() {
        None => AllergyReport::NoInfo,
        Some(raw) => {
            let mentions = split_mentions(raw);
            if mentions.is_empty() {
                AllergyReport::NoMentions
            } else {
                let risk_labels = store.get_risks(&mentions).await?;
                let classified = classify_mentions(&mentions, &risk_labels);
                if classified.is_empty() {
                    AllergyReport::NoneTracked
                } else {
                    for item in &classified {
                        speak_allergen_info(speech, &item.allergen, &item.risk_label);
                    }
                    AllergyReport::Classified(classified)
                }
            }
        }
    };

    Ok(LookupOutcome::Report(LookupReport {
        product_name,
        report_no,
        nutrient: nutrition.nutrient,
        allergy,
    }))
}

/// 조회 결과를 콘솔 보고서로 출력
pub fn print_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::ProductNotFound => {
            println!("제품 정보를 찾을 수 없습니다. 바코드를 다시 확인해주세요.");
        }
        LookupOutcome::NutritionNotFound {
            product_name,
            report_no,
        } => {
            println!("1. 제품 이름: {}", product_name);
            println!("2. 제품 번호: {}", report_no);
            println!("영양 성분 정보를 찾을 수 없습니다.");
        }
        LookupOutcome::Report(report) => {
            println!("1. 제품 이름: {}", report.product_name);
            println!("2. 제품 번호: {}", report.report_no);

            println!("\n3. 영양 정보:");
            for (key, korean) in NUTRIENT_FIELDS {
                println!("   - {}: {}", korean, nutrient_display(&report.nutrient, key));
            }

            match &report.allergy {
                AllergyReport::NoInfo => {
                    println!("\n4. 알레르기 정보: 알레르기 정보가 없습니다.");
                }
                AllergyReport::NoMentions => {
                    println!("\n4. 알레르기 정보: 알레르기 성분 정보가 없습니다.");
                }
                AllergyReport::NoneTracked => {
                    println!("\n4. 알레르기 정보: 데이터베이스에 등록된 알레르기 성분이 없습니다.");
                }
                AllergyReport::Classified(items) => {
                    println!("\n4. 알레르기 정보:");
                    for item in items {
                        println!("{}", item.report_line());
                    }
                }
            }
        }
    }
}

/// 대화식 조회 루프. 빈 입력으로 정상 종료한다.
pub async fn run_loop(config: &Config, quiet: bool) -> Result<()> {
    let store = RiskTableStore::new(config);
    let api = FoodApiClient::new(config)?;

    if quiet {
        run_loop_with(&api, &store, &SilentSpeech).await
    } else {
        run_loop_with(&api, &store, &CommandSpeech::new()).await
    }
}

async fn run_loop_with<A, L, S>(api: &A, store: &L, speech: &S) -> Result<()>
where
    A: ProductApi + NutritionApi,
    L: RiskLookup,
    S: SpeechSink,
{
    println!("바코드 조회를 시작합니다. 빈 입력으로 종료합니다.\n");

    loop {
        let input: String = Input::new()
            .with_prompt("바코드를 입력하세요")
            .allow_empty(true)
            .interact_text()?;
        let barcode = input.trim();

        if barcode.is_empty() {
            println!("조회를 종료합니다.");
            return Ok(());
        }
        if !is_valid_barcode(barcode) {
            println!("유효한 바코드를 입력해주세요. (숫자만 허용)\n");
            continue;
        }

        let outcome = lookup_barcode(barcode, api, api, store, speech).await?;
        print_outcome(&outcome);
        println!();
    }
}
