//! 알레르기 성분 위험 분류.
//!
//! 파싱된 성분명을 저장소 조회 결과와 대조해 보고 라인으로 만든다.
//! 미등록 성분은 보고에서 조용히 제외된다.

use crate::model::RiskTier;
use std::collections::HashMap;

/// 등록된 성분 하나의 분류 결과. `risk_label`은 저장된 원문 라벨이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAllergen {
    pub allergen: String,
    pub risk_label: String,
}

impl ClassifiedAllergen {
    pub fn tier(&self) -> Option<RiskTier> {
        RiskTier::from_label(&self.risk_label)
    }

    /// 보고서 한 줄. 세 등급 밖의 라벨은 "알 수 없는 위험 수준"으로 떨어진다.
    pub fn report_line(&self) -> String {
        match self.tier() {
            Some(RiskTier::HighRisk) => format!(
                " - {}: 주의! 고위험 알레르기 성분이 포함되어 있습니다.",
                self.allergen
            ),
            Some(RiskTier::Risk) => format!(
                " - {}: 주의! 위험 알레르기 성분이 포함되어 있습니다.",
                self.allergen
            ),
            Some(RiskTier::Caution) => format!(
                " - {}: 주의! 주의가 필요한 알레르기 성분이 포함되어 있습니다.",
                self.allergen
            ),
            None => format!(" - {}: 알 수 없는 위험 수준.", self.allergen),
        }
    }
}

/// 성분명을 조회 결과와 대조한다. 입력 순서를 유지하고 미등록 성분은 버린다.
pub fn classify_mentions(
    mentions: &[String],
    risk_labels: &HashMap<String, String>,
) -> Vec<ClassifiedAllergen> {
    mentions
        .iter()
        .filter_map(|mention| {
            risk_labels.get(mention).map(|label| ClassifiedAllergen {
                allergen: mention.clone(),
                risk_label: label.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(a, l)| (a.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_classify_keeps_mention_order_and_drops_untracked() {
        let mentions = vec!["우유".to_string(), "대두".to_string(), "땅콩".to_string()];
        let risk = labels(&[("땅콩", "High Risk Group"), ("우유", "Risk Group")]);

        let classified = classify_mentions(&mentions, &risk);
        let names: Vec<_> = classified.iter().map(|c| c.allergen.as_str()).collect();
        assert_eq!(names, ["우유", "땅콩"]);
    }

    #[test]
    fn test_report_line_per_tier() {
        let high = ClassifiedAllergen {
            allergen: "땅콩".to_string(),
            risk_label: "High Risk Group".to_string(),
        };
        assert_eq!(
            high.report_line(),
            " - 땅콩: 주의! 고위험 알레르기 성분이 포함되어 있습니다."
        );

        let risk = ClassifiedAllergen {
            allergen: "우유".to_string(),
            risk_label: "Risk Group".to_string(),
        };
        assert!(risk.report_line().contains("위험 알레르기 성분"));

        let caution = ClassifiedAllergen {
            allergen: "대두".to_string(),
            risk_label: "Caution Group".to_string(),
        };
        assert!(caution.report_line().contains("주의가 필요한"));
    }

    #[test]
    fn test_report_line_unknown_tier() {
        let unknown = ClassifiedAllergen {
            allergen: "계란".to_string(),
            risk_label: "Severe Group".to_string(),
        };
        assert_eq!(unknown.report_line(), " - 계란: 알 수 없는 위험 수준.");
        assert_eq!(unknown.tier(), None);
    }

    #[test]
    fn test_classify_empty_inputs() {
        assert!(classify_mentions(&[], &HashMap::new()).is_empty());
        let mentions = vec!["우유".to_string()];
        assert!(classify_mentions(&mentions, &HashMap::new()).is_empty());
    }
}
