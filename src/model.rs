//! 알레르기 위험 등급과 저장 레코드 타입.
//!
//! 위험 등급은 내부 enum 하나로 통일하고, 저장소 비교와 화면 표시 모두
//! 같은 라벨 테이블을 거친다.

/// 알레르기 성분 위험 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskTier {
    HighRisk,
    Risk,
    Caution,
}

impl RiskTier {
    /// 표시 순서 고정 (고위험 → 위험 → 주의)
    pub const ALL: [RiskTier; 3] = [RiskTier::HighRisk, RiskTier::Risk, RiskTier::Caution];

    /// 저장소의 `risk_level` 컬럼 값이자 화면 표시 라벨
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::HighRisk => "High Risk Group",
            RiskTier::Risk => "Risk Group",
            RiskTier::Caution => "Caution Group",
        }
    }

    /// 저장된 라벨을 등급으로 환원. 세 가지 라벨 외의 값은 None.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "High Risk Group" => Some(RiskTier::HighRisk),
            "Risk Group" => Some(RiskTier::Risk),
            "Caution Group" => Some(RiskTier::Caution),
            _ => None,
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "high-risk" | "high risk group" => Ok(RiskTier::HighRisk),
            "risk" | "risk group" => Ok(RiskTier::Risk),
            "caution" | "caution group" => Ok(RiskTier::Caution),
            _ => Err(format!(
                "알 수 없는 위험 등급: {}. high, risk, caution 중 하나를 입력하세요",
                s
            )),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `allergy_info` 테이블 한 행. `allergen`이 고유 키.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllergenRecord {
    pub allergen: String,
    pub risk_level: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for tier in RiskTier::ALL {
            assert_eq!(RiskTier::from_label(tier.label()), Some(tier));
        }
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(RiskTier::from_label("Severe Group"), None);
        assert_eq!(RiskTier::from_label(""), None);
        assert_eq!(RiskTier::from_label("high risk group"), None); // 라벨은 대소문자 구분
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("high".parse::<RiskTier>(), Ok(RiskTier::HighRisk));
        assert_eq!("High Risk Group".parse::<RiskTier>(), Ok(RiskTier::HighRisk));
        assert_eq!("risk".parse::<RiskTier>(), Ok(RiskTier::Risk));
        assert_eq!("CAUTION".parse::<RiskTier>(), Ok(RiskTier::Caution));
        assert!("unknown".parse::<RiskTier>().is_err());
    }

    #[test]
    fn test_display_order() {
        let labels: Vec<_> = RiskTier::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["High Risk Group", "Risk Group", "Caution Group"]);
    }
}
