use crate::model::RiskTier;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "allergy-guard")]
#[command(about = "바코드 기반 알레르기 성분 조회·위험 분류 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 알레르기 성분을 등록하거나 등급을 변경
    Add {
        /// 알레르기 성분명 (예: 땅콩, 우유)
        #[arg(required = true)]
        allergen: String,

        /// 위험 등급 (high/risk/caution)
        #[arg(required = true)]
        tier: RiskTier,
    },

    /// 등록된 알레르기 성분을 삭제
    Delete {
        /// 알레르기 성분명
        #[arg(required = true)]
        allergen: String,
    },

    /// 등록된 성분을 위험 등급별로 출력
    List,

    /// 바코드 대화식 조회 (제품 → 영양 → 알레르기 분류)
    Lookup {
        /// 음성 출력 비활성화
        #[arg(short, long)]
        quiet: bool,
    },
}
