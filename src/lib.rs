//! allergy-guard
//!
//! 바코드 기반 알레르기 성분 조회·위험 분류 도구.
//!
//! - 관리 흐름: `allergy_info` 원격 테이블에 성분/위험 등급을 등록·삭제하고
//!   등급별 목록을 출력
//! - 조회 흐름: 바코드 → 제품 API → 영양 API → 성분 파싱 → 위험 분류 →
//!   보고서 출력·음성 안내

pub mod api;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod parse;
pub mod speech;
pub mod store;

pub use error::{AllergyError, Result};
pub use model::{AllergenRecord, RiskTier};
