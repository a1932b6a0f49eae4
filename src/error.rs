use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllergyError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("유효하지 않은 알레르기 성분입니다: {0}")]
    InvalidAllergen(String),

    #[error("데이터베이스 오류: {0}")]
    Database(String),

    #[error("API 호출 오류: {0}")]
    ApiCall(String),

    #[error("API 응답 파싱 실패: {0}")]
    ApiParse(String),

    #[error("HTTP 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON 해석 오류: {0}")]
    Json(#[from] serde_json::Error),

    #[error("입력 오류: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AllergyError>;
