use crate::error::{AllergyError, Result};

/// 프로세스 시작 시 한 번 읽는 환경 변수 설정.
///
/// Supabase 접속 정보는 모든 커맨드가 필요로 하므로 로드 시점에 검증하고,
/// 식품 API 키 두 개는 조회 커맨드에서만 쓰이므로 접근 시점에 검증한다.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    api_key_name: Option<String>,
    api_key_detail: Option<String>,
}

impl Config {
    pub fn new(
        supabase_url: impl Into<String>,
        supabase_key: impl Into<String>,
        api_key_name: Option<String>,
        api_key_detail: Option<String>,
    ) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_key: supabase_key.into(),
            api_key_name,
            api_key_detail,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: required_var("SUPABASE_URL")?,
            supabase_key: required_var("SUPABASE_KEY")?,
            api_key_name: optional_var("API_KEY_NAME"),
            api_key_detail: optional_var("API_KEY_DETAIL"),
        })
    }

    /// 식품안전나라 제품 조회 API 키
    pub fn api_key_name(&self) -> Result<&str> {
        self.api_key_name
            .as_deref()
            .ok_or_else(|| missing_var("API_KEY_NAME"))
    }

    /// 성분 정보 API 키
    pub fn api_key_detail(&self) -> Result<&str> {
        self.api_key_detail
            .as_deref()
            .ok_or_else(|| missing_var("API_KEY_DETAIL"))
    }
}

fn required_var(name: &str) -> Result<String> {
    optional_var(name).ok_or_else(|| missing_var(name))
}

fn optional_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn missing_var(name: &str) -> AllergyError {
    AllergyError::Config(format!("환경 변수 {}이(가) 설정되지 않았습니다", name))
}
