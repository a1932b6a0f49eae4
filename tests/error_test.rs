//! 에러 케이스 테스트
//!
//! 에러 메시지와 변환 경로를 검증

use allergy_guard::error::AllergyError;

#[test]
fn test_error_display_not_empty() {
    let errors = vec![
        AllergyError::Config("SUPABASE_URL 없음".to_string()),
        AllergyError::InvalidAllergen("peanut123!".to_string()),
        AllergyError::Database("HTTP 500".to_string()),
        AllergyError::ApiCall("제품 API 응답 코드 503".to_string()),
        AllergyError::ApiParse("필드 누락".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "에러 메시지가 비어 있음: {:?}", err);
    }
}

#[test]
fn test_invalid_allergen_message_contains_name() {
    let err = AllergyError::InvalidAllergen("peanut123!".to_string());
    let display = format!("{}", err);
    assert!(display.contains("유효하지 않은"));
    assert!(display.contains("peanut123!"));
}

#[test]
fn test_database_error_message() {
    let err = AllergyError::Database("HTTP 401: 권한 없음".to_string());
    let display = format!("{}", err);
    assert!(display.contains("데이터베이스 오류"));
    assert!(display.contains("401"));
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "읽기 실패");
    let err: AllergyError = io.into();
    assert!(matches!(err, AllergyError::Io(_)));
    assert!(format!("{}", err).contains("IO 오류"));
}

#[test]
fn test_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: AllergyError = json_err.into();
    assert!(matches!(err, AllergyError::Json(_)));
    assert!(format!("{}", err).contains("JSON"));
}

#[test]
fn test_error_debug() {
    let err = AllergyError::Config("테스트".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("Config"));
}
