//! 입력 검증과 알레르기 문구 파싱.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // 영문, 한글, 공백, 하이픈, 슬래시만 허용. 양끝 앵커로 전체 일치를 요구한다.
    static ref ALLERGEN_RE: Regex = Regex::new(r"^[A-Za-z가-힣\s\-/]+$").unwrap();
    // 알레르기 문구는 쉼표 또는 세미콜론(연속 포함)으로 구분된다
    static ref MENTION_SPLIT_RE: Regex = Regex::new(r"[;,]+").unwrap();
}

/// 알레르기 성분명 검증. 빈 문자열과 허용 외 문자가 섞인 이름은 거부한다.
pub fn validate_allergen(allergen: &str) -> bool {
    ALLERGEN_RE.is_match(allergen)
}

/// 바코드는 숫자만 허용
pub fn is_valid_barcode(barcode: &str) -> bool {
    !barcode.is_empty() && barcode.bytes().all(|b| b.is_ascii_digit())
}

/// 알레르기 원문에서 성분명 집합을 추출한다.
/// 구분자로 나눈 뒤 양끝 공백을 제거하고 빈 조각은 버리며,
/// 중복 성분은 첫 등장 순서만 유지한다.
pub fn split_mentions(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MENTION_SPLIT_RE
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| {
            let s = s.to_string();
            if seen.insert(s.clone()) {
                Some(s)
            } else {
                None
            }
        })
        .collect()
}
