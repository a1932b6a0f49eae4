//! 음성 출력 싱크.
//!
//! 발화 한 건마다 외부 TTS 명령을 실행하고 재생이 끝날 때까지 블로킹한다.
//! 큐잉·취소는 없다. 엔진 실패는 보고서를 막지 않도록 stderr에만 알린다.

use crate::api::{nutrient_display, NutrientMap, NUTRIENT_FIELDS};
use std::process::Command;

/// 기본 발화 속도 (단어/분)
const DEFAULT_RATE: u32 = 125;

pub trait SpeechSink {
    /// 기본 텍스트와 보조 값들을 공백으로 이어 한 번에 발화한다.
    fn speak(&self, text: &str, extra: &[String]);
}

/// 외부 TTS 명령(espeak-ng) 기반 싱크. 속도는 프로세스당 한 번 고정된다.
pub struct CommandSpeech {
    command: String,
    rate: u32,
}

impl CommandSpeech {
    pub fn new() -> Self {
        Self {
            command: "espeak-ng".to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

impl Default for CommandSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSink for CommandSpeech {
    fn speak(&self, text: &str, extra: &[String]) {
        let utterance = join_utterance(text, extra);

        // 재생 종료까지 블로킹
        let status = Command::new(&self.command)
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(&utterance)
            .status();

        match status {
            Ok(status) if status.success() => {}
            Ok(status) => eprintln!("음성 출력 실패: {} 종료 코드 {}", self.command, status),
            Err(e) => eprintln!("음성 출력 실패: {} 실행 불가 ({})", self.command, e),
        }
    }
}

/// 무음 싱크 (`--quiet` 및 테스트용)
pub struct SilentSpeech;

impl SpeechSink for SilentSpeech {
    fn speak(&self, _text: &str, _extra: &[String]) {}
}

fn join_utterance(text: &str, extra: &[String]) -> String {
    if extra.is_empty() {
        return text.to_string();
    }
    format!("{} {}", text, extra.join(" "))
}

/// 제품명과 영양 요약 발화. 알레르기 문구 유무와 무관하게 호출된다.
pub fn speak_product_info<S: SpeechSink>(sink: &S, product_name: &str, nutrient: &NutrientMap) {
    let summary: Vec<String> = NUTRIENT_FIELDS
        .iter()
        .map(|(key, korean)| format!("{} {}", korean, nutrient_display(nutrient, key)))
        .collect();
    sink.speak(&format!("제품 이름 {}", product_name), &summary);
}

/// 성분 하나와 그 위험 라벨 발화
pub fn speak_allergen_info<S: SpeechSink>(sink: &S, allergen: &str, risk_label: &str) {
    sink.speak(allergen, &[risk_label.to_string()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_utterance() {
        assert_eq!(join_utterance("땅콩", &[]), "땅콩");
        assert_eq!(
            join_utterance("땅콩", &["High Risk Group".to_string()]),
            "땅콩 High Risk Group"
        );
        assert_eq!(
            join_utterance("a", &["b".to_string(), "c".to_string()]),
            "a b c"
        );
    }
}
