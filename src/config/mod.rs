// ==========================================
// HR Stat 진단 시스템 - 설정 계층
// ==========================================
// 책임: 진단 임계값·분류 규칙의 기본값 정의와 호출자 주입
// 정책: 코어는 설정을 저장하지 않음 - 호출자가 전달
// ==========================================

pub mod classification_rules;
pub mod thresholds;

// 핵심 설정 타입 재수출
pub use classification_rules::{ClassificationRules, KeywordRule};
pub use thresholds::{defaults, DiagnosisThresholds};
