// ==========================================
// HR Stat 진단 시스템 - 코어 오류 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 정책: 전 연산은 전역 함수 - 부분 계산 결과 없음
// ==========================================

use thiserror::Error;

/// 계산 코어 오류 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    // ===== 입력 전제조건 위반 =====
    #[error("입력값 오류 (field={field}): {message}")]
    InvalidInput { field: String, message: String },

    // ===== 정의되지 않는 비율 =====
    #[error("비율 미정의 (indicator={indicator}): 분모가 0")]
    UndefinedRatio { indicator: String },
}

impl CoreError {
    /// 입력값 오류 생성 헬퍼
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 비율 미정의 오류 생성 헬퍼
    pub fn undefined_ratio(indicator: impl Into<String>) -> Self {
        CoreError::UndefinedRatio {
            indicator: indicator.into(),
        }
    }
}

/// Result 타입 별칭
pub type CoreResult<T> = Result<T, CoreError>;
