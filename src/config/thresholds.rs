// ==========================================
// HR Stat 진단 시스템 - 진단 임계값 프로파일
// ==========================================
// 정책: 업무 규칙 상수는 코어에 암묵 하드코딩하지 않고
//       이름 있는 기본값 + 호출자 주입으로 노출
// ==========================================

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ==========================================
// 기본값 상수 (문서화된 기본 업무 규칙)
// ==========================================
pub mod defaults {
    // 역량 충족 판정
    pub const CAPABILITY_RATE_THRESHOLD: f64 = 70.0; // 내부 역량 보유율 기준 (이상)
    pub const EXECUTION_RATE_THRESHOLD: f64 = 80.0; // 내부 수행률 기준 (이상)

    // 대표 활동 선정
    pub const ACTIVITY_SELECTION_CAP: usize = 3; // 직무당 선정 상한 (건)

    // 재무상태표 검증
    pub const BALANCE_TOLERANCE: f64 = 1.0; // 대차 일치 허용 오차 (통화 단위)
}

/// 진단 임계값 프로파일
///
/// 부분 입력 역직렬화 허용: 생략된 필드는 문서화된 기본값으로 채움
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisThresholds {
    /// 내부 역량 보유율 충족 기준 (0-100, 이상이면 충족)
    #[serde(default = "default_capability_rate")]
    pub capability_rate_threshold: f64,

    /// 내부 수행률 충족 기준 (0-100, 이상이면 충족)
    #[serde(default = "default_execution_rate")]
    pub execution_rate_threshold: f64,

    /// 직무당 대표 활동 선정 상한
    #[serde(default = "default_selection_cap")]
    pub activity_selection_cap: usize,

    /// 재무상태표 대차 일치 허용 오차 (통화 단위, 경계 포함)
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: f64,
}

fn default_capability_rate() -> f64 {
    defaults::CAPABILITY_RATE_THRESHOLD
}

fn default_execution_rate() -> f64 {
    defaults::EXECUTION_RATE_THRESHOLD
}

fn default_selection_cap() -> usize {
    defaults::ACTIVITY_SELECTION_CAP
}

fn default_balance_tolerance() -> f64 {
    defaults::BALANCE_TOLERANCE
}

impl Default for DiagnosisThresholds {
    fn default() -> Self {
        DiagnosisThresholds {
            capability_rate_threshold: defaults::CAPABILITY_RATE_THRESHOLD,
            execution_rate_threshold: defaults::EXECUTION_RATE_THRESHOLD,
            activity_selection_cap: defaults::ACTIVITY_SELECTION_CAP,
            balance_tolerance: defaults::BALANCE_TOLERANCE,
        }
    }
}

impl DiagnosisThresholds {
    /// 프로파일 값의 유효성 검증
    ///
    /// # 검증 규칙
    /// 1. 두 역량 기준은 0-100 범위의 유한값
    /// 2. 선정 상한은 1 이상
    /// 3. 허용 오차는 0 이상의 유한값
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("capability_rate_threshold", self.capability_rate_threshold),
            ("execution_rate_threshold", self.execution_rate_threshold),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(CoreError::invalid_input(
                    field,
                    format!("기준값 {} 은 0-100 범위를 벗어남", value),
                ));
            }
        }

        if self.activity_selection_cap == 0 {
            return Err(CoreError::invalid_input(
                "activity_selection_cap",
                "선정 상한은 1 이상이어야 함",
            ));
        }

        if !self.balance_tolerance.is_finite() || self.balance_tolerance < 0.0 {
            return Err(CoreError::invalid_input(
                "balance_tolerance",
                format!("허용 오차 {} 는 0 이상의 유한값이어야 함", self.balance_tolerance),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_documented_defaults() {
        let profile = DiagnosisThresholds::default();
        assert_eq!(profile.capability_rate_threshold, 70.0);
        assert_eq!(profile.execution_rate_threshold, 80.0);
        assert_eq!(profile.activity_selection_cap, 3);
        assert_eq!(profile.balance_tolerance, 1.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let profile: DiagnosisThresholds =
            serde_json::from_str(r#"{"capability_rate_threshold": 75.0}"#).unwrap();
        assert_eq!(profile.capability_rate_threshold, 75.0);
        assert_eq!(profile.execution_rate_threshold, 80.0);
        assert_eq!(profile.activity_selection_cap, 3);
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let profile = DiagnosisThresholds {
            capability_rate_threshold: 120.0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let profile = DiagnosisThresholds {
            activity_selection_cap: 0,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        let profile = DiagnosisThresholds {
            balance_tolerance: -0.5,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }
}
