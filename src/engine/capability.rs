// ==========================================
// HR Stat 진단 시스템 - 직무 역량 판정 엔진
// ==========================================
// 책임: 역량 충족 판정·대표 활동 선정 규칙
// 입력: 직무 역량 프로파일 + 임계값 프로파일
// 출력: 충족 여부 + 판정 근거
// ==========================================
// 주: 경험 수준·프로젝트 경험은 수집만 하고 판정에 쓰지 않는
//     관찰된 제품 규칙 - 규칙 변경은 제품 결정 사항
// ==========================================

use tracing::{debug, warn};

use crate::config::DiagnosisThresholds;
use crate::domain::job::JobCapabilityProfile;
use crate::domain::types::SelectionStatus;
use crate::error::{CoreError, CoreResult};

// ==========================================
// CapabilityScorer - 직무 역량 판정 엔진
// ==========================================
pub struct CapabilityScorer {
    // 무상태 엔진, 임계값은 파라미터로 전달
}

impl CapabilityScorer {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 입력 검증
    // ==========================================

    /// 프로파일 평가 항목의 전제조건 검증 (전 항목 0-100)
    fn validate_profile(&self, profile: &JobCapabilityProfile) -> CoreResult<()> {
        for (field, value) in [
            ("internal_capability_rate", profile.internal_capability_rate),
            ("experience_level", profile.experience_level),
            ("project_experience", profile.project_experience),
            ("internal_execution_rate", profile.internal_execution_rate),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                warn!(
                    job_id = %profile.job_id,
                    field = field,
                    value = value,
                    "평가 항목이 0-100 범위를 벗어남"
                );
                return Err(CoreError::invalid_input(
                    field,
                    format!(
                        "직무 {} 의 {} 값 {} 은 0-100 범위여야 함",
                        profile.job_id, field, value
                    ),
                ));
            }
        }

        Ok(())
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 역량 충족 판정 (판정 근거 포함)
    ///
    /// # 규칙
    /// 1. 내부 역량 보유율 >= 기준 (기본 70) → 충족
    /// 2. 내부 수행률 >= 기준 (기본 80) → 충족
    /// 3. 두 기준 모두 미달 → 미충족
    ///
    /// # 반환
    /// (충족 여부, 판정 근거 목록)
    pub fn score_with_reasons(
        &self,
        profile: &JobCapabilityProfile,
        thresholds: &DiagnosisThresholds,
    ) -> CoreResult<(bool, Vec<String>)> {
        thresholds.validate()?;
        self.validate_profile(profile)?;

        let mut reasons = Vec::new();

        if profile.internal_capability_rate >= thresholds.capability_rate_threshold {
            reasons.push(format!(
                "내부 역량 보유율 {} >= 기준 {}",
                profile.internal_capability_rate, thresholds.capability_rate_threshold
            ));
        }

        if profile.internal_execution_rate >= thresholds.execution_rate_threshold {
            reasons.push(format!(
                "내부 수행률 {} >= 기준 {}",
                profile.internal_execution_rate, thresholds.execution_rate_threshold
            ));
        }

        let capable = !reasons.is_empty();

        if !capable {
            reasons.push(format!(
                "두 기준 모두 미달 (보유율 {} < {}, 수행률 {} < {})",
                profile.internal_capability_rate,
                thresholds.capability_rate_threshold,
                profile.internal_execution_rate,
                thresholds.execution_rate_threshold
            ));
        }

        debug!(
            job_id = %profile.job_id,
            capable = capable,
            capability_rate = profile.internal_capability_rate,
            execution_rate = profile.internal_execution_rate,
            "역량 충족 판정 완료"
        );

        Ok((capable, reasons))
    }

    /// 역량 충족 판정
    ///
    /// # 반환
    /// - `true`: 내부 역량으로 수행 가능
    /// - `false`: 추가 역량 확보 필요
    pub fn score(
        &self,
        profile: &JobCapabilityProfile,
        thresholds: &DiagnosisThresholds,
    ) -> CoreResult<bool> {
        self.score_with_reasons(profile, thresholds)
            .map(|(capable, _)| capable)
    }

    // ==========================================
    // 대표 활동 선정 규칙
    // ==========================================

    /// 신규 선정 허용 여부
    ///
    /// # 규칙
    /// - 현재 선정 수 < 상한 이면 허용 (해제는 항상 허용 - 표시 계층 처리)
    pub fn can_select(&self, selected_count: usize, cap: usize) -> bool {
        selected_count < cap
    }

    /// 선정 진행 상태 판정
    ///
    /// # 규칙
    /// - 선정 수 == 상한 → 선정 완료
    /// - 그 외 → 선정 중 (can_select 게이트로 상한 초과 상태는 생기지 않음)
    pub fn selection_status(&self, selected_count: usize, cap: usize) -> SelectionStatus {
        if selected_count == cap {
            SelectionStatus::Complete
        } else {
            SelectionStatus::InProgress
        }
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for CapabilityScorer {
    fn default() -> Self {
        Self::new()
    }
}
