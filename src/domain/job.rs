// ==========================================
// HR Stat 진단 시스템 - 직무 역량 도메인 모델
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// JobCapabilityProfile - 직무별 역량 평가 프로파일
// ==========================================
// 불변식: 4개 평가 항목 모두 0-100 범위
// 주의: 판정 규칙은 internal_capability_rate / internal_execution_rate
//       두 항목만 참조 (experience_level, project_experience 는
//       리포트 표시용으로만 수집)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCapabilityProfile {
    // ===== 식별 =====
    pub job_id: String, // 직무 식별자

    // ===== 평가 항목 (0-100) =====
    pub internal_capability_rate: f64, // 내부 역량 보유율
    pub experience_level: f64,         // 경험 수준
    pub project_experience: f64,       // 프로젝트 수행 경험
    pub internal_execution_rate: f64,  // 내부 수행률
}
