// ==========================================
// HR Stat 진단 시스템 - 벤치마크 비교 도메인 모델
// ==========================================
// 방향성은 지표별 외부 설정 - 지표명 하드코딩 금지
// ==========================================

use serde::{Deserialize, Serialize};

use super::types::{Evaluation, Polarity};

// ==========================================
// IndicatorComparison - 지표 벤치마크 비교 입력
// ==========================================
// 매 평가 호출마다 재계산 - 저장 상태 없음
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorComparison {
    pub name: String,          // 지표명 (예: 노동소득분배율)
    pub company_value: f64,    // 당사 값
    pub industry_average: f64, // 업계 평균 값
    pub polarity: Polarity,    // 지표 방향성
}

// ==========================================
// BenchmarkResult - 지표 평가 결과
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub indicator: String,          // 지표명
    pub evaluation: Evaluation,     // 우수/미흡 판정
    pub delta_absolute: f64,        // 당사 값 - 업계 평균
    pub delta_percent: Option<f64>, // 업계 평균 대비 차이 (%), 업계 평균 0이면 None (비율 미정의)
    pub reason: String,             // 판정 근거 (JSON, 설명 가능성 확보)
}

// ==========================================
// BenchmarkTally - 평가 배치 집계
// ==========================================
// 지표 일람 페이지의 "우수 n / 미흡 m" 집계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkTally {
    pub excellent: usize,         // 우수 판정 수
    pub needs_improvement: usize, // 미흡 판정 수
}

impl BenchmarkTally {
    /// 평가 총 건수
    pub fn total(&self) -> usize {
        self.excellent + self.needs_improvement
    }
}
