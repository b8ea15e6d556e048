// ==========================================
// HR Stat 진단 시스템 - 벤치마크 평가 엔진
// ==========================================
// 책임: 당사 지표 vs 업계 평균 비교·우수/미흡 판정
// 입력: 지표 비교 레코드 (지표별 방향성은 외부 설정)
// 출력: 판정 + 절대 차이 + 상대 차이(%)
// ==========================================
// 주: 동률은 우수 판정 (포함 비교)
// 주: 업계 평균 0 이면 상대 차이만 미정의 - 판정과 절대 차이는 정상 반환
// ==========================================

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::benchmark::{BenchmarkResult, IndicatorComparison};
use crate::domain::types::{Evaluation, Polarity};
use crate::error::{CoreError, CoreResult};

// ==========================================
// BenchmarkEvaluator - 벤치마크 평가 엔진
// ==========================================
pub struct BenchmarkEvaluator {
    // 무상태 엔진, 방향성은 비교 레코드가 지참
}

impl BenchmarkEvaluator {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 입력 검증
    // ==========================================

    /// 비교 레코드의 전제조건 검증
    ///
    /// # 검증 규칙
    /// 1. 지표명은 공백이 아님
    /// 2. 당사 값·업계 평균은 유한값
    fn validate_comparison(&self, comparison: &IndicatorComparison) -> CoreResult<()> {
        if comparison.name.trim().is_empty() {
            warn!("지표명이 비어 있음");
            return Err(CoreError::invalid_input("name", "지표명은 비어 있을 수 없음"));
        }

        if !comparison.company_value.is_finite() {
            warn!(indicator = %comparison.name, "당사 값이 비유한값");
            return Err(CoreError::invalid_input(
                "company_value",
                format!("지표 {} 의 당사 값이 유한값이 아님", comparison.name),
            ));
        }

        if !comparison.industry_average.is_finite() {
            warn!(indicator = %comparison.name, "업계 평균이 비유한값");
            return Err(CoreError::invalid_input(
                "industry_average",
                format!("지표 {} 의 업계 평균이 유한값이 아님", comparison.name),
            ));
        }

        Ok(())
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 단일 지표 평가
    ///
    /// # 판정 규칙
    /// - HigherIsBetter: 당사 값 >= 업계 평균 이면 우수
    /// - LowerIsBetter: 당사 값 <= 업계 평균 이면 우수
    /// - 그 외 미흡, 동률은 우수
    ///
    /// # 반환
    /// - `delta_absolute`: 당사 값 - 업계 평균
    /// - `delta_percent`: 절대 차이 / 업계 평균 × 100,
    ///   업계 평균 0 이면 None (비율 미정의 신호)
    pub fn evaluate(&self, comparison: &IndicatorComparison) -> CoreResult<BenchmarkResult> {
        self.validate_comparison(comparison)?;

        let delta_absolute = comparison.company_value - comparison.industry_average;

        let delta_percent = if comparison.industry_average == 0.0 {
            warn!(
                indicator = %comparison.name,
                "업계 평균 0, 상대 차이 미정의"
            );
            None
        } else {
            Some(delta_absolute / comparison.industry_average * 100.0)
        };

        let excellent = match comparison.polarity {
            Polarity::HigherIsBetter => comparison.company_value >= comparison.industry_average,
            Polarity::LowerIsBetter => comparison.company_value <= comparison.industry_average,
        };

        let evaluation = if excellent {
            Evaluation::Excellent
        } else {
            Evaluation::NeedsImprovement
        };

        let reason = json!({
            "evaluation": evaluation.as_str(),
            "company_value": comparison.company_value,
            "industry_average": comparison.industry_average,
            "polarity": comparison.polarity.to_string(),
            "delta_absolute": delta_absolute,
            "delta_percent": delta_percent,
        })
        .to_string();

        debug!(
            indicator = %comparison.name,
            evaluation = %evaluation,
            delta_absolute = delta_absolute,
            "지표 평가 완료"
        );

        Ok(BenchmarkResult {
            indicator: comparison.name.clone(),
            evaluation,
            delta_absolute,
            delta_percent,
            reason,
        })
    }

    /// 상대 차이(%)의 엄격 산출
    ///
    /// # 반환
    /// - 업계 평균 0 이면 `UndefinedRatio` 오류
    pub fn delta_percent(&self, comparison: &IndicatorComparison) -> CoreResult<f64> {
        self.validate_comparison(comparison)?;

        if comparison.industry_average == 0.0 {
            return Err(CoreError::undefined_ratio(comparison.name.clone()));
        }

        Ok(
            (comparison.company_value - comparison.industry_average)
                / comparison.industry_average
                * 100.0,
        )
    }

    /// 지표 배치 평가 (입력 순서 유지)
    pub fn evaluate_all(
        &self,
        comparisons: &[IndicatorComparison],
    ) -> CoreResult<Vec<BenchmarkResult>> {
        comparisons.iter().map(|c| self.evaluate(c)).collect()
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for BenchmarkEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
