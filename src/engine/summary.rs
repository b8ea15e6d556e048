// ==========================================
// HR Stat 진단 시스템 - 진단 요약 조립 엔진
// ==========================================
// 책임: 요약 페이지용 집계 레코드 조립
// 입력: 조직 단위 목록 / 벤치마크 평가 결과 배치
// 출력: 조직 진단 요약 / 우수·미흡 집계
// ==========================================

use tracing::info;

use crate::domain::benchmark::{BenchmarkResult, BenchmarkTally};
use crate::domain::organization::{OrganizationSummary, OrganizationalUnit};
use crate::domain::types::{Evaluation, MetricField};
use crate::error::CoreResult;

use super::aggregation::MetricAggregator;

// ==========================================
// DiagnosisSummarizer - 진단 요약 조립 엔진
// ==========================================
pub struct DiagnosisSummarizer {
    aggregator: MetricAggregator,
}

impl DiagnosisSummarizer {
    /// 생성자
    pub fn new() -> Self {
        Self {
            aggregator: MetricAggregator::new(),
        }
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 조직 진단 요약 조립
    ///
    /// # 파라미터
    /// - `units`: 조직 단위 목록
    ///
    /// # 반환
    /// 총인원·3개 가중 평균·활동 비중을 담은 불변 요약 레코드
    pub fn summarize_organization(
        &self,
        units: &[OrganizationalUnit],
    ) -> CoreResult<OrganizationSummary> {
        // 1. 총인원
        let total_headcount = self.aggregator.total_headcount(units)?;

        // 2. 주당 근로시간 가중 평균
        let avg_weekly_hours = self
            .aggregator
            .weighted_average(units, MetricField::WeeklyHours)?;

        // 3. 월 평균 급여 가중 평균
        let avg_monthly_salary = self
            .aggregator
            .weighted_average(units, MetricField::MonthlySalary)?;

        // 4. 평균 근속연수 가중 평균
        let avg_tenure_years = self
            .aggregator
            .weighted_average(units, MetricField::TenureYears)?;

        // 5. 활동 비중
        let activity_ratio = self.aggregator.activity_ratio(units)?;

        // 6. 요약 조립
        let summary = OrganizationSummary {
            unit_count: units.len(),
            total_headcount,
            avg_weekly_hours,
            avg_monthly_salary,
            avg_tenure_years,
            activity_ratio,
        };

        info!(
            unit_count = summary.unit_count,
            total_headcount = summary.total_headcount,
            avg_weekly_hours = summary.avg_weekly_hours,
            "조직 진단 요약 조립 완료"
        );

        Ok(summary)
    }

    /// 벤치마크 평가 배치의 우수/미흡 집계
    pub fn summarize_benchmarks(&self, results: &[BenchmarkResult]) -> BenchmarkTally {
        let mut tally = BenchmarkTally::default();

        for result in results {
            match result.evaluation {
                Evaluation::Excellent => tally.excellent += 1,
                Evaluation::NeedsImprovement => tally.needs_improvement += 1,
            }
        }

        info!(
            excellent = tally.excellent,
            needs_improvement = tally.needs_improvement,
            "벤치마크 평가 집계 완료"
        );

        tally
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for DiagnosisSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 단위 테스트
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ActivityType;
    use crate::error::CoreError;

    /// 테스트용 조직 단위 생성
    fn create_test_unit(
        name: &str,
        activity_type: ActivityType,
        headcount: f64,
        hours: f64,
        salary: f64,
        tenure: f64,
    ) -> OrganizationalUnit {
        OrganizationalUnit {
            name: name.to_string(),
            activity_type,
            average_headcount: headcount,
            average_weekly_hours: hours,
            average_monthly_salary: salary,
            average_tenure_years: tenure,
        }
    }

    /// 테스트용 평가 결과 생성
    fn create_test_result(indicator: &str, evaluation: Evaluation) -> BenchmarkResult {
        BenchmarkResult {
            indicator: indicator.to_string(),
            evaluation,
            delta_absolute: 0.0,
            delta_percent: None,
            reason: "{}".to_string(),
        }
    }

    #[test]
    fn test_summarize_organization() {
        let summarizer = DiagnosisSummarizer::new();
        let units = vec![
            create_test_unit("영업팀", ActivityType::Primary, 20.0, 42.0, 380.0, 5.2),
            create_test_unit("생산팀", ActivityType::Primary, 30.0, 44.0, 350.0, 6.8),
            create_test_unit("경영지원팀", ActivityType::Support, 10.0, 40.0, 400.0, 4.5),
        ];

        let summary = summarizer.summarize_organization(&units).unwrap();

        assert_eq!(summary.unit_count, 3);
        assert_eq!(summary.total_headcount, 60.0);
        assert!((summary.avg_weekly_hours - 2560.0 / 60.0).abs() < 1e-9);
        assert!((summary.avg_monthly_salary - 22100.0 / 60.0).abs() < 1e-9);
        assert!(
            (summary.activity_ratio.primary_percent + summary.activity_ratio.support_percent
                - 100.0)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn test_summarize_empty_organization() {
        let summarizer = DiagnosisSummarizer::new();

        let summary = summarizer.summarize_organization(&[]).unwrap();

        assert_eq!(summary.unit_count, 0);
        assert_eq!(summary.total_headcount, 0.0);
        assert_eq!(summary.avg_weekly_hours, 0.0);
        assert_eq!(summary.activity_ratio.primary_percent, 0.0);
    }

    #[test]
    fn test_summarize_propagates_invalid_input() {
        let summarizer = DiagnosisSummarizer::new();
        let units = vec![create_test_unit(
            "영업팀",
            ActivityType::Primary,
            -1.0,
            42.0,
            380.0,
            5.0,
        )];

        assert!(matches!(
            summarizer.summarize_organization(&units),
            Err(CoreError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_summarize_benchmarks() {
        let summarizer = DiagnosisSummarizer::new();
        let results = vec![
            create_test_result("HCROI", Evaluation::Excellent),
            create_test_result("노동소득분배율", Evaluation::Excellent),
            create_test_result("갈등지수", Evaluation::NeedsImprovement),
        ];

        let tally = summarizer.summarize_benchmarks(&results);

        assert_eq!(tally.excellent, 2);
        assert_eq!(tally.needs_improvement, 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_summarize_benchmarks_empty() {
        let summarizer = DiagnosisSummarizer::new();

        let tally = summarizer.summarize_benchmarks(&[]);

        assert_eq!(tally.total(), 0);
    }
}
