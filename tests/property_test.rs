// ==========================================
// 계산 코어 속성 기반 테스트
// ==========================================
// 테스트 목표: 임의 입력에 대해 성립해야 하는 계산 불변식 검증
// 도구: proptest
// ==========================================

use proptest::collection::vec;
use proptest::prelude::*;

use hr_stat_core::config::DiagnosisThresholds;
use hr_stat_core::domain::benchmark::IndicatorComparison;
use hr_stat_core::domain::finance::{
    CostComponents, FinancialYearRecord, IncomeStatementYearRecord,
};
use hr_stat_core::domain::job::JobCapabilityProfile;
use hr_stat_core::domain::organization::OrganizationalUnit;
use hr_stat_core::domain::survey::SurveyResponse;
use hr_stat_core::domain::types::{ActivityType, Evaluation, MetricField, Polarity};
use hr_stat_core::engine::{
    BenchmarkEvaluator, CapabilityScorer, FinancialDerivation, MetricAggregator, SurveyAnalyzer,
};

// ==========================================
// 입력 생성 보조 함수
// ==========================================

/// (인원, 지표값, 주활동 여부) 튜플로 조직 단위 구성
fn unit_from(headcount: f64, value: f64, primary: bool) -> OrganizationalUnit {
    OrganizationalUnit {
        name: "팀".to_string(),
        activity_type: if primary {
            ActivityType::Primary
        } else {
            ActivityType::Support
        },
        average_headcount: headcount,
        average_weekly_hours: value,
        average_monthly_salary: value,
        average_tenure_years: value,
    }
}

proptest! {
    // ==========================================
    // 가중 평균 불변식
    // ==========================================

    /// 가중치 합이 0 이면 어떤 지표값이 오더라도 평균은 정의된 0 이다
    #[test]
    fn prop_zero_weight_average_is_zero(
        values in vec(0.0f64..200.0, 0..10)
    ) {
        let aggregator = MetricAggregator::new();
        let units: Vec<OrganizationalUnit> = values
            .iter()
            .map(|&v| unit_from(0.0, v, true))
            .collect();

        let avg = aggregator
            .weighted_average(&units, MetricField::WeeklyHours)
            .unwrap();

        prop_assert_eq!(avg, 0.0);
        prop_assert!(!avg.is_nan());
    }

    /// 인원이 양수인 목록의 가중 평균은 지표값의 최소-최대 범위 안에 있다
    #[test]
    fn prop_weighted_average_bounded_by_field_range(
        inputs in vec((1.0f64..500.0, 0.0f64..100.0), 1..20)
    ) {
        let aggregator = MetricAggregator::new();
        let units: Vec<OrganizationalUnit> = inputs
            .iter()
            .map(|&(headcount, value)| unit_from(headcount, value, true))
            .collect();

        let avg = aggregator
            .weighted_average(&units, MetricField::WeeklyHours)
            .unwrap();

        let min = inputs.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let max = inputs.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(avg >= min - 1e-9);
        prop_assert!(avg <= max + 1e-9);
    }

    /// 총인원이 양수이면 활동 비중 두 값의 합은 100 이다
    #[test]
    fn prop_activity_ratio_sums_to_hundred(
        inputs in vec((0.5f64..300.0, any::<bool>()), 1..20)
    ) {
        let aggregator = MetricAggregator::new();
        let units: Vec<OrganizationalUnit> = inputs
            .iter()
            .map(|&(headcount, primary)| unit_from(headcount, 40.0, primary))
            .collect();

        let ratio = aggregator.activity_ratio(&units).unwrap();

        prop_assert!((ratio.primary_percent + ratio.support_percent - 100.0).abs() < 1e-6);
        prop_assert!(ratio.primary_percent >= 0.0);
        prop_assert!(ratio.support_percent >= 0.0);
    }

    // ==========================================
    // 재무 파생 불변식
    // ==========================================

    /// 합계 산출은 순수 덧셈이다
    #[test]
    fn prop_derive_totals_is_plain_sum(
        current_assets in 0.0f64..1e9,
        non_current_assets in 0.0f64..1e9,
        current_liabilities in 0.0f64..1e9,
        non_current_liabilities in 0.0f64..1e9,
        total_equity in 0.0f64..1e9,
    ) {
        let engine = FinancialDerivation::new();
        let record = FinancialYearRecord {
            year: 2023,
            current_assets,
            non_current_assets,
            current_liabilities,
            non_current_liabilities,
            total_equity,
        };

        let totals = engine.derive_totals(&record);

        prop_assert_eq!(totals.total_assets, current_assets + non_current_assets);
        prop_assert_eq!(
            totals.total_liabilities,
            current_liabilities + non_current_liabilities
        );
    }

    /// 대차 일치 판정은 |차이| <= 허용 오차와 동치이다 (경계 포함)
    #[test]
    fn prop_balance_verdict_matches_gap_rule(
        current_assets in 0.0f64..1e6,
        non_current_assets in 0.0f64..1e6,
        current_liabilities in 0.0f64..1e6,
        non_current_liabilities in 0.0f64..1e6,
        total_equity in 0.0f64..1e6,
        tolerance in 0.0f64..100.0,
    ) {
        let engine = FinancialDerivation::new();
        let record = FinancialYearRecord {
            year: 2023,
            current_assets,
            non_current_assets,
            current_liabilities,
            non_current_liabilities,
            total_equity,
        };

        let balanced = engine.validate_balance(&record, tolerance).unwrap();
        let gap = (record.total_assets() - record.total_liabilities()) - total_equity;

        prop_assert_eq!(balanced, gap.abs() <= tolerance);
    }

    /// 비용 블록이 전부 비어 있으면 부가가치는 영업이익 + 순이자비용이다
    #[test]
    fn prop_value_added_reduces_without_cost_blocks(
        operating_profit in 0.0f64..1e7,
        interest_expense in 0.0f64..1e6,
        interest_income in 0.0f64..1e6,
    ) {
        let engine = FinancialDerivation::new();
        let income = IncomeStatementYearRecord {
            year: 2023,
            revenue: 0.0,
            cost_of_sales: 0.0,
            operating_profit,
            interest_expense,
            interest_income,
            sga: CostComponents::default(),
            manufacturing: CostComponents::default(),
        };

        let value_added = engine.compute_value_added(&income);
        let expected = operating_profit + (interest_expense - interest_income);

        prop_assert!((value_added - expected).abs() < 1e-6);
    }

    // ==========================================
    // 벤치마크 판정 불변식
    // ==========================================

    /// 당사 값과 업계 평균이 다르면 방향성 교체 시 판정이 반대가 된다
    #[test]
    fn prop_evaluation_antisymmetric_under_polarity_swap(
        company in -1e6f64..1e6,
        industry in -1e6f64..1e6,
    ) {
        prop_assume!((company - industry).abs() > 1e-9);

        let evaluator = BenchmarkEvaluator::new();
        let base = IndicatorComparison {
            name: "지표".to_string(),
            company_value: company,
            industry_average: industry,
            polarity: Polarity::HigherIsBetter,
        };
        let swapped = IndicatorComparison {
            polarity: Polarity::LowerIsBetter,
            ..base.clone()
        };

        let higher = evaluator.evaluate(&base).unwrap();
        let lower = evaluator.evaluate(&swapped).unwrap();

        prop_assert_ne!(higher.evaluation, lower.evaluation);
        prop_assert_eq!(higher.delta_absolute, lower.delta_absolute);
    }

    /// 동률은 방향성과 무관하게 우수 판정이다
    #[test]
    fn prop_tie_is_excellent_for_both_polarities(value in -1e6f64..1e6) {
        let evaluator = BenchmarkEvaluator::new();

        for polarity in [Polarity::HigherIsBetter, Polarity::LowerIsBetter] {
            let cmp = IndicatorComparison {
                name: "지표".to_string(),
                company_value: value,
                industry_average: value,
                polarity,
            };
            let result = evaluator.evaluate(&cmp).unwrap();
            prop_assert_eq!(result.evaluation, Evaluation::Excellent);
        }
    }

    // ==========================================
    // 역량 판정 불변식
    // ==========================================

    /// 충족 판정은 두 임계값 비교식과 정확히 일치한다
    #[test]
    fn prop_capability_verdict_matches_threshold_rule(
        capability_rate in 0.0f64..=100.0,
        execution_rate in 0.0f64..=100.0,
        experience_level in 0.0f64..=100.0,
        project_experience in 0.0f64..=100.0,
    ) {
        let scorer = CapabilityScorer::new();
        let thresholds = DiagnosisThresholds::default();
        let profile = JobCapabilityProfile {
            job_id: "JOB".to_string(),
            internal_capability_rate: capability_rate,
            experience_level,
            project_experience,
            internal_execution_rate: execution_rate,
        };

        let capable = scorer.score(&profile, &thresholds).unwrap();
        let expected = capability_rate >= 70.0 || execution_rate >= 80.0;

        prop_assert_eq!(capable, expected);
    }

    // ==========================================
    // 설문 집계 불변식
    // ==========================================

    /// 응답이 있으면 전체 평균은 척도 범위 (1-5) 안에 있다
    #[test]
    fn prop_survey_mean_within_scale(scores in vec(1u8..=5, 1..50)) {
        let analyzer = SurveyAnalyzer::new();
        let responses: Vec<SurveyResponse> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| SurveyResponse {
                question_id: format!("Q{}", i + 1),
                category: "공통".to_string(),
                score,
            })
            .collect();

        let mean = analyzer.overall_mean(&responses).unwrap();

        prop_assert!(mean >= 1.0);
        prop_assert!(mean <= 5.0);
    }
}
