// ==========================================
// HR Stat 진단 시스템 - 경영 지표 산출 순수 함수군
// ==========================================
// 책임: 대시보드 비율 지표의 산출 (인건비·분배율·HCROI·1인당 지표 등)
// 원칙: 무상태·무부작용·I/O 없음
// ==========================================
// 주: 분모 0 은 전부 UndefinedRatio - 산출값을 지어내지 않음
// 주: 산출값의 우수/미흡 판정은 벤치마크 평가 엔진이 담당
// ==========================================

use crate::domain::finance::IncomeStatementYearRecord;
use crate::error::{CoreError, CoreResult};

// ==========================================
// IndicatorCalculator - 지표 산출 함수군
// ==========================================
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// 유한값 전제조건 검증
    fn ensure_finite(field: &'static str, value: f64) -> CoreResult<()> {
        if !value.is_finite() {
            return Err(CoreError::invalid_input(
                field,
                format!("{} 값이 유한값이 아님", field),
            ));
        }
        Ok(())
    }

    /// 인건비 총액
    ///
    /// # 규칙
    /// - 판관비·제조원가 양쪽의 노무성 항목 합
    ///   (급여 + 퇴직급여 + 복리후생비)
    pub fn labor_cost_total(income: &IncomeStatementYearRecord) -> f64 {
        income.sga.labor_total() + income.manufacturing.labor_total()
    }

    /// 노동소득분배율 (%)
    ///
    /// # 규칙
    /// - 인건비 총액 / 부가가치 × 100
    /// - 부가가치 0 → UndefinedRatio
    pub fn labor_share_rate(labor_cost: f64, value_added: f64) -> CoreResult<f64> {
        Self::ensure_finite("labor_cost", labor_cost)?;
        Self::ensure_finite("value_added", value_added)?;

        if value_added == 0.0 {
            return Err(CoreError::undefined_ratio("labor_share_rate"));
        }

        Ok(labor_cost / value_added * 100.0)
    }

    /// HCROI (인적자본 투자수익률)
    ///
    /// # 규칙
    /// - 부가가치 / 인건비 총액 (배수)
    /// - 인건비 0 → UndefinedRatio
    pub fn hcroi(value_added: f64, labor_cost: f64) -> CoreResult<f64> {
        Self::ensure_finite("value_added", value_added)?;
        Self::ensure_finite("labor_cost", labor_cost)?;

        if labor_cost == 0.0 {
            return Err(CoreError::undefined_ratio("hcroi"));
        }

        Ok(value_added / labor_cost)
    }

    /// 1인당 지표 공통식: 금액 / 인원
    fn per_head(indicator: &'static str, amount: f64, headcount: f64) -> CoreResult<f64> {
        Self::ensure_finite("amount", amount)?;
        Self::ensure_finite("headcount", headcount)?;

        if headcount < 0.0 {
            return Err(CoreError::invalid_input(
                "headcount",
                format!("인원 {} 은 0 이상이어야 함", headcount),
            ));
        }

        if headcount == 0.0 {
            return Err(CoreError::undefined_ratio(indicator));
        }

        Ok(amount / headcount)
    }

    /// 1인당 매출액
    pub fn revenue_per_head(revenue: f64, headcount: f64) -> CoreResult<f64> {
        Self::per_head("revenue_per_head", revenue, headcount)
    }

    /// 1인당 영업이익
    pub fn operating_profit_per_head(operating_profit: f64, headcount: f64) -> CoreResult<f64> {
        Self::per_head("operating_profit_per_head", operating_profit, headcount)
    }

    /// 1인당 부가가치 (노동생산성)
    pub fn value_added_per_head(value_added: f64, headcount: f64) -> CoreResult<f64> {
        Self::per_head("value_added_per_head", value_added, headcount)
    }

    /// 전년 대비 증감률 (%)
    ///
    /// # 규칙
    /// - (당년 - 전년) / 전년 × 100
    /// - 전년 0 → UndefinedRatio
    pub fn growth_rate(current: f64, prior: f64) -> CoreResult<f64> {
        Self::ensure_finite("current", current)?;
        Self::ensure_finite("prior", prior)?;

        if prior == 0.0 {
            return Err(CoreError::undefined_ratio("growth_rate"));
        }

        Ok((current - prior) / prior * 100.0)
    }

    /// 부채비율 (%)
    ///
    /// # 규칙
    /// - 총부채 / 자본총계 × 100
    /// - 자본총계 0 → UndefinedRatio
    pub fn debt_ratio(total_liabilities: f64, total_equity: f64) -> CoreResult<f64> {
        Self::ensure_finite("total_liabilities", total_liabilities)?;
        Self::ensure_finite("total_equity", total_equity)?;

        if total_equity == 0.0 {
            return Err(CoreError::undefined_ratio("debt_ratio"));
        }

        Ok(total_liabilities / total_equity * 100.0)
    }

    /// 유동비율 (%)
    ///
    /// # 규칙
    /// - 유동자산 / 유동부채 × 100
    /// - 유동부채 0 → UndefinedRatio
    pub fn current_ratio(current_assets: f64, current_liabilities: f64) -> CoreResult<f64> {
        Self::ensure_finite("current_assets", current_assets)?;
        Self::ensure_finite("current_liabilities", current_liabilities)?;

        if current_liabilities == 0.0 {
            return Err(CoreError::undefined_ratio("current_ratio"));
        }

        Ok(current_assets / current_liabilities * 100.0)
    }
}
