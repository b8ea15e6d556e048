// ==========================================
// HR Stat 진단 시스템 - 재무 파생 엔진
// ==========================================
// 책임: 재무상태표 합계 산출·대차 일치 검증·부가가치 계산
// 입력: 연도별 재무상태표/손익계산서 레코드
// 출력: 합계 / 일치 여부 / 부가가치
// ==========================================
// 주: 일치 검증은 보고만 한다 - 차단 여부는 호출자 결정
// ==========================================

use tracing::{debug, warn};

use crate::domain::finance::{BalanceTotals, FinancialYearRecord, IncomeStatementYearRecord};
use crate::error::{CoreError, CoreResult};

// ==========================================
// FinancialDerivation - 재무 파생 엔진
// ==========================================
pub struct FinancialDerivation {
    // 무상태 엔진, 허용 오차는 파라미터로 전달
}

impl FinancialDerivation {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 입력 검증
    // ==========================================

    /// 허용 오차의 유효성 검증
    ///
    /// # 검증 규칙
    /// 1. 0 이상
    /// 2. NaN / 무한대 금지
    fn validate_tolerance(&self, tolerance: f64) -> CoreResult<()> {
        if tolerance.is_nan() {
            warn!("허용 오차가 NaN");
            return Err(CoreError::invalid_input("tolerance", "허용 오차가 NaN"));
        }

        if tolerance.is_infinite() {
            warn!("허용 오차가 무한대");
            return Err(CoreError::invalid_input("tolerance", "허용 오차가 무한대"));
        }

        if tolerance < 0.0 {
            warn!(tolerance = tolerance, "허용 오차가 음수");
            return Err(CoreError::invalid_input(
                "tolerance",
                format!("허용 오차 {} 는 0 이상이어야 함", tolerance),
            ));
        }

        Ok(())
    }

    /// 재무상태표 레코드의 전 항목이 유한값인지 검증
    fn validate_record(&self, record: &FinancialYearRecord) -> CoreResult<()> {
        for (field, value) in [
            ("current_assets", record.current_assets),
            ("non_current_assets", record.non_current_assets),
            ("current_liabilities", record.current_liabilities),
            ("non_current_liabilities", record.non_current_liabilities),
            ("total_equity", record.total_equity),
        ] {
            if !value.is_finite() {
                warn!(year = record.year, field = field, "재무 항목이 비유한값");
                return Err(CoreError::invalid_input(
                    field,
                    format!("{} 년 {} 항목이 유한값이 아님", record.year, field),
                ));
            }
        }

        Ok(())
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 재무상태표 합계 산출
    ///
    /// 총자산 = 유동자산 + 비유동자산, 총부채 = 유동부채 + 비유동부채
    /// 단순 합계이므로 항상 정의됨
    pub fn derive_totals(&self, record: &FinancialYearRecord) -> BalanceTotals {
        BalanceTotals {
            total_assets: record.total_assets(),
            total_liabilities: record.total_liabilities(),
        }
    }

    /// 대차 일치 검증
    ///
    /// 계산식: |(총자산 - 총부채) - 자본총계| <= 허용 오차 (경계 포함)
    ///
    /// # 파라미터
    /// - `record`: 재무상태표 레코드
    /// - `tolerance`: 허용 오차 (통화 단위, 기본값은 설정 계층의 1.0)
    ///
    /// # 반환
    /// - `true`: 일치 (허용 오차 내)
    /// - `false`: 불일치 - 표시 방법은 호출자 결정
    pub fn validate_balance(
        &self,
        record: &FinancialYearRecord,
        tolerance: f64,
    ) -> CoreResult<bool> {
        self.validate_tolerance(tolerance)?;
        self.validate_record(record)?;

        let gap = (record.total_assets() - record.total_liabilities()) - record.total_equity;
        let balanced = gap.abs() <= tolerance;

        if balanced {
            debug!(
                year = record.year,
                gap = gap,
                tolerance = tolerance,
                "대차 일치 확인"
            );
        } else {
            warn!(
                year = record.year,
                gap = gap,
                tolerance = tolerance,
                "대차 불일치 검출"
            );
        }

        Ok(balanced)
    }

    /// 부가가치 계산
    ///
    /// 계산식: 영업이익 + 판관비 합계 + 제조원가 합계 + (이자비용 - 이자수익)
    ///
    /// 비용 블록은 접힘식 입력이므로 미입력 항목은 0 으로 기여하며
    /// 계산이 실패하는 일은 없다
    pub fn compute_value_added(&self, income: &IncomeStatementYearRecord) -> f64 {
        let value_added = income.operating_profit
            + income.sga_total()
            + income.manufacturing_total()
            + income.finance_total();

        debug!(
            year = income.year,
            operating_profit = income.operating_profit,
            sga_total = income.sga_total(),
            manufacturing_total = income.manufacturing_total(),
            finance_total = income.finance_total(),
            value_added = value_added,
            "부가가치 계산 완료"
        );

        value_added
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for FinancialDerivation {
    fn default() -> Self {
        Self::new()
    }
}
