// ==========================================
// HR Stat 진단 시스템 - 재무 도메인 모델
// ==========================================
// 수치 의미론: 모든 금액은 비음수 크기, 배정밀도 부동소수
// 천단위 구분 표기는 표시 계층 관심사
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FinancialYearRecord - 연도별 재무상태표 레코드
// ==========================================
// 점검 대상 (강제 아님): |(총자산 - 총부채) - 자본총계| <= 허용 오차
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialYearRecord {
    // ===== 기준 연도 =====
    pub year: i32, // 회계연도

    // ===== 자산 =====
    pub current_assets: f64,     // 유동자산
    pub non_current_assets: f64, // 비유동자산

    // ===== 부채 =====
    pub current_liabilities: f64,     // 유동부채
    pub non_current_liabilities: f64, // 비유동부채

    // ===== 자본 =====
    pub total_equity: f64, // 자본총계
}

impl FinancialYearRecord {
    /// 총자산 = 유동자산 + 비유동자산
    pub fn total_assets(&self) -> f64 {
        self.current_assets + self.non_current_assets
    }

    /// 총부채 = 유동부채 + 비유동부채
    pub fn total_liabilities(&self) -> f64 {
        self.current_liabilities + self.non_current_liabilities
    }
}

// ==========================================
// BalanceTotals - 재무상태표 합계 산출 결과
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceTotals {
    pub total_assets: f64,      // 총자산
    pub total_liabilities: f64, // 총부채
}

// ==========================================
// CostComponents - 6개 구성 비용 블록
// ==========================================
// 판관비/제조원가에 공통으로 쓰이는 접힘식 입력 블록
// 미입력 항목은 0으로 간주 (계산 실패 없음)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostComponents {
    #[serde(default)]
    pub salaries: f64, // 급여
    #[serde(default)]
    pub retirement: f64, // 퇴직급여
    #[serde(default)]
    pub welfare: f64, // 복리후생비
    #[serde(default)]
    pub rent: f64, // 지급임차료
    #[serde(default)]
    pub tax: f64, // 세금과공과
    #[serde(default)]
    pub depreciation: f64, // 감가상각비
}

impl CostComponents {
    /// 6개 항목 합계
    pub fn total(&self) -> f64 {
        self.salaries + self.retirement + self.welfare + self.rent + self.tax + self.depreciation
    }

    /// 노무 관련 항목 합계 (급여 + 퇴직급여 + 복리후생비)
    ///
    /// # 반환
    /// 인건비 총액 산출에 쓰이는 노무성 비용 합
    pub fn labor_total(&self) -> f64 {
        self.salaries + self.retirement + self.welfare
    }
}

// ==========================================
// IncomeStatementYearRecord - 연도별 손익계산서 레코드
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementYearRecord {
    // ===== 기준 연도 =====
    pub year: i32, // 회계연도

    // ===== 손익 항목 =====
    pub revenue: f64,          // 매출액
    pub cost_of_sales: f64,    // 매출원가
    pub operating_profit: f64, // 영업이익

    // ===== 금융 항목 =====
    #[serde(default)]
    pub interest_expense: f64, // 이자비용
    #[serde(default)]
    pub interest_income: f64, // 이자수익

    // ===== 비용 블록 (접힘식 입력, 미입력 시 0) =====
    #[serde(default)]
    pub sga: CostComponents, // 판매비와관리비 구성
    #[serde(default)]
    pub manufacturing: CostComponents, // 제조원가 구성
}

impl IncomeStatementYearRecord {
    /// 매출총이익 = 매출액 - 매출원가
    pub fn gross_profit(&self) -> f64 {
        self.revenue - self.cost_of_sales
    }

    /// 판관비 합계
    pub fn sga_total(&self) -> f64 {
        self.sga.total()
    }

    /// 제조원가 합계
    pub fn manufacturing_total(&self) -> f64 {
        self.manufacturing.total()
    }

    /// 금융비용 순액 = 이자비용 - 이자수익 (비용 가산 환원 처리)
    pub fn finance_total(&self) -> f64 {
        self.interest_expense - self.interest_income
    }
}
