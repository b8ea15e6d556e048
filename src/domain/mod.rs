// ==========================================
// HR Stat 진단 시스템 - 도메인 모델 계층
// ==========================================
// 책임: 도메인 엔티티·타입·파생값 접근자 정의
// 금지: 데이터 접근 로직 없음, 엔진 로직 없음
// ==========================================

pub mod benchmark;
pub mod finance;
pub mod job;
pub mod organization;
pub mod survey;
pub mod types;
pub mod workforce;

// 핵심 타입 재수출
pub use benchmark::{BenchmarkResult, BenchmarkTally, IndicatorComparison};
pub use finance::{BalanceTotals, CostComponents, FinancialYearRecord, IncomeStatementYearRecord};
pub use job::JobCapabilityProfile;
pub use organization::{
    ActivityRatio, HeadcountWeighted, OrganizationSummary, OrganizationalUnit,
};
pub use survey::SurveyResponse;
pub use types::{
    ActivityType, Evaluation, JobCategory, MetricField, Polarity, SelectionStatus,
};
pub use workforce::{HeadcountGrowth, WorkforceComposition, WorkforceYearRecord};
