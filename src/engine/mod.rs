// ==========================================
// HR Stat 진단 시스템 - 엔진 레이어
// ==========================================
// 책임: 진단 계산 규칙 엔진 구현
// 원칙: 엔진은 입출력 레코드만 다루고, 판정에는 reason 을 남긴다
// ==========================================

pub mod aggregation;
pub mod benchmark;
pub mod capability;
pub mod classification;
pub mod finance;
pub mod indicators;
pub mod summary;
pub mod survey;
pub mod workforce;

// 핵심 엔진 재노출
pub use aggregation::MetricAggregator;
pub use benchmark::BenchmarkEvaluator;
pub use capability::CapabilityScorer;
pub use classification::JobClassifier;
pub use finance::FinancialDerivation;
pub use indicators::IndicatorCalculator;
pub use summary::DiagnosisSummarizer;
pub use survey::SurveyAnalyzer;
pub use workforce::WorkforceAnalyzer;
