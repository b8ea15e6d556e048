// ==========================================
// HR Stat 진단 시스템 - 계산 코어 라이브러리
// ==========================================
// 기술 스택: Rust (순수 계산 라이브러리)
// 시스템 정위: 진단 지표 계산 코어 (표시 계층은 외부 협력자)
// 정책: 모든 연산은 동기·무상태·부작용 없음
// ==========================================

// 국제화 시스템 초기화
rust_i18n::i18n!("locales", fallback = "ko-KR");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 엔진 계층 - 진단 계산 규칙
pub mod engine;

// 설정 계층 - 임계값·분류 규칙
pub mod config;

// 오류 타입
pub mod error;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// ==========================================
// 핵심 타입 재수출
// ==========================================

// 도메인 타입
pub use domain::types::{
    ActivityType, Evaluation, JobCategory, MetricField, Polarity, SelectionStatus,
};

// 도메인 엔티티
pub use domain::{
    ActivityRatio, BalanceTotals, BenchmarkResult, BenchmarkTally, CostComponents,
    FinancialYearRecord, IncomeStatementYearRecord, IndicatorComparison, JobCapabilityProfile,
    OrganizationSummary, OrganizationalUnit, SurveyResponse, WorkforceComposition,
    WorkforceYearRecord,
};

// 엔진
pub use engine::{
    BenchmarkEvaluator, CapabilityScorer, DiagnosisSummarizer, FinancialDerivation,
    IndicatorCalculator, JobClassifier, MetricAggregator, SurveyAnalyzer, WorkforceAnalyzer,
};

// 설정
pub use config::{ClassificationRules, DiagnosisThresholds, KeywordRule};

// 오류
pub use error::{CoreError, CoreResult};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 명칭
pub const APP_NAME: &str = "HR Stat 진단 시스템";

// ==========================================
// 사전 컴파일 점검
// ==========================================
