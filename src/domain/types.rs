// ==========================================
// HR Stat 진단 시스템 - 도메인 타입 정의
// ==========================================
// 직렬화 형식: SCREAMING_SNAKE_CASE (표시 계층과 일치)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 활동 유형 (Activity Type)
// ==========================================
// 조직 단위의 분류: 수익 직결(주활동) / 내부 지원(지원활동)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Primary, // 주활동
    Support, // 지원활동
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Primary => write!(f, "PRIMARY"),
            ActivityType::Support => write!(f, "SUPPORT"),
        }
    }
}

impl ActivityType {
    /// 문자열에서 활동 유형 해석
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PRIMARY" => Some(ActivityType::Primary),
            "SUPPORT" => Some(ActivityType::Support),
            _ => None,
        }
    }

    /// 직렬화 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Primary => "PRIMARY",
            ActivityType::Support => "SUPPORT",
        }
    }
}

// ==========================================
// 가중 평균 대상 필드 (Metric Field)
// ==========================================
// 인원 가중 평균을 적용할 조직 단위 지표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricField {
    WeeklyHours,   // 주당 근로시간
    MonthlySalary, // 월 평균 급여
    TenureYears,   // 평균 근속연수
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricField::WeeklyHours => write!(f, "WEEKLY_HOURS"),
            MetricField::MonthlySalary => write!(f, "MONTHLY_SALARY"),
            MetricField::TenureYears => write!(f, "TENURE_YEARS"),
        }
    }
}

// ==========================================
// 지표 방향성 (Indicator Polarity)
// ==========================================
// 벤치마크 비교 시 어느 방향이 우위인지 - 지표별 외부 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    HigherIsBetter, // 높을수록 우위 (예: HCROI, 소통지수)
    LowerIsBetter,  // 낮을수록 우위 (예: 노동소득분배율, 갈등지수)
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::HigherIsBetter => write!(f, "HIGHER_IS_BETTER"),
            Polarity::LowerIsBetter => write!(f, "LOWER_IS_BETTER"),
        }
    }
}

impl Polarity {
    /// 문자열에서 방향성 해석
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "HIGHER_IS_BETTER" => Some(Polarity::HigherIsBetter),
            "LOWER_IS_BETTER" => Some(Polarity::LowerIsBetter),
            _ => None,
        }
    }

    /// 방향성 반전 (속성 검증용)
    pub fn inverted(&self) -> Self {
        match self {
            Polarity::HigherIsBetter => Polarity::LowerIsBetter,
            Polarity::LowerIsBetter => Polarity::HigherIsBetter,
        }
    }
}

// ==========================================
// 벤치마크 평가 (Benchmark Evaluation)
// ==========================================
// 동률은 우수로 판정 (포함 비교)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluation {
    Excellent,        // 우수
    NeedsImprovement, // 미흡
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Excellent => write!(f, "EXCELLENT"),
            Evaluation::NeedsImprovement => write!(f, "NEEDS_IMPROVEMENT"),
        }
    }
}

impl Evaluation {
    /// 직렬화 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluation::Excellent => "EXCELLENT",
            Evaluation::NeedsImprovement => "NEEDS_IMPROVEMENT",
        }
    }
}

// ==========================================
// 활동 선정 상태 (Selection Status)
// ==========================================
// 직무별 대표 활동 선정이 상한에 도달했는지 여부
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    InProgress, // 선정 중
    Complete,   // 선정 완료
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionStatus::InProgress => write!(f, "IN_PROGRESS"),
            SelectionStatus::Complete => write!(f, "COMPLETE"),
        }
    }
}

// ==========================================
// 직무 분류 (Job Category)
// ==========================================
// 키워드 사전 기반 자동 분류의 대상 범주 (NCS 대분류 축약)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobCategory {
    SalesMarketing,    // 영업·마케팅
    Production,        // 생산·제조
    HumanResources,    // 인사·HR
    FinanceAccounting, // 재무·회계
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobCategory::SalesMarketing => write!(f, "SALES_MARKETING"),
            JobCategory::Production => write!(f, "PRODUCTION"),
            JobCategory::HumanResources => write!(f, "HUMAN_RESOURCES"),
            JobCategory::FinanceAccounting => write!(f, "FINANCE_ACCOUNTING"),
        }
    }
}

impl JobCategory {
    /// 문자열에서 직무 분류 해석
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SALES_MARKETING" => Some(JobCategory::SalesMarketing),
            "PRODUCTION" => Some(JobCategory::Production),
            "HUMAN_RESOURCES" => Some(JobCategory::HumanResources),
            "FINANCE_ACCOUNTING" => Some(JobCategory::FinanceAccounting),
            _ => None,
        }
    }

    /// 직렬화 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::SalesMarketing => "SALES_MARKETING",
            JobCategory::Production => "PRODUCTION",
            JobCategory::HumanResources => "HUMAN_RESOURCES",
            JobCategory::FinanceAccounting => "FINANCE_ACCOUNTING",
        }
    }
}
