// ==========================================
// HR Stat 진단 시스템 - 조직 단위 도메인 모델
// ==========================================
// 소유권: 호출자(표시 계층)가 전적으로 소유, 코어는 읽기 전용 차용
// ==========================================

use serde::{Deserialize, Serialize};

use super::types::{ActivityType, MetricField};

// ==========================================
// OrganizationalUnit - 조직 단위 (팀/부서)
// ==========================================
// 불변식: average_headcount >= 0, 인원 0인 단위는 가중치 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    // ===== 식별 =====
    pub name: String,                // 조직 단위명
    pub activity_type: ActivityType, // 활동 유형 (주/지원)

    // ===== 인원·근로 지표 =====
    pub average_headcount: f64,      // 평균 인원 (명)
    pub average_weekly_hours: f64,   // 주당 평균 근로시간 (시간)
    pub average_monthly_salary: f64, // 월 평균 급여 (만원)
    pub average_tenure_years: f64,   // 평균 근속연수 (년)
}

// ==========================================
// Trait: HeadcountWeighted
// ==========================================
// 용도: MetricAggregator 가중 평균 계산 인터페이스
pub trait HeadcountWeighted {
    /// 가중치 (평균 인원)
    fn weight(&self) -> f64;

    /// 필드별 지표값 조회
    fn metric(&self, field: MetricField) -> f64;
}

// ==========================================
// HeadcountWeighted trait 구현
// ==========================================
impl HeadcountWeighted for OrganizationalUnit {
    fn weight(&self) -> f64 {
        self.average_headcount
    }

    /// 필드별 지표값 조회
    ///
    /// # 파라미터
    /// - `field`: 가중 평균 대상 필드
    ///
    /// # 반환
    /// 해당 필드의 값 (시간/급여/근속)
    fn metric(&self, field: MetricField) -> f64 {
        match field {
            MetricField::WeeklyHours => self.average_weekly_hours,
            MetricField::MonthlySalary => self.average_monthly_salary,
            MetricField::TenureYears => self.average_tenure_years,
        }
    }
}

// ==========================================
// ActivityRatio - 활동 유형별 인원 비중
// ==========================================
// 불변식: 총인원 > 0 이면 두 비율의 합은 100 (부동소수 허용 오차 내)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRatio {
    pub primary_percent: f64, // 주활동 인원 비중 (%)
    pub support_percent: f64, // 지원활동 인원 비중 (%)
}

impl ActivityRatio {
    /// 총인원 0일 때의 정의된 결과 (양쪽 모두 0)
    pub fn zero() -> Self {
        ActivityRatio {
            primary_percent: 0.0,
            support_percent: 0.0,
        }
    }
}

// ==========================================
// OrganizationSummary - 조직 진단 요약
// ==========================================
// 요약 페이지의 집계 스트립 1건에 해당하는 불변 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    // ===== 인원 집계 =====
    pub unit_count: usize,       // 조직 단위 수
    pub total_headcount: f64,    // 총 평균 인원 (명)

    // ===== 가중 평균 =====
    pub avg_weekly_hours: f64,   // 주당 근로시간 가중 평균
    pub avg_monthly_salary: f64, // 월 평균 급여 가중 평균
    pub avg_tenure_years: f64,   // 평균 근속연수 가중 평균

    // ===== 활동 비중 =====
    pub activity_ratio: ActivityRatio, // 주/지원 활동 인원 비중
}
