// ==========================================
// HR Stat 진단 시스템 - 조직 지표 집계 엔진
// ==========================================
// 책임: 인원 가중 평균·활동 유형 인원 비중 계산
// 입력: 조직 단위 목록 (호출자 소유, 읽기 전용 차용)
// 출력: 가중 평균값 / 활동 비중
// ==========================================
// 주: 가중치 합 0 은 오류가 아니라 정의된 0 결과
// ==========================================

use tracing::{debug, warn};

use crate::domain::organization::{ActivityRatio, HeadcountWeighted, OrganizationalUnit};
use crate::domain::types::{ActivityType, MetricField};
use crate::error::{CoreError, CoreResult};

// ==========================================
// MetricAggregator - 조직 지표 집계 엔진
// ==========================================
pub struct MetricAggregator {
    // 무상태 엔진, 모든 입력은 파라미터로 전달
}

impl MetricAggregator {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 입력 검증
    // ==========================================

    /// 조직 단위 목록의 전제조건 검증
    ///
    /// # 검증 규칙
    /// 1. 평균 인원은 0 이상의 유한값
    /// 2. `field` 지정 시 해당 지표값도 0 이상의 유한값
    fn validate_units(
        &self,
        units: &[OrganizationalUnit],
        field: Option<MetricField>,
    ) -> CoreResult<()> {
        for unit in units {
            if !unit.average_headcount.is_finite() || unit.average_headcount < 0.0 {
                warn!(
                    unit = %unit.name,
                    headcount = unit.average_headcount,
                    "평균 인원이 음수 또는 비유한값"
                );
                return Err(CoreError::invalid_input(
                    "average_headcount",
                    format!(
                        "조직 단위 {} 의 평균 인원 {} 은 0 이상의 유한값이어야 함",
                        unit.name, unit.average_headcount
                    ),
                ));
            }

            if let Some(field) = field {
                let value = unit.metric(field);
                if !value.is_finite() || value < 0.0 {
                    warn!(
                        unit = %unit.name,
                        field = %field,
                        value = value,
                        "지표값이 음수 또는 비유한값"
                    );
                    return Err(CoreError::invalid_input(
                        "metric",
                        format!(
                            "조직 단위 {} 의 {} 값 {} 은 0 이상의 유한값이어야 함",
                            unit.name, field, value
                        ),
                    ));
                }
            }
        }

        Ok(())
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 인원 가중 평균 계산
    ///
    /// 계산식: sum(지표값 × 평균 인원) / sum(평균 인원)
    ///
    /// # 파라미터
    /// - `units`: 조직 단위 목록 (빈 목록 허용)
    /// - `field`: 가중 평균 대상 필드
    ///
    /// # 반환
    /// - 가중 평균값
    /// - 가중치 합이 0 이면 (빈 목록 또는 전 단위 인원 0) 0 을 반환
    pub fn weighted_average(
        &self,
        units: &[OrganizationalUnit],
        field: MetricField,
    ) -> CoreResult<f64> {
        self.validate_units(units, Some(field))?;

        let total_weight: f64 = units.iter().map(|u| u.weight()).sum();

        // 가중치 합 0 -> 정의된 0 결과 (NaN 금지)
        if total_weight == 0.0 {
            debug!(field = %field, units = units.len(), "가중치 합 0, 평균 0 반환");
            return Ok(0.0);
        }

        let weighted_sum: f64 = units.iter().map(|u| u.metric(field) * u.weight()).sum();
        let average = weighted_sum / total_weight;

        debug!(
            field = %field,
            units = units.len(),
            total_weight = total_weight,
            average = average,
            "가중 평균 계산 완료"
        );

        Ok(average)
    }

    /// 활동 유형별 인원 비중 계산
    ///
    /// # 파라미터
    /// - `units`: 조직 단위 목록
    ///
    /// # 반환
    /// - 주활동/지원활동 인원 비중 (%)
    /// - 총인원 > 0 이면 두 비율의 합은 100 (부동소수 허용 오차 내)
    /// - 총인원 0 이면 양쪽 모두 0
    pub fn activity_ratio(&self, units: &[OrganizationalUnit]) -> CoreResult<ActivityRatio> {
        self.validate_units(units, None)?;

        let total: f64 = units.iter().map(|u| u.weight()).sum();

        if total == 0.0 {
            debug!(units = units.len(), "총인원 0, 활동 비중 양쪽 0 반환");
            return Ok(ActivityRatio::zero());
        }

        let primary: f64 = units
            .iter()
            .filter(|u| u.activity_type == ActivityType::Primary)
            .map(|u| u.weight())
            .sum();
        let support = total - primary;

        let ratio = ActivityRatio {
            primary_percent: primary / total * 100.0,
            support_percent: support / total * 100.0,
        };

        debug!(
            total_headcount = total,
            primary_percent = ratio.primary_percent,
            support_percent = ratio.support_percent,
            "활동 비중 계산 완료"
        );

        Ok(ratio)
    }

    /// 총 평균 인원 합계
    ///
    /// # 반환
    /// 전 조직 단위의 평균 인원 합 (빈 목록이면 0)
    pub fn total_headcount(&self, units: &[OrganizationalUnit]) -> CoreResult<f64> {
        self.validate_units(units, None)?;
        Ok(units.iter().map(|u| u.weight()).sum())
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for MetricAggregator {
    fn default() -> Self {
        Self::new()
    }
}
