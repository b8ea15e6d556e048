// ==========================================
// HR Stat 진단 시스템 - 인력 구성 분석 엔진
// ==========================================
// 책임: 고용 형태별 구성 집계·간접 고용 비중·연도 간 인원 증감률
// 입력: 연도별 고용 형태 인원 레코드
// 출력: 구성 집계 / 증감률 목록
// ==========================================

use tracing::{debug, warn};

use crate::domain::workforce::{HeadcountGrowth, WorkforceComposition, WorkforceYearRecord};
use crate::error::{CoreError, CoreResult};

// ==========================================
// WorkforceAnalyzer - 인력 구성 분석 엔진
// ==========================================
pub struct WorkforceAnalyzer {
    // 무상태 엔진
}

impl WorkforceAnalyzer {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 단일 연도 인력 구성 집계
    ///
    /// 직접 고용 = 정규직 + 비정규직, 간접 고용 = 용역 + 파견
    /// 간접 고용 비중은 전체 인원 0 이면 0 (정의된 결과)
    pub fn compose(&self, record: &WorkforceYearRecord) -> WorkforceComposition {
        let direct = record.direct_total();
        let external = record.external_total();
        let total = record.total();

        let external_share_percent = if total == 0 {
            0.0
        } else {
            external as f64 / total as f64 * 100.0
        };

        debug!(
            year = record.year,
            direct = direct,
            external = external,
            total = total,
            "인력 구성 집계 완료"
        );

        WorkforceComposition {
            year: record.year,
            direct,
            external,
            total,
            external_share_percent,
        }
    }

    /// 연도별 인력 구성 집계 (입력 순서 유지)
    pub fn compose_all(&self, records: &[WorkforceYearRecord]) -> Vec<WorkforceComposition> {
        records.iter().map(|r| self.compose(r)).collect()
    }

    /// 연도 간 전체 인원 증감률
    ///
    /// 계산식: (당년 인원 - 전년 인원) / 전년 인원 × 100, 인접 연도쌍마다 1건
    ///
    /// # 전제조건
    /// - 레코드는 연도 오름차순 (중복 연도 금지)
    ///
    /// # 반환
    /// - 전년 인원 0 인 쌍은 증감률 None (비율 미정의)
    pub fn year_over_year(
        &self,
        records: &[WorkforceYearRecord],
    ) -> CoreResult<Vec<HeadcountGrowth>> {
        for window in records.windows(2) {
            if window[1].year <= window[0].year {
                warn!(
                    prior_year = window[0].year,
                    next_year = window[1].year,
                    "연도 순서가 오름차순이 아님"
                );
                return Err(CoreError::invalid_input(
                    "year",
                    format!(
                        "연도 {} 다음에 {} 가 올 수 없음 (오름차순 필요)",
                        window[0].year, window[1].year
                    ),
                ));
            }
        }

        let growths = records
            .windows(2)
            .map(|window| {
                let prior = window[0].total();
                let current = window[1].total();

                let growth_rate_percent = if prior == 0 {
                    warn!(
                        from_year = window[0].year,
                        "전년 인원 0, 증감률 미정의"
                    );
                    None
                } else {
                    Some((current as f64 - prior as f64) / prior as f64 * 100.0)
                };

                HeadcountGrowth {
                    from_year: window[0].year,
                    to_year: window[1].year,
                    growth_rate_percent,
                }
            })
            .collect();

        Ok(growths)
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for WorkforceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
