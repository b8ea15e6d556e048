// ==========================================
// HR Stat 진단 시스템 - 설문 지수 산출 엔진
// ==========================================
// 책임: 5점 리커트 응답의 전체 평균·범주별 평균·응답률 산출
// 입력: 설문 응답 목록 (갈등지수·소통지수 공통)
// 출력: 지수값 - 업계 평균 대비 판정은 벤치마크 평가로 위임
// ==========================================
// 주: 빈 응답 목록은 정의된 0 결과 (가중치 합 0 정책과 동일)
// ==========================================

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::survey::SurveyResponse;
use crate::error::{CoreError, CoreResult};

// 리커트 척도 점수 범위
const SCORE_MIN: u8 = 1;
const SCORE_MAX: u8 = 5;

// ==========================================
// SurveyAnalyzer - 설문 지수 산출 엔진
// ==========================================
pub struct SurveyAnalyzer {
    // 무상태 엔진
}

impl SurveyAnalyzer {
    /// 생성자
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 입력 검증
    // ==========================================

    /// 응답 점수가 1-5 범위인지 검증
    fn validate_responses(&self, responses: &[SurveyResponse]) -> CoreResult<()> {
        for response in responses {
            if !(SCORE_MIN..=SCORE_MAX).contains(&response.score) {
                warn!(
                    question_id = %response.question_id,
                    score = response.score,
                    "응답 점수가 1-5 범위를 벗어남"
                );
                return Err(CoreError::invalid_input(
                    "score",
                    format!(
                        "문항 {} 의 점수 {} 는 1-5 범위여야 함",
                        response.question_id, response.score
                    ),
                ));
            }
        }

        Ok(())
    }

    // ==========================================
    // 핵심 메서드
    // ==========================================

    /// 전체 평균 점수
    ///
    /// # 반환
    /// - 전 응답 점수의 산술 평균
    /// - 빈 목록이면 0 (정의된 결과, 오류 아님)
    pub fn overall_mean(&self, responses: &[SurveyResponse]) -> CoreResult<f64> {
        self.validate_responses(responses)?;

        if responses.is_empty() {
            debug!("응답 없음, 전체 평균 0 반환");
            return Ok(0.0);
        }

        let total: u32 = responses.iter().map(|r| r.score as u32).sum();
        let mean = total as f64 / responses.len() as f64;

        debug!(responses = responses.len(), mean = mean, "전체 평균 산출 완료");

        Ok(mean)
    }

    /// 범주별 평균 점수
    ///
    /// # 반환
    /// 범주 태그 -> 해당 범주 응답의 산술 평균
    pub fn category_means(
        &self,
        responses: &[SurveyResponse],
    ) -> CoreResult<HashMap<String, f64>> {
        self.validate_responses(responses)?;

        let mut sums: HashMap<String, (u32, u32)> = HashMap::new();
        for response in responses {
            let entry = sums.entry(response.category.clone()).or_insert((0, 0));
            entry.0 += response.score as u32;
            entry.1 += 1;
        }

        let means = sums
            .into_iter()
            .map(|(category, (sum, count))| (category, sum as f64 / count as f64))
            .collect::<HashMap<_, _>>();

        debug!(categories = means.len(), "범주별 평균 산출 완료");

        Ok(means)
    }

    /// 응답률 (%)
    ///
    /// 계산식: 응답 인원 / 배포 인원 × 100
    ///
    /// # 오류
    /// - 배포 인원 0 -> `UndefinedRatio`
    /// - 응답 인원 > 배포 인원 -> `InvalidInput`
    pub fn response_rate(&self, answered: usize, distributed: usize) -> CoreResult<f64> {
        if distributed == 0 {
            warn!("배포 인원 0, 응답률 미정의");
            return Err(CoreError::undefined_ratio("response_rate"));
        }

        if answered > distributed {
            warn!(
                answered = answered,
                distributed = distributed,
                "응답 인원이 배포 인원을 초과"
            );
            return Err(CoreError::invalid_input(
                "answered",
                format!("응답 인원 {} 은 배포 인원 {} 을 넘을 수 없음", answered, distributed),
            ));
        }

        Ok(answered as f64 / distributed as f64 * 100.0)
    }
}

// ==========================================
// Default trait 구현
// ==========================================
impl Default for SurveyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
