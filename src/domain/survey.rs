// ==========================================
// HR Stat 진단 시스템 - 설문 도메인 모델
// ==========================================
// 갈등지수·소통지수 설문 공통 (5점 리커트 척도)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SurveyResponse - 설문 문항 응답 1건
// ==========================================
// 불변식: score 는 1..=5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub question_id: String, // 문항 식별자
    pub category: String,    // 문항 범주 태그 (예: 업무갈등, 수직소통)
    pub score: u8,           // 응답 점수 (1-5)
}
