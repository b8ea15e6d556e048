// ==========================================
// HR Stat 진단 시스템 - 인력 구성 도메인 모델
// ==========================================
// 고용 형태별 인원 집계 (연도별)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// WorkforceYearRecord - 연도별 고용 형태 인원
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkforceYearRecord {
    // ===== 기준 연도 =====
    pub year: i32, // 기준 연도

    // ===== 직접 고용 =====
    pub regular: u32,     // 정규직 (명)
    pub non_regular: u32, // 비정규직 (명)

    // ===== 간접 고용 =====
    pub contracted: u32, // 용역 (명)
    pub dispatched: u32, // 파견 (명)
}

impl WorkforceYearRecord {
    /// 직접 고용 합계 = 정규직 + 비정규직
    pub fn direct_total(&self) -> u32 {
        self.regular + self.non_regular
    }

    /// 간접 고용 합계 = 용역 + 파견
    pub fn external_total(&self) -> u32 {
        self.contracted + self.dispatched
    }

    /// 전체 인원 = 직접 + 간접
    pub fn total(&self) -> u32 {
        self.direct_total() + self.external_total()
    }
}

// ==========================================
// WorkforceComposition - 인력 구성 산출 결과
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkforceComposition {
    pub year: i32,                  // 기준 연도
    pub direct: u32,                // 직접 고용 합계
    pub external: u32,              // 간접 고용 합계
    pub total: u32,                 // 전체 인원
    pub external_share_percent: f64, // 간접 고용 비중 (%), 전체 0이면 0
}

// ==========================================
// HeadcountGrowth - 연도 간 인원 증감률
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadcountGrowth {
    pub from_year: i32,                  // 비교 기준 연도
    pub to_year: i32,                    // 비교 대상 연도
    pub growth_rate_percent: Option<f64>, // 증감률 (%), 기준 연도 인원 0이면 None (비율 미정의)
}
