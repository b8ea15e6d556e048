// ==========================================
// HR Stat 진단 시스템 - 직무 자동 분류 엔진
// ==========================================
// 규칙: 키워드 포함 검사, 규칙표 순서가 우선순위 (선착 규칙 승리)
// ==========================================

use tracing::debug;

use crate::config::ClassificationRules;
use crate::domain::types::JobCategory;

/// JobClassifier - 직무 자동 분류 엔진
pub struct JobClassifier {
    rules: ClassificationRules,
}

impl JobClassifier {
    pub fn new(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    /// 역할/과업 자유 기술 텍스트를 직무 분류로 매핑
    ///
    /// # 규칙
    /// 1. 규칙표를 앞에서부터 순서대로 검사
    /// 2. 텍스트에 키워드가 포함된 첫 규칙이 분류를 결정
    ///    (뒤 규칙이 앞 결과를 덮어쓰지 않음)
    /// 3. 걸린 규칙이 없으면 None - 수동 분류는 호출자 몫
    ///
    /// # 파라미터
    /// - `text`: 역할/과업 기술 텍스트
    pub fn classify(&self, text: &str) -> Option<JobCategory> {
        let text = text.trim();

        if text.is_empty() {
            debug!("분류 대상 텍스트가 비어 있음");
            return None;
        }

        for rule in &self.rules.rules {
            if text.contains(rule.keyword.as_str()) {
                debug!(
                    keyword = %rule.keyword,
                    category = %rule.category,
                    "분류 규칙 일치"
                );
                return Some(rule.category);
            }
        }

        debug!(text_len = text.len(), "일치하는 분류 규칙 없음");
        None
    }

    /// 현재 규칙표 참조
    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }
}

impl Default for JobClassifier {
    fn default() -> Self {
        Self::new(ClassificationRules::default())
    }
}
