use serde::{Deserialize, Serialize};

use crate::domain::types::JobCategory;
use crate::error::{CoreError, CoreResult};

/// 키워드 -> 직무 분류 규칙 1건
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    /// 포함 여부를 검사할 키워드
    pub keyword: String,

    /// 키워드가 걸렸을 때 부여할 분류
    pub category: JobCategory,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, category: JobCategory) -> Self {
        KeywordRule {
            keyword: keyword.into(),
            category,
        }
    }
}

/// 직무 자동 분류 규칙표
///
/// 순서가 곧 우선순위: 앞에서부터 검사해 처음 걸린 규칙이 결정한다
/// (뒤의 규칙이 앞의 결과를 덮어쓰는 일 없음)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRules {
    #[serde(default = "default_rules")]
    pub rules: Vec<KeywordRule>,
}

/// 기본 규칙표 (12건, 분류 블록별 묶음 순서)
fn default_rules() -> Vec<KeywordRule> {
    vec![
        // 영업·마케팅
        KeywordRule::new("영업", JobCategory::SalesMarketing),
        KeywordRule::new("마케팅", JobCategory::SalesMarketing),
        KeywordRule::new("판매", JobCategory::SalesMarketing),
        // 생산·제조
        KeywordRule::new("생산", JobCategory::Production),
        KeywordRule::new("제조", JobCategory::Production),
        KeywordRule::new("품질", JobCategory::Production),
        // 인사·HR
        KeywordRule::new("인사", JobCategory::HumanResources),
        KeywordRule::new("채용", JobCategory::HumanResources),
        KeywordRule::new("교육", JobCategory::HumanResources),
        // 재무·회계
        KeywordRule::new("재무", JobCategory::FinanceAccounting),
        KeywordRule::new("회계", JobCategory::FinanceAccounting),
        KeywordRule::new("경리", JobCategory::FinanceAccounting),
    ]
}

impl Default for ClassificationRules {
    fn default() -> Self {
        ClassificationRules {
            rules: default_rules(),
        }
    }
}

impl ClassificationRules {
    /// 규칙표 유효성 검증
    ///
    /// # 검증 규칙
    /// 1. 규칙표는 비어 있으면 안 됨
    /// 2. 빈 키워드 금지
    pub fn validate(&self) -> CoreResult<()> {
        if self.rules.is_empty() {
            return Err(CoreError::invalid_input("rules", "분류 규칙표가 비어 있음"));
        }

        for rule in &self.rules {
            if rule.keyword.trim().is_empty() {
                return Err(CoreError::invalid_input("keyword", "빈 키워드는 허용되지 않음"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_twelve_rules() {
        let rules = ClassificationRules::default();
        assert_eq!(rules.rules.len(), 12);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_default_table_order_groups_by_category() {
        let rules = ClassificationRules::default();
        assert_eq!(rules.rules[0].category, JobCategory::SalesMarketing);
        assert_eq!(rules.rules[3].category, JobCategory::Production);
        assert_eq!(rules.rules[6].category, JobCategory::HumanResources);
        assert_eq!(rules.rules[9].category, JobCategory::FinanceAccounting);
    }

    #[test]
    fn test_validate_rejects_empty_keyword() {
        let rules = ClassificationRules {
            rules: vec![KeywordRule::new("  ", JobCategory::Production)],
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let rules = ClassificationRules { rules: vec![] };
        assert!(rules.validate().is_err());
    }
}
