use super::catalog::ResponseCategory;

/// A group of substrings that, if any is present, selects `category`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub category: ResponseCategory,
}

impl KeywordRule {
    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Rules in evaluation order. The first rule that matches wins.
///
/// Matching is a raw substring test with no word boundaries, so "interesting"
/// triggers the recovery rule through "rest".
pub const PRIORITY_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["beginner", "start", "new"],
        category: ResponseCategory::Beginner,
    },
    KeywordRule {
        keywords: &["frequency", "how often", "how many times"],
        category: ResponseCategory::Frequency,
    },
    KeywordRule {
        keywords: &["diet", "eat", "nutrition"],
        category: ResponseCategory::Nutrition,
    },
    KeywordRule {
        keywords: &["recovery", "rest", "fatigue"],
        category: ResponseCategory::Recovery,
    },
    KeywordRule {
        keywords: &["advice", "plan", "how to"],
        category: ResponseCategory::Planning,
    },
];

/// Case-insensitive classification of a single message.
///
/// Returns `None` when no rule fires. The caller decides the default.
pub fn classify(text: &str) -> Option<ResponseCategory> {
    let text = text.to_lowercase();
    PRIORITY_RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| rule.category)
}
