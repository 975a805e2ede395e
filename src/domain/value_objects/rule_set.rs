//! Classification rules
//!
//! An ordered list of `(pattern, status)` pairs. Order is author intent:
//! the first pattern found in a file decides its status.

use serde::{Deserialize, Serialize};

use super::Status;

/// One substring pattern and the status it assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Literal, case-sensitive substring. Empty matches everything.
    pub pattern: String,
    pub status: Status,
}

impl ClassificationRule {
    pub fn new(pattern: impl Into<String>, status: Status) -> Self {
        Self {
            pattern: pattern.into(),
            status,
        }
    }

    /// Whether this rule's pattern occurs in `content`.
    pub fn matches(&self, content: &str) -> bool {
        content.contains(self.pattern.as_str())
    }

    /// An empty pattern; always matches.
    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Ordered classification rules, evaluated first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// First matching rule, if any.
    pub fn first_match(&self, content: &str) -> Option<&ClassificationRule> {
        self.rules.iter().find(|rule| rule.matches(content))
    }

    /// Whether the last rule is a catch-all.
    pub fn has_catch_all(&self) -> bool {
        self.rules.last().is_some_and(ClassificationRule::is_catch_all)
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(vec![
            ClassificationRule::new("ERROR", Status::Failure),
            ClassificationRule::new("OVERRIDE", Status::Override),
            ClassificationRule::new("RETRY", Status::Retry),
            ClassificationRule::new("SUCCESS", Status::Success),
            ClassificationRule::new("", Status::Unknown),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_end_with_catch_all() {
        let rules = RuleSet::default();
        assert!(rules.has_catch_all());
        assert_eq!(rules.rules().last().unwrap().status, Status::Unknown);
    }

    #[test]
    fn first_match_respects_order_not_severity() {
        let rules = RuleSet::new(vec![
            ClassificationRule::new("RETRY", Status::Retry),
            ClassificationRule::new("ERROR", Status::Failure),
        ]);
        let rule = rules.first_match("RETRY after ERROR").unwrap();
        assert_eq!(rule.status, Status::Retry);
    }

    #[test]
    fn match_is_case_sensitive() {
        let rules = RuleSet::new(vec![ClassificationRule::new("ERROR", Status::Failure)]);
        assert!(rules.first_match("error: disk full").is_none());
    }

    #[test]
    fn empty_set_has_no_catch_all() {
        let rules = RuleSet::new(Vec::new());
        assert!(rules.is_empty());
        assert!(!rules.has_catch_all());
    }

    #[test]
    fn deserializes_as_plain_list() {
        let json = r#"[{"pattern":"FAILED","status":"failure"},{"pattern":"","status":"unknown"}]"#;
        let rules: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].pattern, "FAILED");
    }
}
