// src/rules/errors.rs
//! Error types for rule registration

/// Rule registry errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule '{0}' is already registered")]
    DuplicateRule(String),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Invalid rule '{rule_id}': {reason}")]
    InvalidRule { rule_id: String, reason: String },
}

impl RuleError {
    pub fn invalid_rule(rule_id: &str, reason: &str) -> Self {
        Self::InvalidRule {
            rule_id: rule_id.to_string(),
            reason: reason.to_string(),
        }
    }
}
