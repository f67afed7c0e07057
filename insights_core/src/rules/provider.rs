// src/rules/provider.rs
//! Rule information lookup
//!
//! The normalizer only needs [`RuleInformationProvider`]; the registry is the
//! stock implementation with duplicate detection and a builder.

use crate::rules::errors::RuleError;
use crate::rules::information::RuleInformation;
use std::collections::HashMap;

/// Maps a rule identifier to its information
pub trait RuleInformationProvider {
    /// `None` marks an unsupported rule; its findings are skipped
    fn get_rule_information(&self, rule_id: &str) -> Option<&RuleInformation>;
}

/// Rule registry keyed by rule id, remembering registration order
#[derive(Debug, Default)]
pub struct RuleInformationRegistry {
    rules: HashMap<String, RuleInformation>,
    order: Vec<String>,
}

impl RuleInformationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule; a second registration of the same id is rejected
    pub fn register(&mut self, rule: RuleInformation) -> Result<(), RuleError> {
        let rule_id = rule.rule_id().to_string();

        if rule_id.trim().is_empty() {
            return Err(RuleError::invalid_rule(&rule_id, "rule id must not be empty"));
        }

        if self.rules.contains_key(&rule_id) {
            return Err(RuleError::DuplicateRule(rule_id));
        }

        self.order.push(rule_id.clone());
        self.rules.insert(rule_id, rule);
        Ok(())
    }

    /// Remove rule registration
    pub fn unregister(&mut self, rule_id: &str) -> Result<RuleInformation, RuleError> {
        let rule = self
            .rules
            .remove(rule_id)
            .ok_or_else(|| RuleError::UnknownRule(rule_id.to_string()))?;
        self.order.retain(|id| id != rule_id);
        Ok(rule)
    }

    /// Check if rule is registered
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.rules.contains_key(rule_id)
    }

    /// Registered rule ids in registration order
    pub fn list_rule_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleInformationProvider for RuleInformationRegistry {
    fn get_rule_information(&self, rule_id: &str) -> Option<&RuleInformation> {
        self.rules.get(rule_id)
    }
}

/// Builder for creating registries fluently
pub struct RuleRegistryBuilder {
    registry: RuleInformationRegistry,
}

impl RuleRegistryBuilder {
    pub fn new() -> Self {
        Self {
            registry: RuleInformationRegistry::new(),
        }
    }

    pub fn add_rule(mut self, rule: RuleInformation) -> Result<Self, RuleError> {
        self.registry.register(rule)?;
        Ok(self)
    }

    pub fn build(self) -> RuleInformationRegistry {
        self.registry
    }
}

impl Default for RuleRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnifiedResolution;
    use assert_matches::assert_matches;

    fn rule(id: &str) -> RuleInformation {
        RuleInformation::with_fixed_resolution(id, "desc", UnifiedResolution::default())
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = RuleRegistryBuilder::new()
            .add_rule(rule("B"))
            .unwrap()
            .add_rule(rule("A"))
            .unwrap()
            .build();

        assert!(registry.get_rule_information("A").is_some());
        assert!(registry.get_rule_information("C").is_none());
        assert_eq!(registry.list_rule_ids(), vec!["B", "A"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let mut registry = RuleInformationRegistry::new();
        registry.register(rule("A")).unwrap();

        assert_matches!(registry.register(rule("A")), Err(RuleError::DuplicateRule(id)) if id == "A");
    }

    #[test]
    fn test_empty_rule_id_rejected() {
        let mut registry = RuleInformationRegistry::new();
        assert_matches!(registry.register(rule(" ")), Err(RuleError::InvalidRule { .. }));
    }

    #[test]
    fn test_unregister() {
        let mut registry = RuleInformationRegistry::new();
        registry.register(rule("A")).unwrap();

        assert!(registry.unregister("A").is_ok());
        assert!(!registry.has_rule("A"));
        assert!(registry.is_empty());
        assert_matches!(registry.unregister("A"), Err(RuleError::UnknownRule(_)));
    }
}
