// src/rules/information.rs
//! Per-rule behavior bundle: description, inclusion predicate and fix formatter

use crate::types::{GuidanceLink, RuleResultsData, UnifiedResolution, UnifiedRule};
use std::fmt;

/// Decides whether a raw finding should surface at all
pub type IncludeResultFn = Box<dyn Fn(&RuleResultsData) -> bool>;

/// Builds the "how to fix" guidance for one finding
pub type ResolutionFn = Box<dyn Fn(&RuleResultsData) -> UnifiedResolution>;

/// Inclusion predicate that keeps every finding
pub fn include_all_results(_: &RuleResultsData) -> bool {
    true
}

pub struct RuleInformation {
    rule_id: String,
    rule_description: String,
    url: Option<String>,
    guidance: Vec<GuidanceLink>,
    include_result: IncludeResultFn,
    resolution: ResolutionFn,
}

impl RuleInformation {
    pub fn new(
        rule_id: &str,
        rule_description: &str,
        resolution: ResolutionFn,
        include_result: IncludeResultFn,
    ) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            rule_description: rule_description.to_string(),
            url: None,
            guidance: Vec::new(),
            include_result,
            resolution,
        }
    }

    /// Rule whose resolution is the same sentence for every finding
    pub fn with_fixed_resolution(
        rule_id: &str,
        rule_description: &str,
        resolution: UnifiedResolution,
    ) -> Self {
        Self::new(
            rule_id,
            rule_description,
            Box::new(move |_| resolution.clone()),
            Box::new(include_all_results),
        )
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_guidance(mut self, text: &str, href: &str) -> Self {
        self.guidance.push(GuidanceLink {
            text: text.to_string(),
            href: href.to_string(),
        });
        self
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn rule_description(&self) -> &str {
        &self.rule_description
    }

    pub fn include_this_result(&self, result: &RuleResultsData) -> bool {
        (self.include_result)(result)
    }

    pub fn get_unified_resolution(&self, result: &RuleResultsData) -> UnifiedResolution {
        (self.resolution)(result)
    }

    pub fn to_unified_rule(&self) -> UnifiedRule {
        UnifiedRule {
            id: self.rule_id.clone(),
            description: self.rule_description.clone(),
            url: self.url.clone(),
            guidance: self.guidance.clone(),
        }
    }
}

impl fmt::Debug for RuleInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleInformation")
            .field("rule_id", &self.rule_id)
            .field("rule_description", &self.rule_description)
            .field("url", &self.url)
            .field("guidance", &self.guidance)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_resolution_ignores_finding() {
        let info = RuleInformation::with_fixed_resolution(
            "Rule",
            "A rule",
            UnifiedResolution::sentence("do the thing"),
        );
        let finding = RuleResultsData::new("Rule", "FAIL", "a");

        assert!(info.include_this_result(&finding));
        assert_eq!(
            info.get_unified_resolution(&finding).how_to_fix_sentence,
            "do the thing"
        );
    }

    #[test]
    fn test_to_unified_rule() {
        let info = RuleInformation::with_fixed_resolution("Rule", "A rule", UnifiedResolution::default())
            .with_url("https://example.test/rule")
            .with_guidance("WCAG 1.1.1", "https://example.test/wcag");

        let rule = info.to_unified_rule();
        assert_eq!(rule.id, "Rule");
        assert_eq!(rule.description, "A rule");
        assert_eq!(rule.url.as_deref(), Some("https://example.test/rule"));
        assert_eq!(rule.guidance.len(), 1);
    }

    #[test]
    fn test_custom_predicate() {
        let info = RuleInformation::new(
            "Rule",
            "A rule",
            Box::new(|_| UnifiedResolution::default()),
            Box::new(|r| r.status == "FAIL"),
        );

        assert!(info.include_this_result(&RuleResultsData::new("Rule", "FAIL", "a")));
        assert!(!info.include_this_result(&RuleResultsData::new("Rule", "PASS", "a")));
    }
}
