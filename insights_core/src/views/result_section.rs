// src/views/result_section.rs

use crate::views::cards::CardRuleResult;

/// Outcome a result section lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceOutcomeType {
    Fail,
    Pass,
    Incomplete,
}

impl InstanceOutcomeType {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Fail => "Failed instances",
            Self::Pass => "Passed instances",
            Self::Incomplete => "Instances to review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultSectionContent<'a> {
    NoFailedInstancesCongrats,
    RulesWithInstances {
        rules: &'a [CardRuleResult],
        outcome_type: InstanceOutcomeType,
    },
}

pub fn result_section_content(
    results: &[CardRuleResult],
    outcome_type: InstanceOutcomeType,
) -> ResultSectionContent<'_> {
    if results.is_empty() {
        return ResultSectionContent::NoFailedInstancesCongrats;
    }

    ResultSectionContent::RulesWithInstances {
        rules: results,
        outcome_type,
    }
}

/// "Failed instances (3)"
pub fn result_section_title(results: &[CardRuleResult], outcome_type: InstanceOutcomeType) -> String {
    let count: usize = results.iter().map(|rule| rule.nodes.len()).sum();
    format!("{} ({})", outcome_type.heading(), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_card() -> CardRuleResult {
        CardRuleResult {
            id: "ImageViewName".to_string(),
            description: "Images must have alternate text".to_string(),
            url: None,
            guidance: Vec::new(),
            is_expanded: false,
            nodes: Vec::new(),
        }
    }

    #[test]
    fn test_congrats_when_empty() {
        assert_eq!(
            result_section_content(&[], InstanceOutcomeType::Fail),
            ResultSectionContent::NoFailedInstancesCongrats
        );
    }

    #[test]
    fn test_rules_when_present() {
        let rules = vec![rule_card()];

        let content = result_section_content(&rules, InstanceOutcomeType::Pass);
        assert_eq!(
            content,
            ResultSectionContent::RulesWithInstances {
                rules: &rules,
                outcome_type: InstanceOutcomeType::Pass,
            }
        );
        assert_eq!(result_section_title(&rules, InstanceOutcomeType::Pass), "Passed instances (0)");
    }
}
