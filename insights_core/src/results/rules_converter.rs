// results/rules_converter.rs

use crate::rules::RuleInformationProvider;
use crate::types::{ScanResults, UnifiedRule};
use std::collections::HashSet;

/// One [`UnifiedRule`] per distinct rule id that produced a unified result
///
/// Rules come out in the order their first surviving finding appears.
pub fn convert_scan_results_to_unified_rules(
    scan_results: Option<&ScanResults>,
    provider: &dyn RuleInformationProvider,
) -> Vec<UnifiedRule> {
    let Some(rule_results) = scan_results.and_then(|scan| scan.rule_results.as_ref()) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for finding in rule_results {
        if seen.contains(finding.rule_id.as_str()) {
            continue;
        }

        let Some(rule_information) = provider.get_rule_information(&finding.rule_id) else {
            continue;
        };

        if rule_information.include_this_result(finding) {
            seen.insert(finding.rule_id.as_str());
            rules.push(rule_information.to_unified_rule());
        }
    }

    rules
}

/// Rule ids with no registered information, each listed once
pub fn find_unknown_rule_ids(
    scan_results: &ScanResults,
    provider: &dyn RuleInformationProvider,
) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();

    for finding in scan_results.rule_results.iter().flatten() {
        if provider.get_rule_information(&finding.rule_id).is_none()
            && !unknown.contains(&finding.rule_id)
        {
            unknown.push(finding.rule_id.clone());
        }
    }

    unknown
}
