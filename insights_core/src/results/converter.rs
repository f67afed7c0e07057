// results/converter.rs
//! Raw scan output → unified results

use crate::results::uid::UidGenerator;
use crate::results::view_index::{build_view_element_index, ViewElementIndex};
use crate::rules::RuleInformationProvider;
use crate::types::{
    InstanceResultStatus, RuleResultsData, ScanResults, UnifiedDescriptors, UnifiedResult,
};

/// Per-call counters, logged at debug level
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub input: usize,
    pub emitted: usize,
    pub unknown_rule: usize,
    pub excluded: usize,
}

/// Convert every supported, included finding into a [`UnifiedResult`]
///
/// Findings keep their input order. Unknown rules and findings rejected by
/// their rule's predicate produce nothing. The generator is called once per
/// emitted result.
pub fn convert_scan_results_to_unified_results(
    scan_results: Option<&ScanResults>,
    provider: &dyn RuleInformationProvider,
    uid_generator: &mut dyn UidGenerator,
) -> Vec<UnifiedResult> {
    convert_with_stats(scan_results, provider, uid_generator).0
}

/// Same as [`convert_scan_results_to_unified_results`], also returning counters
pub fn convert_with_stats(
    scan_results: Option<&ScanResults>,
    provider: &dyn RuleInformationProvider,
    uid_generator: &mut dyn UidGenerator,
) -> (Vec<UnifiedResult>, ConversionStats) {
    let mut stats = ConversionStats::default();

    let (rule_results, tree) = match scan_results {
        Some(ScanResults {
            rule_results: Some(rule_results),
            view_element_tree,
            ..
        }) => (rule_results, view_element_tree.as_ref()),
        _ => return (Vec::new(), stats),
    };

    let index = build_view_element_index(tree);
    let mut unified = Vec::with_capacity(rule_results.len());

    for finding in rule_results {
        stats.input += 1;

        let Some(rule_information) = provider.get_rule_information(&finding.rule_id) else {
            stats.unknown_rule += 1;
            continue;
        };

        if !rule_information.include_this_result(finding) {
            stats.excluded += 1;
            continue;
        }

        unified.push(UnifiedResult {
            uid: uid_generator.generate(),
            rule_id: finding.rule_id.clone(),
            status: InstanceResultStatus::from_tool_status(&finding.status),
            descriptors: get_descriptors(finding, &index),
            identifiers: None,
            resolution: Some(rule_information.get_unified_resolution(finding)),
        });
    }

    stats.emitted = unified.len();

    crate::log_debug!(
        "Converted scan results to unified results",
        "input" => stats.input,
        "emitted" => stats.emitted,
        "unknown_rule" => stats.unknown_rule,
        "excluded" => stats.excluded
    );

    (unified, stats)
}

fn get_descriptors(
    finding: &RuleResultsData,
    index: &ViewElementIndex<'_>,
) -> Option<UnifiedDescriptors> {
    let element = index.get(finding.axe_view_id.as_str())?;

    Some(UnifiedDescriptors {
        class_name: element.class_name.clone(),
        bounding_rectangle: element.bounds_in_screen,
        content_description: element.content_description.clone(),
        text: element.text.clone(),
    })
}
