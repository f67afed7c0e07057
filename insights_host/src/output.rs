// src/output.rs
//! Console and JSON rendering of scan outcomes

use clap::ValueEnum;
use insights_core::results::{process_resolution, InstructionSegment};
use insights_core::types::{InstanceResultStatus, ScanStatus, UnifiedResolution, UnifiedResult};
use insights_core::views::{
    result_section_content, result_section_title, CardRuleResult, CardsViewModel,
    InstanceOutcomeType, ResultSectionContent,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What one scanned file produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub source: String,
    pub status: ScanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<CardsViewModel>,
}

impl ScanOutcome {
    pub fn failed_instances(&self) -> usize {
        self.cards
            .as_ref()
            .map(|cards| cards.cards.instance_count(InstanceResultStatus::Fail))
            .unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.status == ScanStatus::Completed && self.failed_instances() == 0
    }
}

pub fn render(outcomes: &[ScanOutcome], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json => serde_json::to_string_pretty(outcomes),
    }
}

pub fn render_text(outcomes: &[ScanOutcome]) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        let _ = writeln!(out, "=== {} ===", outcome.source);

        match (&outcome.status, &outcome.cards) {
            (ScanStatus::Completed, Some(cards)) => {
                write_section(&mut out, &cards.cards.fail, InstanceOutcomeType::Fail);
                write_section(&mut out, &cards.cards.unknown, InstanceOutcomeType::Incomplete);
                write_section(&mut out, &cards.cards.pass, InstanceOutcomeType::Pass);
            }
            (ScanStatus::Failed, _) => {
                let reason = outcome.failure_reason.as_deref().unwrap_or("unknown error");
                let _ = writeln!(out, "Scan failed: {}", reason);
            }
            (status, _) => {
                let _ = writeln!(out, "Scan did not complete ({:?})", status);
            }
        }
        out.push('\n');
    }

    let clean = outcomes.iter().filter(|o| o.is_clean()).count();
    let _ = writeln!(out, "Files scanned: {}", outcomes.len());
    let _ = writeln!(out, "Without failures: {}", clean);
    out
}

fn write_section(out: &mut String, rules: &[CardRuleResult], outcome_type: InstanceOutcomeType) {
    match result_section_content(rules, outcome_type) {
        ResultSectionContent::NoFailedInstancesCongrats => {
            if outcome_type == InstanceOutcomeType::Fail {
                let _ = writeln!(out, "No failed automated checks were found.");
            }
        }
        ResultSectionContent::RulesWithInstances { rules, outcome_type } => {
            let _ = writeln!(out, "{}", result_section_title(rules, outcome_type));

            for rule in rules {
                let _ = writeln!(out, "  {} ({})", rule.id, rule.nodes.len());
                if !rule.description.is_empty() {
                    let _ = writeln!(out, "    {}", rule.description);
                }
                for node in &rule.nodes {
                    let _ = writeln!(out, "    - {}", describe(&node.result));
                    if let Some(resolution) = &node.result.resolution {
                        let _ = writeln!(out, "      {}", fix_sentence(resolution));
                    }
                }
            }
        }
    }
}

/// Code fragments and colors in backticks
fn fix_sentence(resolution: &UnifiedResolution) -> String {
    process_resolution(resolution)
        .iter()
        .map(|segment| match segment {
            InstructionSegment::Text(text) => text.clone(),
            InstructionSegment::Code(code) | InstructionSegment::Color(code) => format!("`{}`", code),
        })
        .collect()
}

/// Class name plus the most readable label the element has
fn describe(result: &UnifiedResult) -> String {
    let Some(descriptors) = &result.descriptors else {
        return result.uid.clone();
    };

    let class_name = descriptors.class_name.as_deref().unwrap_or("View");
    match descriptors
        .text
        .as_deref()
        .or(descriptors.content_description.as_deref())
    {
        Some(label) if !label.is_empty() => format!("{} \"{}\"", class_name, label),
        _ => class_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::types::UnifiedDescriptors;
    use insights_core::views::{CardResult, CardRuleResultsByStatus, HighlightState};

    fn card(rule_id: &str, status: InstanceResultStatus, text: Option<&str>) -> CardRuleResult {
        CardRuleResult {
            id: rule_id.to_string(),
            description: format!("{} description", rule_id),
            url: None,
            guidance: Vec::new(),
            is_expanded: false,
            nodes: vec![CardResult {
                result: UnifiedResult {
                    uid: "uid-0".to_string(),
                    rule_id: rule_id.to_string(),
                    status,
                    descriptors: Some(UnifiedDescriptors {
                        class_name: Some("android.widget.Button".to_string()),
                        bounding_rectangle: None,
                        content_description: None,
                        text: text.map(str::to_string),
                    }),
                    identifiers: None,
                    resolution: Some(UnifiedResolution::sentence("Give the button a label")),
                },
                is_selected: false,
                highlight_status: HighlightState::Unavailable,
            }],
        }
    }

    fn completed(cards: CardRuleResultsByStatus) -> ScanOutcome {
        ScanOutcome {
            source: "scan.json".to_string(),
            status: ScanStatus::Completed,
            failure_reason: None,
            cards: Some(CardsViewModel {
                cards,
                visual_helper_enabled: false,
                all_cards_collapsed: true,
            }),
        }
    }

    #[test]
    fn test_text_lists_failures_with_fix() {
        let outcome = completed(CardRuleResultsByStatus {
            fail: vec![card("ActiveViewName", InstanceResultStatus::Fail, Some("Submit"))],
            ..CardRuleResultsByStatus::default()
        });

        let text = render_text(&[outcome]);
        assert!(text.contains("Failed instances (1)"));
        assert!(text.contains("android.widget.Button \"Submit\""));
        assert!(text.contains("Give the button a label"));
        assert!(text.contains("Without failures: 0"));
    }

    #[test]
    fn test_fix_sentence_marks_colors() {
        let resolution = UnifiedResolution::sentence("Use #000000 on #ffffff");
        assert_eq!(fix_sentence(&resolution), "Use `#000000` on `#ffffff`");
    }

    #[test]
    fn test_text_congratulates_clean_scan() {
        let outcome = completed(CardRuleResultsByStatus {
            pass: vec![card("ImageViewName", InstanceResultStatus::Pass, None)],
            ..CardRuleResultsByStatus::default()
        });
        assert!(outcome.is_clean());

        let text = render_text(&[outcome]);
        assert!(text.contains("No failed automated checks were found."));
        assert!(text.contains("Passed instances (1)"));
    }

    #[test]
    fn test_text_reports_failed_scan() {
        let outcome = ScanOutcome {
            source: "broken.json".to_string(),
            status: ScanStatus::Failed,
            failure_reason: Some("file is empty".to_string()),
            cards: None,
        };

        let text = render_text(&[outcome]);
        assert!(text.contains("Scan failed: file is empty"));
    }

    #[test]
    fn test_json_is_camel_case() {
        let outcome = ScanOutcome {
            source: "broken.json".to_string(),
            status: ScanStatus::Failed,
            failure_reason: Some("file is empty".to_string()),
            cards: None,
        };

        let json = render(&[outcome], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["status"], "failed");
        assert_eq!(value[0]["failureReason"], "file is empty");
        assert!(value[0].get("cards").is_none());
    }
}
