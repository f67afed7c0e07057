// src/views/cards.rs
//! Results grouped into rule cards by outcome

use crate::types::{GuidanceLink, InstanceResultStatus, UnifiedResult, UnifiedRule};
use crate::views::card_selection_view_data::CardSelectionViewData;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightState {
    Visible,
    Hidden,
    /// The element has no on-screen bounds to draw
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResult {
    #[serde(flatten)]
    pub result: UnifiedResult,
    pub is_selected: bool,
    pub highlight_status: HighlightState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRuleResult {
    pub id: String,
    pub description: String,
    pub url: Option<String>,
    pub guidance: Vec<GuidanceLink>,
    pub is_expanded: bool,
    pub nodes: Vec<CardResult>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CardRuleResultsByStatus {
    pub fail: Vec<CardRuleResult>,
    pub pass: Vec<CardRuleResult>,
    pub unknown: Vec<CardRuleResult>,
}

impl CardRuleResultsByStatus {
    pub fn bucket(&self, status: InstanceResultStatus) -> &[CardRuleResult] {
        match status {
            InstanceResultStatus::Fail => &self.fail,
            InstanceResultStatus::Pass => &self.pass,
            InstanceResultStatus::Unknown => &self.unknown,
        }
    }

    fn bucket_mut(&mut self, status: InstanceResultStatus) -> &mut Vec<CardRuleResult> {
        match status {
            InstanceResultStatus::Fail => &mut self.fail,
            InstanceResultStatus::Pass => &mut self.pass,
            InstanceResultStatus::Unknown => &mut self.unknown,
        }
    }

    /// Number of results (not rules) in a bucket
    pub fn instance_count(&self, status: InstanceResultStatus) -> usize {
        self.bucket(status).iter().map(|rule| rule.nodes.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsViewModel {
    pub cards: CardRuleResultsByStatus,
    pub visual_helper_enabled: bool,
    pub all_cards_collapsed: bool,
}

/// Group results under their rule, per outcome, in order of first appearance
///
/// Nothing to show until both rules and results are known. A result whose
/// rule is missing from `rules` still gets a card, titled by its rule id.
pub fn get_card_view_data(
    rules: Option<&[UnifiedRule]>,
    results: Option<&[UnifiedResult]>,
    selection: &CardSelectionViewData,
) -> Option<CardsViewModel> {
    let (rules, results) = (rules?, results?);
    let mut cards = CardRuleResultsByStatus::default();

    for result in results {
        let bucket = cards.bucket_mut(result.status);
        let index = match bucket.iter().position(|rule| rule.id == result.rule_id) {
            Some(index) => index,
            None => {
                bucket.push(new_rule_card(&result.rule_id, rules, selection));
                bucket.len() - 1
            }
        };
        bucket[index].nodes.push(CardResult {
            result: result.clone(),
            is_selected: selection.is_selected(&result.uid),
            highlight_status: highlight_status(result, selection),
        });
    }

    Some(CardsViewModel {
        cards,
        visual_helper_enabled: selection.visual_helper_enabled,
        all_cards_collapsed: selection.expanded_rule_ids.is_empty(),
    })
}

fn new_rule_card(rule_id: &str, rules: &[UnifiedRule], selection: &CardSelectionViewData) -> CardRuleResult {
    let rule = rules.iter().find(|rule| rule.id == rule_id);
    CardRuleResult {
        id: rule_id.to_string(),
        description: rule.map(|r| r.description.clone()).unwrap_or_default(),
        url: rule.and_then(|r| r.url.clone()),
        guidance: rule.map(|r| r.guidance.clone()).unwrap_or_default(),
        is_expanded: selection.is_expanded(rule_id),
        nodes: Vec::new(),
    }
}

fn highlight_status(result: &UnifiedResult, selection: &CardSelectionViewData) -> HighlightState {
    let has_bounds = result
        .descriptors
        .as_ref()
        .and_then(|descriptors| descriptors.bounding_rectangle)
        .is_some();

    if !has_bounds {
        HighlightState::Unavailable
    } else if selection.is_highlighted(&result.uid) {
        HighlightState::Visible
    } else {
        HighlightState::Hidden
    }
}
