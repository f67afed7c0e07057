// src/views/card_selection_view_data.rs

use crate::types::CardSelectionStoreData;
use serde::Serialize;

/// Selection state flattened for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSelectionViewData {
    pub expanded_rule_ids: Vec<String>,
    pub selected_result_uids: Vec<String>,
    pub highlighted_result_uids: Vec<String>,
    pub visual_helper_enabled: bool,
}

impl CardSelectionViewData {
    pub fn is_expanded(&self, rule_id: &str) -> bool {
        self.expanded_rule_ids.iter().any(|id| id == rule_id)
    }

    pub fn is_selected(&self, uid: &str) -> bool {
        self.selected_result_uids.iter().any(|selected| selected == uid)
    }

    pub fn is_highlighted(&self, uid: &str) -> bool {
        self.highlighted_result_uids.iter().any(|highlighted| highlighted == uid)
    }
}

/// Highlights follow the selection; with nothing selected every card is
/// highlighted, and nothing is while the visual helper is off
pub fn get_card_selection_view_data(store_data: Option<&CardSelectionStoreData>) -> CardSelectionViewData {
    let Some(store_data) = store_data else {
        return CardSelectionViewData::default();
    };

    let mut view_data = CardSelectionViewData {
        visual_helper_enabled: store_data.visual_helper_enabled,
        ..CardSelectionViewData::default()
    };
    let mut all_result_uids = Vec::new();

    for (rule_id, rule) in &store_data.rules {
        if rule.is_expanded {
            view_data.expanded_rule_ids.push(rule_id.clone());
        }
        for (uid, selected) in &rule.cards {
            all_result_uids.push(uid.clone());
            if *selected {
                view_data.selected_result_uids.push(uid.clone());
            }
        }
    }

    if !view_data.visual_helper_enabled {
        return view_data;
    }

    view_data.highlighted_result_uids = if view_data.selected_result_uids.is_empty() {
        all_result_uids
    } else {
        view_data.selected_result_uids.clone()
    };
    view_data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleExpandCollapseData;
    use std::collections::BTreeMap;

    fn store_data(visual_helper_enabled: bool, selected: &[&str]) -> CardSelectionStoreData {
        let rule = |expanded: bool, uids: &[&str]| RuleExpandCollapseData {
            is_expanded: expanded,
            cards: uids
                .iter()
                .map(|uid| (uid.to_string(), selected.contains(uid)))
                .collect(),
        };

        CardSelectionStoreData {
            rules: BTreeMap::from([
                ("ColorContrast".to_string(), rule(true, &["c1", "c2"])),
                ("TouchSizeWcag".to_string(), rule(false, &["t1"])),
            ]),
            visual_helper_enabled,
        }
    }

    #[test]
    fn test_missing_store_data() {
        assert_eq!(get_card_selection_view_data(None), CardSelectionViewData::default());
    }

    #[test]
    fn test_nothing_selected_highlights_everything() {
        let view_data = get_card_selection_view_data(Some(&store_data(true, &[])));

        assert_eq!(view_data.expanded_rule_ids, vec!["ColorContrast"]);
        assert!(view_data.selected_result_uids.is_empty());
        assert_eq!(view_data.highlighted_result_uids, vec!["c1", "c2", "t1"]);
    }

    #[test]
    fn test_selection_narrows_highlights() {
        let view_data = get_card_selection_view_data(Some(&store_data(true, &["c2"])));

        assert_eq!(view_data.selected_result_uids, vec!["c2"]);
        assert_eq!(view_data.highlighted_result_uids, vec!["c2"]);
        assert!(view_data.is_selected("c2"));
        assert!(!view_data.is_highlighted("c1"));
    }

    #[test]
    fn test_visual_helper_off_highlights_nothing() {
        let view_data = get_card_selection_view_data(Some(&store_data(false, &["c1"])));

        assert_eq!(view_data.selected_result_uids, vec!["c1"]);
        assert!(view_data.highlighted_result_uids.is_empty());
    }
}
