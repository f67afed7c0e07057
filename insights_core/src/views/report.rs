// src/views/report.rs
//! Automated checks report export

use crate::logging::codes;
use crate::results::ResultGenerationError;
use crate::types::{
    feature_flags, FeatureFlagStoreData, InstanceResultStatus, TargetAppData, ToolData,
    UnifiedScanResultStoreData,
};
use crate::views::cards::{CardRuleResultsByStatus, CardsViewModel};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const AUTOMATED_CHECKS_EXPORT_TYPE: &str = "AutomatedChecks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeSummary {
    pub fail: usize,
    pub pass: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsReport<'a> {
    pub export_results_type: &'static str,
    pub description: &'a str,
    pub target_app: &'a TargetAppData,
    pub tool: Option<&'a ToolData>,
    pub scan_date: DateTime<Utc>,
    pub summary: OutcomeSummary,
    pub cards: &'a CardRuleResultsByStatus,
}

/// What the export dialog needs; present only when there is something to export
#[derive(Debug, Clone, PartialEq)]
pub struct ReportExport<'a> {
    pub export_results_type: &'static str,
    pub page_title: String,
    pub scan_date: DateTime<Utc>,
    target_app: &'a TargetAppData,
    tool: Option<&'a ToolData>,
    cards: &'a CardsViewModel,
}

impl<'a> ReportExport<'a> {
    pub fn report<'b>(&'b self, description: &'b str) -> ResultsReport<'b> {
        let cards = &self.cards.cards;
        ResultsReport {
            export_results_type: self.export_results_type,
            description,
            target_app: self.target_app,
            tool: self.tool,
            scan_date: self.scan_date,
            summary: OutcomeSummary {
                fail: cards.instance_count(InstanceResultStatus::Fail),
                pass: cards.instance_count(InstanceResultStatus::Pass),
                unknown: cards.instance_count(InstanceResultStatus::Unknown),
            },
            cards,
        }
    }

    pub fn generate_json(&self, description: &str) -> Result<String, ResultGenerationError> {
        let json = serde_json::to_string_pretty(&self.report(description)).map_err(|e| {
            crate::log_error!(
                codes::results::REPORT_SERIALIZATION_FAILED,
                "Failed to serialize report",
                "error" => e
            );
            ResultGenerationError::serialization_failed("json", &e.to_string())
        })?;

        crate::log_success!(
            codes::success::REPORT_EXPORTED,
            "Report exported",
            "target" => self.page_title,
            "bytes" => json.len()
        );
        Ok(json)
    }
}

/// `None` while the cards UI is off or before any scan has completed
pub fn get_report_export<'a>(
    store_data: &'a UnifiedScanResultStoreData,
    feature_flag_store_data: &FeatureFlagStoreData,
    cards_view_data: Option<&'a CardsViewModel>,
) -> Option<ReportExport<'a>> {
    let cards_ui_enabled = feature_flag_store_data
        .get(feature_flags::UNIVERSAL_CARDS_UI)
        .copied()
        .unwrap_or(false);
    if !cards_ui_enabled {
        return None;
    }

    store_data.results.as_ref()?;
    let cards = cards_view_data?;
    let target_app = store_data.target_app_info.as_ref()?;

    Some(ReportExport {
        export_results_type: AUTOMATED_CHECKS_EXPORT_TYPE,
        page_title: target_app.name.clone(),
        scan_date: store_data.timestamp.unwrap_or_else(Utc::now),
        target_app,
        tool: store_data.tool_info.as_ref(),
        cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{UnifiedResult, UnifiedRule};
    use crate::views::{get_card_view_data, CardSelectionViewData};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn store_data() -> UnifiedScanResultStoreData {
        UnifiedScanResultStoreData {
            results: Some(vec![UnifiedResult {
                uid: "uid-0".to_string(),
                rule_id: "EditTextValue".to_string(),
                status: InstanceResultStatus::Fail,
                descriptors: None,
                identifiers: None,
                resolution: None,
            }]),
            rules: Some(vec![UnifiedRule {
                id: "EditTextValue".to_string(),
                description: "EditText elements must expose their text value".to_string(),
                url: None,
                guidance: Vec::new(),
            }]),
            target_app_info: Some(TargetAppData {
                name: "com.example.app".to_string(),
                version: None,
            }),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap()),
            ..UnifiedScanResultStoreData::default()
        }
    }

    fn cards(data: &UnifiedScanResultStoreData) -> CardsViewModel {
        get_card_view_data(
            data.rules.as_deref(),
            data.results.as_deref(),
            &CardSelectionViewData::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_none_when_cards_ui_off() {
        let data = store_data();
        let cards = cards(&data);
        let flags = BTreeMap::from([(feature_flags::UNIVERSAL_CARDS_UI.to_string(), false)]);

        assert!(get_report_export(&data, &flags, Some(&cards)).is_none());
        assert!(get_report_export(&data, &BTreeMap::new(), Some(&cards)).is_none());
    }

    #[test]
    fn test_none_without_results() {
        let data = UnifiedScanResultStoreData::default();
        assert!(get_report_export(&data, &feature_flags::defaults(), None).is_none());
    }

    #[test]
    fn test_export_json() {
        let data = store_data();
        let cards = cards(&data);

        let export = get_report_export(&data, &feature_flags::defaults(), Some(&cards)).unwrap();
        assert_eq!(export.export_results_type, AUTOMATED_CHECKS_EXPORT_TYPE);
        assert_eq!(export.page_title, "com.example.app");

        let json: serde_json::Value =
            serde_json::from_str(&export.generate_json("first pass").unwrap()).unwrap();
        assert_eq!(json["exportResultsType"], "AutomatedChecks");
        assert_eq!(json["description"], "first pass");
        assert_eq!(json["summary"]["fail"], 1);
        assert_eq!(json["scanDate"], "2024-03-12T09:00:00Z");
        assert_eq!(json["cards"]["fail"][0]["id"], "EditTextValue");
    }
}
