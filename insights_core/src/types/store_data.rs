// src/types/store_data.rs
//! State shapes held by the stores
//!
//! These are what store subscribers and the view models read. All of them
//! serialize camelCase so the store hub can expose them as JSON.

use super::unified::{
    PlatformData, ScreenshotData, TargetAppData, ToolData, UnifiedResult, UnifiedRule,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ad hoc visualizations and assessment tests a details view can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisualizationType {
    Issues,
    Headings,
    Landmarks,
    TabStops,
    Color,
    NeedsReview,
}

impl VisualizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issues => "Issues",
            Self::Headings => "Headings",
            Self::Landmarks => "Landmarks",
            Self::TabStops => "TabStops",
            Self::Color => "Color",
            Self::NeedsReview => "NeedsReview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailsViewPivotType {
    #[default]
    FastPass,
    Assessment,
}

impl DetailsViewPivotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastPass => "fastPass",
            Self::Assessment => "assessment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LaunchPanelType {
    #[default]
    LaunchPad,
    AdhocToolsPanel,
}

impl LaunchPanelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaunchPad => "launchPad",
            Self::AdhocToolsPanel => "adhocToolsPanel",
        }
    }
}

/// Manual verdict on an assessment instance or requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ManualTestStatus {
    Pass,
    Fail,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedScanResultStoreData {
    pub results: Option<Vec<UnifiedResult>>,
    pub rules: Option<Vec<UnifiedRule>>,
    pub tool_info: Option<ToolData>,
    pub target_app_info: Option<TargetAppData>,
    pub timestamp: Option<DateTime<Utc>>,
    pub screenshot_data: Option<ScreenshotData>,
    pub platform_info: Option<PlatformData>,
}

/// Expansion state of one rule and the selection state of its cards
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleExpandCollapseData {
    pub is_expanded: bool,
    /// result uid → selected
    pub cards: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSelectionStoreData {
    pub rules: BTreeMap<String, RuleExpandCollapseData>,
    pub visual_helper_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanStatus {
    #[default]
    Default,
    Scanning,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStoreData {
    pub status: ScanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

pub const NO_ISSUE_FILING_SERVICE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfigurationStoreData {
    pub is_first_time: bool,
    pub enable_telemetry: bool,
    pub enable_high_contrast: bool,
    pub bug_service: String,
    /// service name → property name → value
    #[serde(default)]
    pub bug_service_properties_map: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for UserConfigurationStoreData {
    fn default() -> Self {
        Self {
            is_first_time: true,
            enable_telemetry: false,
            enable_high_contrast: false,
            bug_service: NO_ISSUE_FILING_SERVICE.to_string(),
            bug_service_properties_map: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsViewContentPanel {
    pub is_settings_open: bool,
    pub is_preview_features_open: bool,
    pub is_scoping_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsViewStoreData {
    pub is_open: bool,
    pub selected_pivot: DetailsViewPivotType,
    pub selected_details_view: Option<VisualizationType>,
    pub current_panel: DetailsViewContentPanel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationStoreData {
    pub selected_targets: Vec<String>,
    pub focused_target: Option<Vec<String>>,
}

/// test → requirement → instance selector → status
pub type InstanceStatusMap = BTreeMap<VisualizationType, BTreeMap<String, BTreeMap<String, ManualTestStatus>>>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStoreData {
    pub selected_test: Option<VisualizationType>,
    pub selected_requirement: Option<String>,
    pub instance_statuses: InstanceStatusMap,
}

impl AssessmentStoreData {
    /// Fail if any instance failed, pass if every instance passed
    pub fn requirement_status(&self, test: VisualizationType, requirement: &str) -> ManualTestStatus {
        let Some(instances) = self
            .instance_statuses
            .get(&test)
            .and_then(|requirements| requirements.get(requirement))
        else {
            return ManualTestStatus::Unknown;
        };

        if instances.values().any(|s| *s == ManualTestStatus::Fail) {
            ManualTestStatus::Fail
        } else if !instances.is_empty() && instances.values().all(|s| *s == ManualTestStatus::Pass) {
            ManualTestStatus::Pass
        } else {
            ManualTestStatus::Unknown
        }
    }
}

pub type FeatureFlagStoreData = BTreeMap<String, bool>;

pub mod feature_flags {
    pub const UNIVERSAL_CARDS_UI: &str = "universalCardsUI";
    pub const SHOW_ALL_FEATURE_FLAGS: &str = "showAllFeatureFlags";

    /// Flags known at start-up and their default values
    pub fn defaults() -> super::FeatureFlagStoreData {
        [(UNIVERSAL_CARDS_UI, true), (SHOW_ALL_FEATURE_FLAGS, false)]
            .into_iter()
            .map(|(name, enabled)| (name.to_string(), enabled))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPanelStoreData {
    pub launch_panel_type: LaunchPanelType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_status() {
        let mut data = AssessmentStoreData::default();
        assert_eq!(
            data.requirement_status(VisualizationType::Headings, "headingFunction"),
            ManualTestStatus::Unknown
        );

        let instances = data
            .instance_statuses
            .entry(VisualizationType::Headings)
            .or_default()
            .entry("headingFunction".to_string())
            .or_default();
        instances.insert("#h1".to_string(), ManualTestStatus::Pass);
        instances.insert("#h2".to_string(), ManualTestStatus::Pass);
        assert_eq!(
            data.requirement_status(VisualizationType::Headings, "headingFunction"),
            ManualTestStatus::Pass
        );

        data.instance_statuses
            .get_mut(&VisualizationType::Headings)
            .unwrap()
            .get_mut("headingFunction")
            .unwrap()
            .insert("#h3".to_string(), ManualTestStatus::Fail);
        assert_eq!(
            data.requirement_status(VisualizationType::Headings, "headingFunction"),
            ManualTestStatus::Fail
        );
    }

    #[test]
    fn test_user_configuration_defaults_and_json() {
        let data = UserConfigurationStoreData::default();
        assert!(data.is_first_time);
        assert_eq!(data.bug_service, NO_ISSUE_FILING_SERVICE);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["enableTelemetry"], false);

        let parsed: UserConfigurationStoreData = serde_json::from_value(serde_json::json!({
            "isFirstTime": false,
            "enableTelemetry": true,
            "enableHighContrast": false,
            "bugService": "gitHub"
        }))
        .unwrap();
        assert!(parsed.bug_service_properties_map.is_empty());
    }

    #[test]
    fn test_assessment_data_serializes_enum_keys() {
        let mut data = AssessmentStoreData::default();
        data.instance_statuses
            .entry(VisualizationType::Landmarks)
            .or_default()
            .entry("primaryContent".to_string())
            .or_default()
            .insert("#main".to_string(), ManualTestStatus::Fail);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["instanceStatuses"]["Landmarks"]["primaryContent"]["#main"], "FAIL");
    }
}
