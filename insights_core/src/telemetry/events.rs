// src/telemetry/events.rs
//! Telemetry event names and sources

use serde::{Deserialize, Serialize};

pub const SWITCH_BACK_TO_TARGET: &str = "switchBackToTarget";
pub const DETAILS_VIEW_OPEN: &str = "detailsViewOpen";
pub const DETAILS_VIEW_SELECT: &str = "detailsViewSelect";
pub const DETAILS_VIEW_PIVOT_ACTIVATED: &str = "detailsViewPivotActivated";
pub const ISSUES_TARGETS_UPDATED: &str = "issuesTargetsUpdated";
pub const SHORTCUT_CONFIGURE_OPEN: &str = "shortcutConfigureOpen";
pub const LAUNCH_PANEL_SET: &str = "launchPanelSet";
pub const LAUNCH_PANEL_OPEN: &str = "launchPanelOpen";
pub const FEATURE_FLAG_TOGGLE: &str = "featureFlagToggle";
pub const PREVIEW_FEATURES_CLOSE: &str = "previewFeaturesClose";
pub const SCOPING_CLOSE: &str = "scopingClose";
pub const SETTINGS_PANEL_OPEN: &str = "settingsPanelOpen";
pub const SETTINGS_PANEL_CLOSE: &str = "settingsPanelClose";
pub const CHANGE_INSTANCE_STATUS: &str = "changeInstanceStatus";
pub const SELECT_REQUIREMENT: &str = "selectRequirement";
pub const START_OVER_TEST: &str = "startOverTest";
pub const CARD_SELECTION_TOGGLED: &str = "cardSelectionToggled";
pub const RULE_EXPANSION_TOGGLED: &str = "ruleExpansionToggled";
pub const VISUAL_HELPER_TOGGLED: &str = "visualHelperToggled";
pub const ALL_RULES_COLLAPSED: &str = "allRulesCollapsed";
pub const ALL_RULES_EXPANDED: &str = "allRulesExpanded";
pub const SCAN_STARTED: &str = "scanStarted";
pub const SCAN_COMPLETED: &str = "scanCompleted";
pub const SCAN_FAILED: &str = "scanFailed";
pub const EXPORT_RESULTS: &str = "exportResults";
pub const COPY_ISSUE_DETAILS: &str = "copyIssueDetails";
pub const APP_INITIALIZED: &str = "appInitialized";
pub const POPUP_INITIALIZED: &str = "popupInitialized";

/// UI surface an event originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TelemetryEventSource {
    LaunchPad,
    HamburgerMenu,
    DetailsView,
    AutomatedChecks,
    ResultsView,
    ShortcutCommand,
    TargetPage,
}

impl TelemetryEventSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaunchPad => "launchPad",
            Self::HamburgerMenu => "hamburgerMenu",
            Self::DetailsView => "detailsView",
            Self::AutomatedChecks => "automatedChecks",
            Self::ResultsView => "resultsView",
            Self::ShortcutCommand => "shortcutCommand",
            Self::TargetPage => "targetPage",
        }
    }
}

/// How the user triggered an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggeredBy {
    #[serde(rename = "mouseclick")]
    MouseClick,
    #[serde(rename = "keypress")]
    KeyPress,
    #[serde(rename = "shortcut")]
    Shortcut,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl TriggeredBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseClick => "mouseclick",
            Self::KeyPress => "keypress",
            Self::Shortcut => "shortcut",
            Self::NotApplicable => "N/A",
        }
    }
}
