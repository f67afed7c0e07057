// src/flux/actions.rs
//! Action groups, one per feature area

use crate::flux::action::Action;
use crate::flux::payloads::*;
use crate::types::UnifiedScanCompletedPayload;

#[derive(Debug)]
pub struct UnifiedScanResultActions {
    pub scan_completed: Action<UnifiedScanCompletedPayload>,
}

impl Default for UnifiedScanResultActions {
    fn default() -> Self {
        Self {
            scan_completed: Action::new("UnifiedScanResult.ScanCompleted"),
        }
    }
}

#[derive(Debug)]
pub struct CardSelectionActions {
    pub toggle_card_selection: Action<CardSelectionPayload>,
    pub toggle_rule_expand_collapse: Action<RuleExpandCollapsePayload>,
    pub toggle_visual_helper: Action<()>,
    pub collapse_all_rules: Action<()>,
    pub expand_all_rules: Action<()>,
}

impl Default for CardSelectionActions {
    fn default() -> Self {
        Self {
            toggle_card_selection: Action::new("CardSelection.ToggleCardSelection"),
            toggle_rule_expand_collapse: Action::new("CardSelection.ToggleRuleExpandCollapse"),
            toggle_visual_helper: Action::new("CardSelection.ToggleVisualHelper"),
            collapse_all_rules: Action::new("CardSelection.CollapseAllRules"),
            expand_all_rules: Action::new("CardSelection.ExpandAllRules"),
        }
    }
}

#[derive(Debug)]
pub struct ScanActions {
    pub scan_started: Action<()>,
    pub scan_completed: Action<()>,
    pub scan_failed: Action<ScanFailedPayload>,
}

impl Default for ScanActions {
    fn default() -> Self {
        Self {
            scan_started: Action::new("Scan.ScanStarted"),
            scan_completed: Action::new("Scan.ScanCompleted"),
            scan_failed: Action::new("Scan.ScanFailed"),
        }
    }
}

#[derive(Debug)]
pub struct UserConfigurationActions {
    pub set_telemetry_state: Action<SetTelemetryStatePayload>,
    pub set_high_contrast_mode: Action<SetHighContrastModePayload>,
    pub set_issue_filing_service: Action<SetIssueFilingServicePayload>,
    pub set_issue_filing_service_property: Action<SetIssueFilingServicePropertyPayload>,
}

impl Default for UserConfigurationActions {
    fn default() -> Self {
        Self {
            set_telemetry_state: Action::new("UserConfiguration.SetTelemetryState"),
            set_high_contrast_mode: Action::new("UserConfiguration.SetHighContrastMode"),
            set_issue_filing_service: Action::new("UserConfiguration.SetIssueFilingService"),
            set_issue_filing_service_property: Action::new(
                "UserConfiguration.SetIssueFilingServiceProperty",
            ),
        }
    }
}

#[derive(Debug)]
pub struct DetailsViewActions {
    pub open_details_view: Action<OnDetailsViewOpenPayload>,
    pub select_details_view: Action<OnDetailsViewOpenPayload>,
    pub pivot_selected: Action<OnDetailsViewPivotSelected>,
    pub open_settings_panel: Action<()>,
    pub close_settings_panel: Action<()>,
    pub close_preview_features_panel: Action<()>,
    pub close_scoping_panel: Action<()>,
}

impl Default for DetailsViewActions {
    fn default() -> Self {
        Self {
            open_details_view: Action::new("DetailsView.Open"),
            select_details_view: Action::new("DetailsView.Select"),
            pivot_selected: Action::new("DetailsView.PivotSelected"),
            open_settings_panel: Action::new("DetailsView.OpenSettingsPanel"),
            close_settings_panel: Action::new("DetailsView.CloseSettingsPanel"),
            close_preview_features_panel: Action::new("DetailsView.ClosePreviewFeaturesPanel"),
            close_scoping_panel: Action::new("DetailsView.CloseScopingPanel"),
        }
    }
}

#[derive(Debug)]
pub struct VisualizationActions {
    pub update_selected_targets: Action<Vec<String>>,
    pub update_focused_instance: Action<Vec<String>>,
}

impl Default for VisualizationActions {
    fn default() -> Self {
        Self {
            update_selected_targets: Action::new("Visualization.UpdateSelectedTargets"),
            update_focused_instance: Action::new("Visualization.UpdateFocusedInstance"),
        }
    }
}

#[derive(Debug)]
pub struct AssessmentActions {
    pub change_instance_status: Action<ChangeInstanceStatusPayload>,
    pub select_test_requirement: Action<SelectTestRequirementPayload>,
    pub start_over_test: Action<StartOverPayload>,
}

impl Default for AssessmentActions {
    fn default() -> Self {
        Self {
            change_instance_status: Action::new("Assessment.ChangeInstanceStatus"),
            select_test_requirement: Action::new("Assessment.SelectTestRequirement"),
            start_over_test: Action::new("Assessment.StartOverTest"),
        }
    }
}

#[derive(Debug)]
pub struct FeatureFlagActions {
    pub set_feature_flag: Action<SetFeatureFlagPayload>,
}

impl Default for FeatureFlagActions {
    fn default() -> Self {
        Self {
            set_feature_flag: Action::new("FeatureFlags.SetFeatureFlag"),
        }
    }
}

#[derive(Debug)]
pub struct LaunchPanelActions {
    pub set_launch_panel_type: Action<SetLaunchPanelState>,
}

impl Default for LaunchPanelActions {
    fn default() -> Self {
        Self {
            set_launch_panel_type: Action::new("LaunchPanel.Set"),
        }
    }
}
