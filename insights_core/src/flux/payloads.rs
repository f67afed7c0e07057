// src/flux/payloads.rs
//! Action payload shapes, serialized camelCase on the wire

pub use crate::types::store_data::{
    DetailsViewPivotType, LaunchPanelType, ManualTestStatus, VisualizationType,
};
use crate::telemetry::TelemetryData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseActionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

impl BaseActionPayload {
    pub fn with_telemetry(telemetry: TelemetryData) -> Self {
        Self {
            telemetry: Some(telemetry),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnDetailsViewOpenPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
    pub details_view_type: VisualizationType,
    pub pivot_type: DetailsViewPivotType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnDetailsViewPivotSelected {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
    pub pivot_key: DetailsViewPivotType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLaunchPanelState {
    pub launch_panel_type: LaunchPanelType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFeatureFlagPayload {
    pub feature: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInstanceStatusPayload {
    pub test: VisualizationType,
    pub requirement: String,
    pub selector: String,
    pub status: ManualTestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTestRequirementPayload {
    pub selected_test: VisualizationType,
    pub selected_requirement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOverPayload {
    pub test: VisualizationType,
    pub requirement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSelectionPayload {
    pub rule_id: String,
    pub result_instance_uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleExpandCollapsePayload {
    pub rule_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTelemetryStatePayload {
    pub enable_telemetry: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHighContrastModePayload {
    pub enable_high_contrast: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIssueFilingServicePayload {
    pub issue_filing_service_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIssueFilingServicePropertyPayload {
    pub issue_filing_service_name: String,
    pub property_name: String,
    pub property_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTelemetryPayload {
    pub event_name: String,
    pub telemetry: TelemetryData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanFailedPayload {
    pub reason: String,
}
