//! # Unified Result Types
//!
//! Canonical, tool agnostic results. This is the interchange shape every
//! platform converts into before anything reaches a store.

use super::scan_results::BoundingRectangle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceResultStatus {
    Pass,
    Fail,
    Unknown,
}

impl InstanceResultStatus {
    /// Map the engine vocabulary; total over every input
    pub fn from_tool_status(status: &str) -> Self {
        match status {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Unknown => "unknown",
        }
    }
}

/// Presentation details copied from the element a result concerns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedDescriptors {
    pub class_name: Option<String>,
    pub bounding_rectangle: Option<BoundingRectangle>,
    pub content_description: Option<String>,
    pub text: Option<String>,
}

/// Reserved; the mobile converter never fills it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedIdentifiers {
    pub identifier: String,
    pub concise_name: String,
}

/// Fix guidance with the fragments that should render as code
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedResolution {
    pub how_to_fix_sentence: String,
    #[serde(default)]
    pub format_as_code: Vec<String>,
}

impl UnifiedResolution {
    pub fn sentence(sentence: impl Into<String>) -> Self {
        Self {
            how_to_fix_sentence: sentence.into(),
            format_as_code: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedResult {
    pub uid: String,
    pub rule_id: String,
    pub status: InstanceResultStatus,
    pub descriptors: Option<UnifiedDescriptors>,
    pub identifiers: Option<UnifiedIdentifiers>,
    pub resolution: Option<UnifiedResolution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRule {
    pub id: String,
    pub description: String,
    pub url: Option<String>,
    #[serde(default)]
    pub guidance: Vec<GuidanceLink>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEngineProperties {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationProperties {
    pub name: String,
    pub version: Option<String>,
    pub environment_name: Option<String>,
}

/// Which engine and which application produced a result set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub scan_engine_properties: ScanEngineProperties,
    pub application_properties: ApplicationProperties,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAppData {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPortInfo {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub dpi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformData {
    pub device_name: Option<String>,
    pub os_name: String,
    pub os_version: Option<String>,
    pub viewport_info: ViewPortInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotData {
    pub base64_png_data: String,
}

/// Everything a finished scan contributes to the unified result store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedScanCompletedPayload {
    pub scan_result: Vec<UnifiedResult>,
    pub rules: Vec<UnifiedRule>,
    pub tool_info: ToolData,
    pub target_app_info: TargetAppData,
    pub timestamp: DateTime<Utc>,
    pub screenshot_data: Option<ScreenshotData>,
    pub platform_info: Option<PlatformData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_total() {
        assert_eq!(InstanceResultStatus::from_tool_status("PASS"), InstanceResultStatus::Pass);
        assert_eq!(InstanceResultStatus::from_tool_status("FAIL"), InstanceResultStatus::Fail);
        for other in ["", "pass", "INCOMPLETE", "ERROR", "Fail "] {
            assert_eq!(
                InstanceResultStatus::from_tool_status(other),
                InstanceResultStatus::Unknown
            );
        }
    }

    #[test]
    fn test_unified_result_schema() {
        let result = UnifiedResult {
            uid: "id-1".to_string(),
            rule_id: "ColorContrast".to_string(),
            status: InstanceResultStatus::Fail,
            descriptors: None,
            identifiers: None,
            resolution: Some(UnifiedResolution::sentence("fix it")),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["ruleId"], "ColorContrast");
        assert_eq!(value["status"], "fail");
        assert!(value["descriptors"].is_null());
        assert!(value["identifiers"].is_null());
        assert_eq!(value["resolution"]["howToFixSentence"], "fix it");
    }
}
