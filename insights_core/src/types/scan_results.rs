//! # Raw Scan Result Types
//!
//! Shapes produced by the mobile scan engine. They are parsed once per scan and
//! never mutated afterwards.

use crate::results::ResultGenerationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Screen rectangle in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingRectangle {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BoundingRectangle {
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

/// One node of the scanned view hierarchy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewElementData {
    /// Identifier unique within one scan
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub axe_view_id: String,

    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default)]
    pub bounds_in_screen: Option<BoundingRectangle>,

    #[serde(default)]
    pub content_description: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    /// Missing or null children, and null entries, are read as "no child"
    #[serde(default, deserialize_with = "deserialize_children")]
    pub children: Vec<ViewElementData>,
}

impl ViewElementData {
    pub fn new(axe_view_id: &str) -> Self {
        Self {
            axe_view_id: axe_view_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<ViewElementData>) -> Self {
        self.children = children;
        self
    }

    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingRectangle) -> Self {
        self.bounds_in_screen = Some(bounds);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<ViewElementData>, D::Error>
where
    D: Deserializer<'de>,
{
    let children: Option<Vec<Option<ViewElementData>>> = Option::deserialize(deserializer)?;
    Ok(children.unwrap_or_default().into_iter().flatten().collect())
}

/// Explicit nulls read the same as a missing key
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One rule evaluation reported by the scan engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResultsData {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub axe_view_id: String,

    /// Empty when the engine sent none; no rule matches it
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub rule_id: String,

    /// Engine vocabulary, e.g. "PASS", "FAIL", "INCOMPLETE"
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub status: String,

    /// Engine measurements keyed by display name ("Color Contrast Ratio", ...)
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub rule_version: Option<String>,
}

impl RuleResultsData {
    pub fn new(rule_id: &str, status: &str, axe_view_id: &str) -> Self {
        Self {
            axe_view_id: axe_view_id.to_string(),
            rule_id: rule_id.to_string(),
            status: status.to_string(),
            ..Self::default()
        }
    }

    pub fn with_prop(mut self, key: &str, value: serde_json::Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    /// Numeric property, accepting numbers and numeric strings
    pub fn number_prop(&self, key: &str) -> Option<f64> {
        match self.props.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn string_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key)?.as_str()
    }
}

/// Device the scan ran against
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub os_version: Option<String>,

    #[serde(default)]
    pub dpi: Option<f64>,

    #[serde(default)]
    pub screen_width: Option<i64>,

    #[serde(default)]
    pub screen_height: Option<i64>,
}

/// Complete output of one scan invocation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    #[serde(default, alias = "axeRuleResults")]
    pub rule_results: Option<Vec<RuleResultsData>>,

    #[serde(default, alias = "axeView")]
    pub view_element_tree: Option<ViewElementData>,

    #[serde(default, alias = "axeDevice")]
    pub device_info: Option<DeviceInfo>,

    #[serde(default)]
    pub app_identifier: Option<String>,

    /// Engine supplied timestamp, kept verbatim
    #[serde(default)]
    pub analysis_timestamp: Option<String>,

    /// Base64 encoded PNG of the scanned screen
    #[serde(default)]
    pub screenshot: Option<String>,

    #[serde(default)]
    pub axe_version: Option<String>,
}

impl ScanResults {
    pub fn new(rule_results: Vec<RuleResultsData>, view_element_tree: ViewElementData) -> Self {
        Self {
            rule_results: Some(rule_results),
            view_element_tree: Some(view_element_tree),
            ..Self::default()
        }
    }

    /// Parse the JSON body returned by the scan service
    pub fn from_json(source: &str) -> Result<Self, ResultGenerationError> {
        serde_json::from_str(source)
            .map_err(|e| ResultGenerationError::scan_results_parse_failed(&e.to_string()))
    }

    pub fn rule_result_count(&self) -> usize {
        self.rule_results.as_ref().map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_scan() {
        let json = r#"{
            "ruleResults": [
                {"axeViewId": "a", "ruleId": "ColorContrast", "status": "FAIL",
                 "props": {"Color Contrast Ratio": 1.5}}
            ],
            "viewElementTree": {
                "axeViewId": "a",
                "className": "android.widget.TextView",
                "boundsInScreen": {"left": 0, "top": 0, "right": 100, "bottom": 50},
                "children": [{"axeViewId": "b"}]
            },
            "axeVersion": "3.2.1"
        }"#;

        let scan = ScanResults::from_json(json).unwrap();
        assert_eq!(scan.rule_result_count(), 1);
        let tree = scan.view_element_tree.unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.bounds_in_screen.unwrap().width(), 100);
        assert_eq!(scan.axe_version.as_deref(), Some("3.2.1"));
    }

    #[test]
    fn test_null_children_are_skipped() {
        let json = r#"{"axeViewId": "root", "children": [null, {"axeViewId": "x", "children": null}]}"#;
        let element: ViewElementData = serde_json::from_str(json).unwrap();

        assert_eq!(element.children.len(), 1);
        assert_eq!(element.children[0].axe_view_id, "x");
        assert!(element.children[0].children.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{"ruleResults": [
            {"axeViewId": "a", "ruleId": "ActiveViewName", "status": null},
            {"axeViewId": null, "ruleId": null}
        ], "axeView": {"axeViewId": null}}"#;

        let scan = ScanResults::from_json(json).unwrap();
        let findings = scan.rule_results.unwrap();
        assert_eq!(findings[0].status, "");
        assert_eq!(findings[1].axe_view_id, "");
        assert_eq!(findings[1].rule_id, "");
        assert_eq!(scan.view_element_tree.unwrap().axe_view_id, "");
    }

    #[test]
    fn test_missing_rule_results() {
        let scan = ScanResults::from_json("{}").unwrap();
        assert!(scan.rule_results.is_none());
        assert_eq!(scan.rule_result_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ScanResults::from_json("{not json").is_err());
    }

    #[test]
    fn test_number_prop_accepts_strings() {
        let finding = RuleResultsData::new("ColorContrast", "FAIL", "a")
            .with_prop("Color Contrast Ratio", serde_json::json!("2.5"))
            .with_prop("Screen Dots Per Inch", serde_json::json!(320));

        assert_eq!(finding.number_prop("Color Contrast Ratio"), Some(2.5));
        assert_eq!(finding.number_prop("Screen Dots Per Inch"), Some(320.0));
        assert_eq!(finding.number_prop("missing"), None);
    }
}
