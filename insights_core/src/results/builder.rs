// results/builder.rs
//! Assembles the complete scan completed payload

use crate::config::runtime::ResultPreferences;
use crate::logging::codes;
use crate::results::converter::convert_with_stats;
use crate::results::rules_converter::{convert_scan_results_to_unified_rules, find_unknown_rule_ids};
use crate::results::uid::{UidGenerator, UuidGenerator};
use crate::rules::RuleInformationProvider;
use crate::types::{
    ApplicationProperties, PlatformData, ScanEngineProperties, ScanResults, ScreenshotData,
    TargetAppData, ToolData, UnifiedScanCompletedPayload, ViewPortInfo,
};
use chrono::{DateTime, Utc};
use std::rc::Rc;

pub const SCAN_ENGINE_NAME: &str = "axe-android";
pub const APPLICATION_NAME: &str = "Accessibility Insights";
pub const ANDROID_OS_NAME: &str = "Android";
pub const UNKNOWN_TARGET_APP: &str = "Unknown application";

pub type ToolDataFn = Box<dyn Fn(&ScanResults) -> ToolData>;
pub type ClockFn = Box<dyn Fn() -> DateTime<Utc>>;

/// Tool data describing this build running on this machine
pub fn default_tool_data(scan_results: &ScanResults) -> ToolData {
    let environment_name = hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok());

    ToolData {
        scan_engine_properties: ScanEngineProperties {
            name: SCAN_ENGINE_NAME.to_string(),
            version: scan_results.axe_version.clone(),
        },
        application_properties: ApplicationProperties {
            name: APPLICATION_NAME.to_string(),
            version: Some(crate::config::build_info::version().to_string()),
            environment_name,
        },
    }
}

pub struct UnifiedResultBuilder {
    provider: Rc<dyn RuleInformationProvider>,
    uid_generator: Box<dyn UidGenerator>,
    tool_data: ToolDataFn,
    clock: ClockFn,
    preferences: ResultPreferences,
}

impl UnifiedResultBuilder {
    pub fn new(provider: Rc<dyn RuleInformationProvider>) -> Self {
        Self {
            provider,
            uid_generator: Box::new(UuidGenerator),
            tool_data: Box::new(default_tool_data),
            clock: Box::new(Utc::now),
            preferences: ResultPreferences::default(),
        }
    }

    pub fn with_uid_generator(mut self, uid_generator: Box<dyn UidGenerator>) -> Self {
        self.uid_generator = uid_generator;
        self
    }

    pub fn with_tool_data(mut self, tool_data: ToolDataFn) -> Self {
        self.tool_data = tool_data;
        self
    }

    pub fn with_clock(mut self, clock: ClockFn) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_preferences(mut self, preferences: ResultPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn build(&mut self, scan_results: &ScanResults) -> UnifiedScanCompletedPayload {
        let provider = self.provider.as_ref();

        if self.preferences.warn_on_unknown_rules {
            for rule_id in find_unknown_rule_ids(scan_results, provider) {
                crate::log_warning!(
                    code = codes::rules::UNKNOWN_RULE,
                    "Scan reported a rule with no rule information",
                    "rule_id" => rule_id
                );
            }
        }

        let (scan_result, stats) =
            convert_with_stats(Some(scan_results), provider, self.uid_generator.as_mut());
        let rules = convert_scan_results_to_unified_rules(Some(scan_results), provider);

        crate::log_success!(
            codes::success::SCAN_RESULTS_NORMALIZED,
            "Scan results normalized",
            "results" => stats.emitted,
            "rules" => rules.len()
        );

        UnifiedScanCompletedPayload {
            scan_result,
            rules,
            tool_info: (self.tool_data)(scan_results),
            target_app_info: TargetAppData {
                name: scan_results
                    .app_identifier
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_TARGET_APP.to_string()),
                version: None,
            },
            timestamp: self.timestamp(scan_results),
            screenshot_data: self.screenshot(scan_results),
            platform_info: platform_info(scan_results),
        }
    }

    fn timestamp(&self, scan_results: &ScanResults) -> DateTime<Utc> {
        scan_results
            .analysis_timestamp
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(|| (self.clock)())
    }

    fn screenshot(&self, scan_results: &ScanResults) -> Option<ScreenshotData> {
        if !self.preferences.keep_screenshots {
            return None;
        }

        scan_results
            .screenshot
            .as_ref()
            .filter(|data| !data.is_empty())
            .map(|data| ScreenshotData {
                base64_png_data: data.clone(),
            })
    }
}

fn platform_info(scan_results: &ScanResults) -> Option<PlatformData> {
    let device = scan_results.device_info.as_ref()?;

    Some(PlatformData {
        device_name: device.name.clone(),
        os_name: ANDROID_OS_NAME.to_string(),
        os_version: device.os_version.clone(),
        viewport_info: ViewPortInfo {
            width: device.screen_width,
            height: device.screen_height,
            dpi: device.dpi,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::uid::SequentialUidGenerator;
    use crate::rules::create_android_rule_provider;
    use crate::types::{DeviceInfo, RuleResultsData, ViewElementData};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn builder() -> UnifiedResultBuilder {
        UnifiedResultBuilder::new(Rc::new(create_android_rule_provider().unwrap()))
            .with_uid_generator(Box::new(SequentialUidGenerator::default()))
            .with_clock(Box::new(fixed_clock))
            .with_preferences(ResultPreferences {
                warn_on_unknown_rules: true,
                keep_screenshots: true,
            })
    }

    fn scan() -> ScanResults {
        ScanResults {
            app_identifier: Some("com.example.app".to_string()),
            screenshot: Some("iVBORw0KGgo=".to_string()),
            axe_version: Some("3.2.1".to_string()),
            device_info: Some(DeviceInfo {
                name: Some("Pixel".to_string()),
                os_version: Some("14".to_string()),
                dpi: Some(420.0),
                screen_width: Some(1080),
                screen_height: Some(2400),
            }),
            ..ScanResults::new(
                vec![
                    RuleResultsData::new("ActiveViewName", "FAIL", "root"),
                    RuleResultsData::new("NotARule", "FAIL", "root"),
                    RuleResultsData::new("ImageViewName", "PASS", "root"),
                ],
                ViewElementData::new("root"),
            )
        }
    }

    #[test]
    fn test_build_payload() {
        let payload = builder().build(&scan());

        assert_eq!(payload.scan_result.len(), 2);
        assert_eq!(payload.scan_result[0].uid, "uid-0");
        assert_eq!(payload.rules.len(), 2);
        assert_eq!(payload.target_app_info.name, "com.example.app");
        assert_eq!(payload.timestamp, fixed_clock());
        assert_eq!(payload.tool_info.scan_engine_properties.name, SCAN_ENGINE_NAME);
        assert_eq!(
            payload.tool_info.scan_engine_properties.version.as_deref(),
            Some("3.2.1")
        );
        assert!(payload.screenshot_data.is_some());

        let platform = payload.platform_info.unwrap();
        assert_eq!(platform.os_name, "Android");
        assert_eq!(platform.viewport_info.width, Some(1080));
    }

    #[test]
    fn test_analysis_timestamp_preferred() {
        let mut scan = scan();
        scan.analysis_timestamp = Some("2023-05-06T07:08:09Z".to_string());

        let payload = builder().build(&scan);
        assert_eq!(
            payload.timestamp,
            Utc.with_ymd_and_hms(2023, 5, 6, 7, 8, 9).unwrap()
        );

        scan.analysis_timestamp = Some("not a date".to_string());
        assert_eq!(builder().build(&scan).timestamp, fixed_clock());
    }

    #[test]
    fn test_screenshots_dropped_when_disabled() {
        let mut builder = builder().with_preferences(ResultPreferences {
            warn_on_unknown_rules: false,
            keep_screenshots: false,
        });
        assert!(builder.build(&scan()).screenshot_data.is_none());
    }

    #[test]
    fn test_missing_app_identifier() {
        let mut scan = scan();
        scan.app_identifier = None;
        scan.device_info = None;

        let payload = builder().build(&scan);
        assert_eq!(payload.target_app_info.name, UNKNOWN_TARGET_APP);
        assert!(payload.platform_info.is_none());
    }

    #[test]
    fn test_custom_tool_data() {
        let mut builder = builder().with_tool_data(Box::new(|_: &ScanResults| ToolData {
            application_properties: ApplicationProperties {
                name: "Headless".to_string(),
                version: None,
                environment_name: Some("ci".to_string()),
            },
            ..ToolData::default()
        }));

        let tool_info = builder.build(&scan()).tool_info;
        assert_eq!(tool_info.application_properties.name, "Headless");
        assert_eq!(tool_info.application_properties.environment_name.as_deref(), Some("ci"));
    }
}
