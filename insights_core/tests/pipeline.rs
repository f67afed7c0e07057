//! End-to-end runs through the public core API

use insights_core::flux::StoreHandle;
use insights_core::prelude::*;
use insights_core::types::{RuleResultsData, UserConfigurationStoreData, ViewElementData};
use insights_core::views::HighlightState;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use tempfile::TempDir;

struct NoopTabs;

impl TabController for NoopTabs {
    fn switch_to_target_tab(&self) -> TabControllerResult {
        Ok(())
    }

    fn open_shortcut_configuration(&self) -> TabControllerResult {
        Ok(())
    }
}

fn core_with_storage(storage: Rc<dyn KeyValueStorage>) -> InsightsCore {
    InsightsCore::new(CoreDependencies {
        storage,
        telemetry_client: Rc::new(LoggingTelemetryClient),
        tab_controller: Rc::new(NoopTabs),
        rule_provider: Rc::new(create_android_rule_provider().unwrap()),
        preferences: Default::default(),
    })
}

fn scan_json() -> &'static str {
    r#"{
        "axeRuleResults": [
            {"axeViewId": "submit", "ruleId": "TouchSizeWcag", "status": "FAIL",
             "props": {"Screen Dots Per Inch": 2.0, "width": 60, "height": 80}},
            {"axeViewId": "title", "ruleId": "ColorContrast", "status": "FAIL",
             "props": {"Color Contrast Ratio": 3.2, "Foreground Color": "ff888888", "Background Color": "ffffffff"}},
            {"axeViewId": "logo", "ruleId": "ImageViewName", "status": "PASS"}
        ],
        "axeView": {
            "axeViewId": "root",
            "children": [
                {"axeViewId": "submit", "className": "android.widget.Button",
                 "boundsInScreen": {"left": 0, "top": 0, "right": 60, "bottom": 80}},
                {"axeViewId": "title", "className": "android.widget.TextView", "text": "Welcome"},
                null,
                {"axeViewId": "logo", "className": "android.widget.ImageView"}
            ]
        },
        "axeDevice": {"name": "Pixel", "osVersion": "13", "screenWidth": 1080, "screenHeight": 1920},
        "appIdentifier": "com.contoso.app",
        "analysisTimestamp": "2024-03-12T09:00:00Z",
        "axeVersion": "3.1.0"
    }"#
}

fn scan(core: &InsightsCore) {
    let fetcher = || ScanResults::from_json(scan_json()).map_err(ScanError::from);
    core.scan(&fetcher).unwrap();
}

#[test]
fn test_scan_feeds_cards() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    scan(&core);

    let cards = core.card_view_data().unwrap();
    let failing: Vec<&str> = cards.cards.fail.iter().map(|rule| rule.id.as_str()).collect();
    assert_eq!(failing, vec!["TouchSizeWcag", "ColorContrast"]);
    assert_eq!(cards.cards.pass.len(), 1);
    assert!(cards.all_cards_collapsed);
    assert!(!cards.visual_helper_enabled);

    let title = result_section_title(&cards.cards.fail, InstanceOutcomeType::Fail);
    assert_eq!(title, "Failed instances (2)");
    assert_eq!(cards.cards.instance_count(InstanceResultStatus::Fail), 2);
}

#[test]
fn test_selecting_a_card_highlights_it() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    scan(&core);

    let results = core
        .stores()
        .unified_scan_result
        .get_state()
        .unwrap()
        .results
        .unwrap();
    let touch = results
        .iter()
        .find(|result| result.rule_id == "TouchSizeWcag")
        .unwrap();

    let creator = core.card_selection_message_creator(TelemetryEventSource::AutomatedChecks);
    creator
        .toggle_rule_expand_collapse("TouchSizeWcag", UserEvent::MouseClick)
        .unwrap();
    creator
        .toggle_card_selection("TouchSizeWcag", &touch.uid, UserEvent::MouseClick)
        .unwrap();

    let cards = core.card_view_data().unwrap();
    let rule = &cards.cards.fail[0];
    assert!(rule.is_expanded);
    assert!(rule.nodes[0].is_selected);
    assert_eq!(rule.nodes[0].highlight_status, HighlightState::Visible);
    assert!(cards.visual_helper_enabled);
}

#[test]
fn test_every_store_change_reaches_hub_listeners() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    let changes = Rc::new(Cell::new(0));
    let counter = changes.clone();
    core.store_hub().add_change_listener(Rc::new(move || {
        counter.set(counter.get() + 1);
        Ok(())
    }));

    scan(&core);

    // scan store twice, unified results once, card selection once
    assert_eq!(changes.get(), 4);
}

#[test]
fn test_send_telemetry_changes_no_store() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    let before = core.store_hub().combined_version();

    core.details_view_message_creator()
        .export_results_clicked("html", UserEvent::MouseClick)
        .unwrap();

    assert_eq!(core.store_hub().combined_version(), before);
}

#[test]
fn test_report_json_after_scan() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    scan(&core);

    let json = core.export_report("nightly run").unwrap().unwrap();
    let report: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(report["exportResultsType"], "AutomatedChecks");
    assert_eq!(report["description"], "nightly run");
    assert_eq!(report["targetApp"]["name"], "com.contoso.app");
    assert_eq!(report["scanDate"], "2024-03-12T09:00:00Z");
    assert_eq!(report["summary"]["fail"], 2);
    assert_eq!(report["summary"]["pass"], 1);
}

#[test]
fn test_user_configuration_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("insights.json");

    let first = core_with_storage(Rc::new(JsonFileStorage::new(&path)));
    first
        .user_config_message_creator()
        .set_high_contrast_mode(true)
        .unwrap();
    let installation_id = first.installation().id.clone();
    drop(first);

    let second = core_with_storage(Rc::new(JsonFileStorage::new(&path)));
    let config: UserConfigurationStoreData =
        second.stores().user_configuration.get_state().unwrap();
    assert!(config.enable_high_contrast);
    assert_eq!(second.installation().id, installation_id);
}

#[test]
fn test_failed_fetch_leaves_results_empty() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    let fetcher = || -> Result<ScanResults, ScanError> {
        Err(ScanError::fetch_failed("device", "adb not connected"))
    };

    assert!(core.scan(&fetcher).is_err());
    assert_eq!(
        core.stores().scan.get_state().unwrap().status,
        ScanStatus::Failed
    );
    assert!(core.card_view_data().is_none());
    assert!(core.stores().unified_scan_result.is_initialized());
}

#[test]
fn test_findings_for_unknown_rules_are_dropped() {
    let core = core_with_storage(Rc::new(InMemoryStorage::new()));
    let fetcher = || -> Result<ScanResults, ScanError> {
        Ok(ScanResults::new(
            vec![RuleResultsData::new("BrandNewRule", "FAIL", "a")],
            ViewElementData::new("root").with_children(vec![ViewElementData::new("a")]),
        ))
    };
    core.scan(&fetcher).unwrap();

    let state = core.stores().unified_scan_result.get_state().unwrap();
    assert_eq!(state.results, Some(Vec::new()));
    assert_eq!(state.rules, Some(Vec::new()));
    assert!(core.card_view_data().unwrap().cards.fail.is_empty());
}
