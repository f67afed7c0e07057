// src/flux/action_creators/scan_controller.rs
//! Drives one scan from fetch to the stores
//!
//! `scan_started` goes out first. On a successful fetch the normalized payload
//! is handed to the unified result store before `scan_completed` marks the
//! scan finished; a failed fetch ends in `scan_failed` with the reason. Each
//! scan is applied when it finishes, so overlapping scans resolve to whichever
//! finished last.

use crate::flux::actions::{ScanActions, UnifiedScanResultActions};
use crate::flux::errors::DispatchError;
use crate::flux::payloads::ScanFailedPayload;
use crate::logging::codes;
use crate::results::{ResultGenerationError, UnifiedResultBuilder};
use crate::telemetry::{events, TelemetryEventHandler};
use crate::types::{InstanceResultStatus, ScanResults, UnifiedScanCompletedPayload};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// The scan service could not be reached or returned nothing usable
    #[error("Failed to fetch scan results from '{location}': {cause}")]
    FetchFailed { location: String, cause: String },

    #[error(transparent)]
    Results(#[from] ResultGenerationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ScanError {
    pub fn fetch_failed(location: &str, cause: &str) -> Self {
        Self::FetchFailed {
            location: location.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Source of raw scan output (device service, file on disk)
pub trait ScanResultsFetcher {
    fn fetch_scan_results(&self) -> Result<ScanResults, ScanError>;
}

impl<F> ScanResultsFetcher for F
where
    F: Fn() -> Result<ScanResults, ScanError>,
{
    fn fetch_scan_results(&self) -> Result<ScanResults, ScanError> {
        self()
    }
}

pub struct ScanController {
    scan_actions: Rc<ScanActions>,
    unified_scan_result_actions: Rc<UnifiedScanResultActions>,
    builder: RefCell<UnifiedResultBuilder>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl ScanController {
    pub fn new(
        scan_actions: Rc<ScanActions>,
        unified_scan_result_actions: Rc<UnifiedScanResultActions>,
        builder: UnifiedResultBuilder,
        telemetry: Rc<TelemetryEventHandler>,
    ) -> Self {
        Self {
            scan_actions,
            unified_scan_result_actions,
            builder: RefCell::new(builder),
            telemetry,
        }
    }

    pub fn scan(
        &self,
        fetcher: &dyn ScanResultsFetcher,
    ) -> Result<UnifiedScanCompletedPayload, ScanError> {
        self.scan_actions.scan_started.invoke(&())?;
        self.telemetry
            .publish_properties(events::SCAN_STARTED, BTreeMap::new());
        let started = Instant::now();

        match fetcher.fetch_scan_results() {
            Ok(scan_results) => self.on_scan_results(&scan_results, started),
            Err(error) => self.on_scan_failed(error),
        }
    }

    fn on_scan_results(
        &self,
        scan_results: &ScanResults,
        started: Instant,
    ) -> Result<UnifiedScanCompletedPayload, ScanError> {
        let payload = self.builder.borrow_mut().build(scan_results);

        // The scan store must leave `Scanning` even when result listeners fail
        let stored = self
            .unified_scan_result_actions
            .scan_completed
            .invoke(&payload);
        let completed = self.scan_actions.scan_completed.invoke(&());
        if let Err(error) = stored.and(completed) {
            crate::log_error!(
                codes::store::LISTENER_FAILED,
                "Scan results applied with listener failures",
                "error" => error
            );
            return Err(error.into());
        }

        let elapsed_ms = started.elapsed().as_millis();
        let properties = scan_completed_properties(&payload, elapsed_ms);
        crate::log_success!(
            codes::success::SCAN_COMPLETED,
            "Scan completed",
            "results" => payload.scan_result.len(),
            "elapsed_ms" => elapsed_ms
        );
        self.telemetry
            .publish_properties(events::SCAN_COMPLETED, properties);

        Ok(payload)
    }

    fn on_scan_failed(&self, error: ScanError) -> Result<UnifiedScanCompletedPayload, ScanError> {
        crate::log_error!(
            codes::scan::FETCH_FAILED,
            "Scan failed",
            "error" => error
        );
        self.scan_actions.scan_failed.invoke(&ScanFailedPayload {
            reason: error.to_string(),
        })?;
        self.telemetry
            .publish_properties(events::SCAN_FAILED, BTreeMap::new());
        Err(error)
    }
}

fn scan_completed_properties(
    payload: &UnifiedScanCompletedPayload,
    elapsed_ms: u128,
) -> BTreeMap<String, String> {
    let count = |status: InstanceResultStatus| {
        payload
            .scan_result
            .iter()
            .filter(|result| result.status == status)
            .count()
    };

    BTreeMap::from([
        ("scanDuration".to_string(), elapsed_ms.to_string()),
        ("resultCount".to_string(), payload.scan_result.len().to_string()),
        ("failedCount".to_string(), count(InstanceResultStatus::Fail).to_string()),
        ("passedCount".to_string(), count(InstanceResultStatus::Pass).to_string()),
        ("ruleCount".to_string(), payload.rules.len().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::store::Store;
    use crate::flux::stores::{ScanStore, UnifiedScanResultStore};
    use crate::results::SequentialUidGenerator;
    use crate::rules::create_android_rule_provider;
    use crate::telemetry::RecordingTelemetryClient;
    use crate::types::{RuleResultsData, ScanStatus, ViewElementData};
    use assert_matches::assert_matches;

    struct Fixture {
        controller: ScanController,
        client: Rc<RecordingTelemetryClient>,
        scan_store: Rc<ScanStore>,
        result_store: Rc<UnifiedScanResultStore>,
    }

    fn fixture() -> Fixture {
        let scan_actions = Rc::new(ScanActions::default());
        let unified_actions = Rc::new(UnifiedScanResultActions::default());
        let scan_store = ScanStore::new(&scan_actions);
        scan_store.initialize();
        let result_store = UnifiedScanResultStore::new(&unified_actions);
        result_store.initialize();

        let client = Rc::new(RecordingTelemetryClient::new());
        let handler = Rc::new(TelemetryEventHandler::new(client.clone()));
        handler.enable_telemetry();

        let builder = UnifiedResultBuilder::new(Rc::new(create_android_rule_provider().unwrap()))
            .with_uid_generator(Box::new(SequentialUidGenerator::default()));

        Fixture {
            controller: ScanController::new(scan_actions, unified_actions, builder, handler),
            client,
            scan_store,
            result_store,
        }
    }

    fn scan_results() -> ScanResults {
        ScanResults::new(
            vec![
                RuleResultsData::new("ActiveViewName", "FAIL", "button"),
                RuleResultsData::new("EditTextValue", "PASS", "field"),
            ],
            ViewElementData::new("root").with_children(vec![
                ViewElementData::new("button"),
                ViewElementData::new("field"),
            ]),
        )
    }

    #[test]
    fn test_successful_scan_fills_stores() {
        let fixture = fixture();
        let fetcher = || -> Result<ScanResults, ScanError> { Ok(scan_results()) };

        let payload = fixture.controller.scan(&fetcher).unwrap();

        assert_eq!(payload.scan_result.len(), 2);
        assert_eq!(fixture.scan_store.get_state().unwrap().status, ScanStatus::Completed);
        let results = fixture.result_store.get_state().unwrap().results.unwrap();
        assert_eq!(results[0].uid, "uid-0");

        let tracked = fixture.client.events();
        let names: Vec<&str> = tracked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![events::SCAN_STARTED, events::SCAN_COMPLETED]);
        assert_eq!(tracked[1].properties["failedCount"], "1");
        assert_eq!(tracked[1].properties["passedCount"], "1");
        assert!(tracked[1].properties.contains_key("scanDuration"));
    }

    #[test]
    fn test_failed_fetch_marks_scan_failed() {
        let fixture = fixture();
        let fetcher = || -> Result<ScanResults, ScanError> {
            Err(ScanError::fetch_failed("http://localhost:62442", "connection refused"))
        };

        let result = fixture.controller.scan(&fetcher);

        assert_matches!(result, Err(ScanError::FetchFailed { .. }));
        let state = fixture.scan_store.get_state().unwrap();
        assert_eq!(state.status, ScanStatus::Failed);
        assert!(state.failure_reason.unwrap().contains("connection refused"));
        assert!(fixture.result_store.get_state().unwrap().results.is_none());
        assert_eq!(
            fixture.client.event_names(),
            vec![events::SCAN_STARTED.to_string(), events::SCAN_FAILED.to_string()]
        );
    }

    #[test]
    fn test_failing_result_listener_still_completes_scan() {
        let fixture = fixture();
        fixture
            .result_store
            .core()
            .add_change_listener(|_| Err("view broke".into()));
        let fetcher = || -> Result<ScanResults, ScanError> { Ok(scan_results()) };

        let result = fixture.controller.scan(&fetcher);

        assert_matches!(
            result,
            Err(ScanError::Dispatch(DispatchError::ActionFailed { action, .. }))
                if action == "UnifiedScanResult.ScanCompleted"
        );
        assert_eq!(fixture.scan_store.get_state().unwrap().status, ScanStatus::Completed);
        assert_eq!(fixture.result_store.get_state().unwrap().results.unwrap().len(), 2);
    }

    #[test]
    fn test_later_scan_wins() {
        let fixture = fixture();
        let first = || -> Result<ScanResults, ScanError> { Ok(scan_results()) };
        fixture.controller.scan(&first).unwrap();

        let single = || -> Result<ScanResults, ScanError> {
            Ok(ScanResults::new(
                vec![RuleResultsData::new("ImageViewName", "FAIL", "root")],
                ViewElementData::new("root"),
            ))
        };
        fixture.controller.scan(&single).unwrap();

        let results = fixture.result_store.get_state().unwrap().results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rule_id, "ImageViewName");
    }
}
