// src/telemetry/client.rs

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Destination for telemetry events
pub trait TelemetryClient {
    fn enable_telemetry(&self) {}

    fn disable_telemetry(&self) {}

    fn track_event(&self, name: &str, properties: &BTreeMap<String, String>);
}

/// Writes events to the `log` facade under the `insights::telemetry` target
#[derive(Debug, Default)]
pub struct LoggingTelemetryClient;

impl TelemetryClient for LoggingTelemetryClient {
    fn track_event(&self, name: &str, properties: &BTreeMap<String, String>) {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        log::info!(target: "insights::telemetry", "{} ({})", name, rendered.join(", "));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

/// Keeps every tracked event in memory
#[derive(Debug, Default)]
pub struct RecordingTelemetryClient {
    events: RefCell<Vec<TrackedEvent>>,
    enabled: RefCell<Option<bool>>,
}

impl RecordingTelemetryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.borrow().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.clone()).collect()
    }

    /// Last enable/disable call, if any
    pub fn last_enabled_state(&self) -> Option<bool> {
        *self.enabled.borrow()
    }
}

impl TelemetryClient for RecordingTelemetryClient {
    fn enable_telemetry(&self) {
        *self.enabled.borrow_mut() = Some(true);
    }

    fn disable_telemetry(&self) {
        *self.enabled.borrow_mut() = Some(false);
    }

    fn track_event(&self, name: &str, properties: &BTreeMap<String, String>) {
        self.events.borrow_mut().push(TrackedEvent {
            name: name.to_string(),
            properties: properties.clone(),
        });
    }
}
