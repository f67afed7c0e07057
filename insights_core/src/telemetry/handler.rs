// src/telemetry/handler.rs
//! Forwards telemetry to the client while the user has it switched on

use crate::telemetry::client::TelemetryClient;
use crate::telemetry::data::TelemetryData;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub struct TelemetryEventHandler {
    client: Rc<dyn TelemetryClient>,
    enabled: Cell<bool>,
    common_properties: BTreeMap<String, String>,
}

impl TelemetryEventHandler {
    /// Starts disabled until user configuration says otherwise
    pub fn new(client: Rc<dyn TelemetryClient>) -> Self {
        Self {
            client,
            enabled: Cell::new(false),
            common_properties: BTreeMap::new(),
        }
    }

    /// Properties stamped on every event (installation id, app name)
    pub fn with_common_property(mut self, key: &str, value: &str) -> Self {
        self.common_properties
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn enable_telemetry(&self) {
        if !self.enabled.replace(true) {
            self.client.enable_telemetry();
        }
    }

    pub fn disable_telemetry(&self) {
        if self.enabled.replace(false) {
            self.client.disable_telemetry();
        }
    }

    /// Returns whether the event was forwarded
    pub fn publish_telemetry(&self, event_name: &str, telemetry: &TelemetryData) -> bool {
        let properties = self.properties(telemetry.to_properties());
        self.track(event_name, properties)
    }

    /// Event without a UI gesture behind it (scan lifecycle, start-up)
    pub fn publish_properties(
        &self,
        event_name: &str,
        properties: BTreeMap<String, String>,
    ) -> bool {
        let properties = self.properties(properties);
        self.track(event_name, properties)
    }

    fn properties(&self, mut properties: BTreeMap<String, String>) -> BTreeMap<String, String> {
        for (key, value) in &self.common_properties {
            properties
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        properties
    }

    fn track(&self, event_name: &str, properties: BTreeMap<String, String>) -> bool {
        if !self.enabled.get() {
            crate::log_debug!("Telemetry disabled, dropping event", "event" => event_name);
            return false;
        }

        self.client.track_event(event_name, &properties);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::client::RecordingTelemetryClient;
    use crate::telemetry::data::{TelemetryDataFactory, UserEvent};
    use crate::telemetry::events;

    fn handler() -> (Rc<RecordingTelemetryClient>, TelemetryEventHandler) {
        let client = Rc::new(RecordingTelemetryClient::new());
        let handler = TelemetryEventHandler::new(client.clone())
            .with_common_property("installationId", "install-1");
        (client, handler)
    }

    #[test]
    fn test_disabled_by_default() {
        let (client, handler) = handler();
        let telemetry = TelemetryDataFactory::new().from_details_view(UserEvent::MouseClick);

        assert!(!handler.publish_telemetry(events::DETAILS_VIEW_OPEN, &telemetry));
        assert!(client.events().is_empty());
    }

    #[test]
    fn test_enabled_forwards_with_common_properties() {
        let (client, handler) = handler();
        handler.enable_telemetry();
        let telemetry = TelemetryDataFactory::new().from_details_view(UserEvent::MouseClick);

        assert!(handler.publish_telemetry(events::DETAILS_VIEW_OPEN, &telemetry));

        let tracked = client.events();
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].name, events::DETAILS_VIEW_OPEN);
        assert_eq!(tracked[0].properties["installationId"], "install-1");
        assert_eq!(tracked[0].properties["source"], "detailsView");
        assert_eq!(client.last_enabled_state(), Some(true));
    }

    #[test]
    fn test_toggle_notifies_client_once() {
        let (client, handler) = handler();
        handler.disable_telemetry();
        assert_eq!(client.last_enabled_state(), None);

        handler.enable_telemetry();
        handler.disable_telemetry();
        assert_eq!(client.last_enabled_state(), Some(false));
        assert!(!handler.is_enabled());
    }
}
