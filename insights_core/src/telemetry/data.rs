// src/telemetry/data.rs
//! Telemetry payloads and the factory that derives them from user gestures

use crate::telemetry::events::{TelemetryEventSource, TriggeredBy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input gesture that caused an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    MouseClick,
    KeyPress,
    Shortcut,
}

impl UserEvent {
    pub fn triggered_by(self) -> TriggeredBy {
        match self {
            Self::MouseClick => TriggeredBy::MouseClick,
            Self::KeyPress => TriggeredBy::KeyPress,
            Self::Shortcut => TriggeredBy::Shortcut,
        }
    }
}

/// Telemetry attached to an action payload or sent on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryData {
    pub triggered_by: TriggeredBy,
    pub source: TelemetryEventSource,
    /// Event specific extras ("selectedTest", "pivotKey", ...)
    #[serde(flatten)]
    pub properties: BTreeMap<String, String>,
}

impl TelemetryData {
    pub fn new(triggered_by: TriggeredBy, source: TelemetryEventSource) -> Self {
        Self {
            triggered_by,
            source,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl ToString) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    /// Flat property bag as handed to a telemetry client
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut properties = self.properties.clone();
        properties.insert("triggeredBy".to_string(), self.triggered_by.as_str().to_string());
        properties.insert("source".to_string(), self.source.as_str().to_string());
        properties
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryDataFactory;

impl TelemetryDataFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn with_triggered_by_and_source(
        &self,
        event: UserEvent,
        source: TelemetryEventSource,
    ) -> TelemetryData {
        TelemetryData::new(event.triggered_by(), source)
    }

    pub fn from_details_view(&self, event: UserEvent) -> TelemetryData {
        self.with_triggered_by_and_source(event, TelemetryEventSource::DetailsView)
    }

    pub fn from_details_view_no_triggered_by(&self) -> TelemetryData {
        TelemetryData::new(TriggeredBy::NotApplicable, TelemetryEventSource::DetailsView)
    }

    pub fn from_hamburger_menu(&self, event: UserEvent) -> TelemetryData {
        self.with_triggered_by_and_source(event, TelemetryEventSource::HamburgerMenu)
    }

    pub fn for_open_details_view(
        &self,
        event: UserEvent,
        view_type: &str,
        source: TelemetryEventSource,
    ) -> TelemetryData {
        self.with_triggered_by_and_source(event, source)
            .with_property("selectedTest", view_type)
    }

    pub fn for_select_details_view(&self, event: UserEvent, view_type: &str) -> TelemetryData {
        self.from_details_view(event)
            .with_property("selectedTest", view_type)
    }

    pub fn for_select_requirement(
        &self,
        event: UserEvent,
        test: &str,
        requirement: &str,
    ) -> TelemetryData {
        self.from_details_view(event)
            .with_property("selectedTest", test)
            .with_property("selectedRequirement", requirement)
    }

    pub fn for_feature_flag_toggle(
        &self,
        event: UserEvent,
        enabled: bool,
        source: TelemetryEventSource,
        feature_flag_id: &str,
    ) -> TelemetryData {
        self.with_triggered_by_and_source(event, source)
            .with_property("enabled", enabled)
            .with_property("featureFlagId", feature_flag_id)
    }

    pub fn for_details_view_opened(&self, selected_pivot: &str) -> TelemetryData {
        self.from_details_view_no_triggered_by()
            .with_property("selectedDetailsViewPivot", selected_pivot)
    }

    pub fn for_details_view_nav_pivot_activated(
        &self,
        event: UserEvent,
        pivot_key: &str,
    ) -> TelemetryData {
        self.from_details_view(event).with_property("pivotKey", pivot_key)
    }

    pub fn for_assessment_action_from_details_view(
        &self,
        test: &str,
        event: UserEvent,
    ) -> TelemetryData {
        self.from_details_view(event).with_property("selectedTest", test)
    }

    pub fn for_export_results(&self, report_type: &str, event: UserEvent) -> TelemetryData {
        self.from_details_view(event)
            .with_property("exportResultsType", report_type)
    }
}
