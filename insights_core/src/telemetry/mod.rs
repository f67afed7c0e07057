//! Telemetry: event data, the user-controlled handler and its clients

pub mod client;
pub mod data;
pub mod events;
pub mod handler;
pub mod state_listener;

pub use client::{LoggingTelemetryClient, RecordingTelemetryClient, TelemetryClient, TrackedEvent};
pub use data::{TelemetryData, TelemetryDataFactory, UserEvent};
pub use events::{TelemetryEventSource, TriggeredBy};
pub use handler::TelemetryEventHandler;
pub use state_listener::TelemetryStateListener;
