//! Action creators: the interpreter's callbacks
//!
//! Each creator registers one callback per message kind it owns, invokes the
//! matching action and then publishes the telemetry carried by the payload.

pub mod assessment;
pub mod card_selection;
pub mod details_view;
pub mod global;
pub mod scan_controller;
pub mod tab;
pub mod telemetry;
pub mod user_configuration;

pub use assessment::AssessmentActionCreator;
pub use card_selection::CardSelectionActionCreator;
pub use details_view::DetailsViewActionCreator;
pub use global::GlobalActionCreator;
pub use scan_controller::{ScanController, ScanError, ScanResultsFetcher};
pub use tab::{TabActionCreator, TabController, TabControllerResult};
pub use telemetry::TelemetryActionCreator;
pub use user_configuration::UserConfigurationActionCreator;

use crate::telemetry::{TelemetryData, TelemetryEventHandler};

/// Register `Variant => handler` routes for a creator held in an `Rc`
///
/// The handler receives the creator and the variant's payload.
macro_rules! register_routes {
    ($interpreter:expr, $creator:expr, { $($variant:ident => $handler:path),+ $(,)? }) => {
        $(
            let creator = ::std::rc::Rc::clone($creator);
            $interpreter.register_type_to_payload_callback(
                $crate::flux::messages::MessageKind::$variant,
                move |message| match message {
                    $crate::flux::messages::Message::$variant(payload) => $handler(&creator, payload),
                    _ => Ok(()),
                },
            );
        )+
    };
}

pub(crate) use register_routes;

pub(crate) fn publish_if_present(
    handler: &TelemetryEventHandler,
    event_name: &str,
    telemetry: Option<&TelemetryData>,
) {
    if let Some(telemetry) = telemetry {
        handler.publish_telemetry(event_name, telemetry);
    }
}
