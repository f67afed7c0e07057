// src/flux/message_creators/popup.rs

use crate::flux::dispatcher::ActionMessageDispatcher;
use crate::flux::errors::DispatchError;
use crate::flux::messages::Message;
use crate::flux::payloads::{
    BaseActionPayload, DetailsViewPivotType, LaunchPanelType, OnDetailsViewOpenPayload,
    SetLaunchPanelState, VisualizationType,
};
use crate::telemetry::{
    events, TelemetryData, TelemetryDataFactory, TelemetryEventSource, TriggeredBy, UserEvent,
};
use std::rc::Rc;

/// Intents raised from the launch pad
pub struct PopupActionMessageCreator {
    dispatcher: Rc<dyn ActionMessageDispatcher>,
    telemetry_factory: TelemetryDataFactory,
}

impl PopupActionMessageCreator {
    pub fn new(dispatcher: Rc<dyn ActionMessageDispatcher>, telemetry_factory: TelemetryDataFactory) -> Self {
        Self {
            dispatcher,
            telemetry_factory,
        }
    }

    pub fn popup_initialized(&self) -> Result<(), DispatchError> {
        self.dispatcher.send_telemetry(
            events::POPUP_INITIALIZED,
            TelemetryData::new(TriggeredBy::NotApplicable, TelemetryEventSource::LaunchPad),
        )
    }

    pub fn open_launch_pad(&self, panel_type: LaunchPanelType) -> Result<(), DispatchError> {
        let telemetry = TelemetryData::new(TriggeredBy::NotApplicable, TelemetryEventSource::LaunchPad)
            .with_property("launchPanelType", panel_type.as_str());
        self.dispatcher
            .send_telemetry(events::LAUNCH_PANEL_OPEN, telemetry)
    }

    pub fn open_details_view(
        &self,
        event: UserEvent,
        view: VisualizationType,
        source: TelemetryEventSource,
        pivot: DetailsViewPivotType,
    ) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_open_details_view(event, view.as_str(), source);
        self.dispatcher
            .dispatch_message(Message::OpenDetailsView(OnDetailsViewOpenPayload {
                telemetry: Some(telemetry),
                details_view_type: view,
                pivot_type: pivot,
            }))
    }

    pub fn open_shortcut_configure_tab(&self, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self.telemetry_factory.from_hamburger_menu(event);
        self.dispatcher
            .dispatch_message(Message::ConfigureShortcuts(BaseActionPayload::with_telemetry(telemetry)))
    }

    pub fn set_launch_panel_type(&self, panel_type: LaunchPanelType) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::SetLaunchPanel(SetLaunchPanelState {
                launch_panel_type: panel_type,
            }))
    }
}
