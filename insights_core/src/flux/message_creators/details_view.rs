// src/flux/message_creators/details_view.rs
//! Intents raised from the details view

use crate::flux::dispatcher::ActionMessageDispatcher;
use crate::flux::errors::DispatchError;
use crate::flux::messages::Message;
use crate::flux::payloads::{
    BaseActionPayload, ChangeInstanceStatusPayload, DetailsViewPivotType, ManualTestStatus,
    OnDetailsViewOpenPayload, OnDetailsViewPivotSelected, SelectTestRequirementPayload,
    SetFeatureFlagPayload, StartOverPayload, VisualizationType,
};
use crate::telemetry::{events, TelemetryDataFactory, TelemetryEventSource, UserEvent};
use std::rc::Rc;

pub struct DetailsViewActionMessageCreator {
    dispatcher: Rc<dyn ActionMessageDispatcher>,
    telemetry_factory: TelemetryDataFactory,
}

impl DetailsViewActionMessageCreator {
    pub fn new(dispatcher: Rc<dyn ActionMessageDispatcher>, telemetry_factory: TelemetryDataFactory) -> Self {
        Self {
            dispatcher,
            telemetry_factory,
        }
    }

    pub fn update_issues_selected_targets(&self, selected_targets: Vec<String>) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::UpdateIssuesSelectedTargets(selected_targets))
    }

    pub fn update_focused_instance_target(&self, instance_target: Vec<String>) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::UpdateFocusedInstance(instance_target))
    }

    pub fn switch_to_target_tab(&self, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self.telemetry_factory.from_details_view(event);
        self.dispatcher
            .dispatch_message(Message::SwitchTab(BaseActionPayload::with_telemetry(telemetry)))
    }

    pub fn select_details_view(
        &self,
        event: UserEvent,
        view: VisualizationType,
        pivot: DetailsViewPivotType,
    ) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::SelectDetailsView(OnDetailsViewOpenPayload {
                telemetry: Some(self.telemetry_factory.for_select_details_view(event, view.as_str())),
                details_view_type: view,
                pivot_type: pivot,
            }))
    }

    pub fn select_requirement(
        &self,
        event: UserEvent,
        requirement: &str,
        test: VisualizationType,
    ) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_select_requirement(event, test.as_str(), requirement);
        self.dispatcher
            .dispatch_message(Message::SelectTestRequirement(SelectTestRequirementPayload {
                selected_test: test,
                selected_requirement: requirement.to_string(),
                telemetry: Some(telemetry),
            }))
    }

    pub fn set_feature_flag(&self, feature_flag_id: &str, enabled: bool, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self.telemetry_factory.for_feature_flag_toggle(
            event,
            enabled,
            TelemetryEventSource::DetailsView,
            feature_flag_id,
        );
        self.dispatcher
            .dispatch_message(Message::SetFeatureFlag(SetFeatureFlagPayload {
                feature: feature_flag_id.to_string(),
                enabled,
                telemetry: Some(telemetry),
            }))
    }

    pub fn send_pivot_item_clicked(&self, pivot: DetailsViewPivotType, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_details_view_nav_pivot_activated(event, pivot.as_str());
        self.dispatcher
            .dispatch_message(Message::SelectDetailsViewPivot(OnDetailsViewPivotSelected {
                telemetry: Some(telemetry),
                pivot_key: pivot,
            }))
    }

    pub fn open_settings_panel(&self, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self.telemetry_factory.from_details_view(event);
        self.dispatcher
            .dispatch_message(Message::OpenSettingsPanel(BaseActionPayload::with_telemetry(telemetry)))
    }

    pub fn close_preview_features_panel(&self) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::ClosePreviewFeaturesPanel(self.panel_payload()))
    }

    pub fn close_scoping_panel(&self) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::CloseScopingPanel(self.panel_payload()))
    }

    pub fn close_settings_panel(&self) -> Result<(), DispatchError> {
        self.dispatcher
            .dispatch_message(Message::CloseSettingsPanel(self.panel_payload()))
    }

    /// Telemetry only; the view is already open
    pub fn details_view_opened(&self, selected_pivot: DetailsViewPivotType) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_details_view_opened(selected_pivot.as_str());
        self.dispatcher
            .send_telemetry(events::DETAILS_VIEW_OPEN, telemetry)
    }

    pub fn start_over_assessment(
        &self,
        event: UserEvent,
        test: VisualizationType,
        requirement: &str,
    ) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_assessment_action_from_details_view(test.as_str(), event);
        self.dispatcher
            .dispatch_message(Message::StartOverTest(StartOverPayload {
                test,
                requirement: requirement.to_string(),
                telemetry: Some(telemetry),
            }))
    }

    pub fn change_manual_test_status(
        &self,
        status: ManualTestStatus,
        test: VisualizationType,
        requirement: &str,
        selector: &str,
    ) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .for_assessment_action_from_details_view(test.as_str(), UserEvent::MouseClick);
        self.dispatcher
            .dispatch_message(Message::ChangeInstanceStatus(ChangeInstanceStatusPayload {
                test,
                requirement: requirement.to_string(),
                selector: selector.to_string(),
                status,
                telemetry: Some(telemetry),
            }))
    }

    pub fn export_results_clicked(&self, report_type: &str, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self.telemetry_factory.for_export_results(report_type, event);
        self.dispatcher
            .send_telemetry(events::EXPORT_RESULTS, telemetry)
    }

    pub fn copy_issue_details_clicked(&self, event: UserEvent) -> Result<(), DispatchError> {
        let telemetry = self
            .telemetry_factory
            .with_triggered_by_and_source(event, TelemetryEventSource::DetailsView);
        self.dispatcher
            .send_telemetry(events::COPY_ISSUE_DETAILS, telemetry)
    }

    fn panel_payload(&self) -> BaseActionPayload {
        BaseActionPayload::with_telemetry(self.telemetry_factory.from_details_view_no_triggered_by())
    }
}
