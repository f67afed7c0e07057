// src/flux/action_creators/details_view.rs
//! Details view navigation, its side panels and the issues visualization

use super::{publish_if_present, register_routes};
use crate::flux::actions::{DetailsViewActions, VisualizationActions};
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::{BaseActionPayload, OnDetailsViewOpenPayload, OnDetailsViewPivotSelected};
use crate::telemetry::{events, TelemetryEventHandler};
use std::rc::Rc;

pub struct DetailsViewActionCreator {
    details_view_actions: Rc<DetailsViewActions>,
    visualization_actions: Rc<VisualizationActions>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl DetailsViewActionCreator {
    pub fn new(
        details_view_actions: Rc<DetailsViewActions>,
        visualization_actions: Rc<VisualizationActions>,
        telemetry: Rc<TelemetryEventHandler>,
    ) -> Rc<Self> {
        Rc::new(Self {
            details_view_actions,
            visualization_actions,
            telemetry,
        })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            OpenDetailsView => Self::on_open_details_view,
            SelectDetailsView => Self::on_select_details_view,
            SelectDetailsViewPivot => Self::on_pivot_selected,
            OpenSettingsPanel => Self::on_open_settings_panel,
            CloseSettingsPanel => Self::on_close_settings_panel,
            ClosePreviewFeaturesPanel => Self::on_close_preview_features_panel,
            CloseScopingPanel => Self::on_close_scoping_panel,
            UpdateIssuesSelectedTargets => Self::on_update_selected_targets,
            UpdateFocusedInstance => Self::on_update_focused_instance,
        });
    }

    fn on_open_details_view(&self, payload: &OnDetailsViewOpenPayload) -> Result<(), DispatchError> {
        self.details_view_actions.open_details_view.invoke(payload)?;
        publish_if_present(&self.telemetry, events::DETAILS_VIEW_OPEN, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_select_details_view(&self, payload: &OnDetailsViewOpenPayload) -> Result<(), DispatchError> {
        self.details_view_actions.select_details_view.invoke(payload)?;
        publish_if_present(&self.telemetry, events::DETAILS_VIEW_SELECT, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_pivot_selected(&self, payload: &OnDetailsViewPivotSelected) -> Result<(), DispatchError> {
        self.details_view_actions.pivot_selected.invoke(payload)?;
        publish_if_present(
            &self.telemetry,
            events::DETAILS_VIEW_PIVOT_ACTIVATED,
            payload.telemetry.as_ref(),
        );
        Ok(())
    }

    fn on_open_settings_panel(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.details_view_actions.open_settings_panel.invoke(&())?;
        publish_if_present(&self.telemetry, events::SETTINGS_PANEL_OPEN, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_close_settings_panel(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.details_view_actions.close_settings_panel.invoke(&())?;
        publish_if_present(&self.telemetry, events::SETTINGS_PANEL_CLOSE, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_close_preview_features_panel(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.details_view_actions.close_preview_features_panel.invoke(&())?;
        publish_if_present(&self.telemetry, events::PREVIEW_FEATURES_CLOSE, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_close_scoping_panel(&self, payload: &BaseActionPayload) -> Result<(), DispatchError> {
        self.details_view_actions.close_scoping_panel.invoke(&())?;
        publish_if_present(&self.telemetry, events::SCOPING_CLOSE, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_update_selected_targets(&self, targets: &Vec<String>) -> Result<(), DispatchError> {
        self.visualization_actions.update_selected_targets.invoke(targets)
    }

    fn on_update_focused_instance(&self, target: &Vec<String>) -> Result<(), DispatchError> {
        self.visualization_actions.update_focused_instance.invoke(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::messages::Message;
    use crate::flux::store::Store;
    use crate::flux::stores::{DetailsViewStore, VisualizationStore};
    use crate::telemetry::{RecordingTelemetryClient, TelemetryDataFactory, TelemetryEventSource, UserEvent};
    use crate::types::{DetailsViewPivotType, VisualizationType};

    struct Fixture {
        interpreter: Interpreter,
        client: Rc<RecordingTelemetryClient>,
        details_view_store: Rc<DetailsViewStore>,
        visualization_store: Rc<VisualizationStore>,
        _details_view_actions: Rc<DetailsViewActions>,
        _visualization_actions: Rc<VisualizationActions>,
    }

    fn fixture() -> Fixture {
        let details_view_actions = Rc::new(DetailsViewActions::default());
        let visualization_actions = Rc::new(VisualizationActions::default());
        let details_view_store = DetailsViewStore::new(&details_view_actions);
        details_view_store.initialize();
        let visualization_store = VisualizationStore::new(&visualization_actions);
        visualization_store.initialize();

        let client = Rc::new(RecordingTelemetryClient::new());
        let handler = Rc::new(TelemetryEventHandler::new(client.clone()));
        handler.enable_telemetry();

        let interpreter = Interpreter::new();
        DetailsViewActionCreator::new(
            details_view_actions.clone(),
            visualization_actions.clone(),
            handler,
        )
        .register_callbacks(&interpreter);

        Fixture {
            interpreter,
            client,
            details_view_store,
            visualization_store,
            _details_view_actions: details_view_actions,
            _visualization_actions: visualization_actions,
        }
    }

    #[test]
    fn test_open_details_view_updates_store_and_telemetry() {
        let fixture = fixture();
        let telemetry = TelemetryDataFactory::new().for_open_details_view(
            UserEvent::MouseClick,
            VisualizationType::Issues.as_str(),
            TelemetryEventSource::LaunchPad,
        );

        fixture
            .interpreter
            .interpret(&Message::OpenDetailsView(OnDetailsViewOpenPayload {
                telemetry: Some(telemetry),
                details_view_type: VisualizationType::Issues,
                pivot_type: DetailsViewPivotType::FastPass,
            }))
            .unwrap();

        let state = fixture.details_view_store.get_state().unwrap();
        assert!(state.is_open);
        assert_eq!(state.selected_details_view, Some(VisualizationType::Issues));

        let tracked = fixture.client.events();
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].name, events::DETAILS_VIEW_OPEN);
        assert_eq!(tracked[0].properties["selectedTest"], "Issues");
    }

    #[test]
    fn test_focused_instance_routed_to_visualization_store() {
        let fixture = fixture();

        fixture
            .interpreter
            .interpret(&Message::UpdateFocusedInstance(vec!["#submit".to_string()]))
            .unwrap();

        assert_eq!(
            fixture.visualization_store.get_state().unwrap().focused_target,
            Some(vec!["#submit".to_string()])
        );
        assert!(fixture.client.events().is_empty());
    }
}
