// src/flux/action_creators/global.rs
//! Feature flags and the launch panel; state that is not tied to one view

use super::{publish_if_present, register_routes};
use crate::flux::actions::{FeatureFlagActions, LaunchPanelActions};
use crate::flux::errors::DispatchError;
use crate::flux::interpreter::Interpreter;
use crate::flux::payloads::{SetFeatureFlagPayload, SetLaunchPanelState};
use crate::telemetry::{events, TelemetryEventHandler};
use std::collections::BTreeMap;
use std::rc::Rc;

pub struct GlobalActionCreator {
    feature_flag_actions: Rc<FeatureFlagActions>,
    launch_panel_actions: Rc<LaunchPanelActions>,
    telemetry: Rc<TelemetryEventHandler>,
}

impl GlobalActionCreator {
    pub fn new(
        feature_flag_actions: Rc<FeatureFlagActions>,
        launch_panel_actions: Rc<LaunchPanelActions>,
        telemetry: Rc<TelemetryEventHandler>,
    ) -> Rc<Self> {
        Rc::new(Self {
            feature_flag_actions,
            launch_panel_actions,
            telemetry,
        })
    }

    pub fn register_callbacks(self: &Rc<Self>, interpreter: &Interpreter) {
        register_routes!(interpreter, self, {
            SetFeatureFlag => Self::on_set_feature_flag,
            SetLaunchPanel => Self::on_set_launch_panel,
        });
    }

    fn on_set_feature_flag(&self, payload: &SetFeatureFlagPayload) -> Result<(), DispatchError> {
        self.feature_flag_actions.set_feature_flag.invoke(payload)?;
        publish_if_present(&self.telemetry, events::FEATURE_FLAG_TOGGLE, payload.telemetry.as_ref());
        Ok(())
    }

    fn on_set_launch_panel(&self, payload: &SetLaunchPanelState) -> Result<(), DispatchError> {
        self.launch_panel_actions.set_launch_panel_type.invoke(payload)?;
        let properties = BTreeMap::from([(
            "launchPanelType".to_string(),
            payload.launch_panel_type.as_str().to_string(),
        )]);
        self.telemetry.publish_properties(events::LAUNCH_PANEL_SET, properties);
        Ok(())
    }
}
