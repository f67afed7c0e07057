// src/app.rs
//! Wiring of the whole results pipeline
//!
//! [`InsightsCore`] builds every action group, store, action creator and the
//! interpreter they hang off, reads persisted data once and keeps the installation
//! identity fresh. Hosts talk to it through message creators and [`InsightsCore::scan`].

use crate::config::runtime::CorePreferences;
use crate::flux::action_creators::{
    AssessmentActionCreator, CardSelectionActionCreator, DetailsViewActionCreator,
    GlobalActionCreator, ScanController, ScanError, ScanResultsFetcher, TabActionCreator,
    TabController, TelemetryActionCreator, UserConfigurationActionCreator,
};
use crate::flux::dispatcher::{ActionMessageDispatcher, DirectActionMessageDispatcher};
use crate::flux::hub::{ActionHub, StoreHub};
use crate::flux::interpreter::Interpreter;
use crate::flux::message_creators::{
    CardSelectionMessageCreator, DetailsViewActionMessageCreator, PopupActionMessageCreator,
    UserConfigMessageCreator,
};
use crate::flux::store::{ListenerId, Store, StoreHandle};
use crate::flux::stores::{
    AssessmentStore, CardSelectionStore, DetailsViewStore, FeatureFlagStore, LaunchPanelStore,
    ScanStore, UnifiedScanResultStore, UserConfigurationStore, VisualizationStore,
};
use crate::logging::codes;
use crate::persistence::{
    get_persisted_data, set_typed, InstallationData, KeyValueStorage, DATA_KEYS_TO_FETCH,
    INSTALLATION_KEY,
};
use crate::results::{ResultGenerationError, UnifiedResultBuilder};
use crate::rules::RuleInformationProvider;
use crate::telemetry::{
    events, TelemetryClient, TelemetryDataFactory, TelemetryEventHandler, TelemetryEventSource,
    TelemetryStateListener,
};
use crate::types::UnifiedScanCompletedPayload;
use crate::views::{
    get_card_selection_view_data, get_card_view_data, get_report_export, get_screenshot_view_model,
    CardsViewModel, ScreenshotViewModel,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Property stamped on every telemetry event
pub const INSTALLATION_ID_PROPERTY: &str = "installationId";

/// Collaborators supplied by the host
pub struct CoreDependencies {
    pub storage: Rc<dyn KeyValueStorage>,
    pub telemetry_client: Rc<dyn TelemetryClient>,
    pub tab_controller: Rc<dyn TabController>,
    pub rule_provider: Rc<dyn RuleInformationProvider>,
    pub preferences: CorePreferences,
}

/// Every store, shared with views and the store hub
#[derive(Clone)]
pub struct CoreStores {
    pub unified_scan_result: Rc<UnifiedScanResultStore>,
    pub card_selection: Rc<CardSelectionStore>,
    pub scan: Rc<ScanStore>,
    pub user_configuration: Rc<UserConfigurationStore>,
    pub details_view: Rc<DetailsViewStore>,
    pub visualization: Rc<VisualizationStore>,
    pub assessment: Rc<AssessmentStore>,
    pub feature_flag: Rc<FeatureFlagStore>,
    pub launch_panel: Rc<LaunchPanelStore>,
}

impl CoreStores {
    fn create(hub: &ActionHub, storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            unified_scan_result: UnifiedScanResultStore::new(&hub.unified_scan_result_actions),
            card_selection: CardSelectionStore::new(
                &hub.card_selection_actions,
                &hub.unified_scan_result_actions,
            ),
            scan: ScanStore::new(&hub.scan_actions),
            user_configuration: UserConfigurationStore::new(&hub.user_configuration_actions, storage),
            details_view: DetailsViewStore::new(&hub.details_view_actions),
            visualization: VisualizationStore::new(&hub.visualization_actions),
            assessment: AssessmentStore::new(&hub.assessment_actions),
            feature_flag: FeatureFlagStore::new(&hub.feature_flag_actions),
            launch_panel: LaunchPanelStore::new(&hub.launch_panel_actions),
        }
    }

    fn handles(&self) -> Vec<Rc<dyn StoreHandle>> {
        let handles: [Rc<dyn StoreHandle>; 9] = [
            self.unified_scan_result.clone(),
            self.card_selection.clone(),
            self.scan.clone(),
            self.user_configuration.clone(),
            self.details_view.clone(),
            self.visualization.clone(),
            self.assessment.clone(),
            self.feature_flag.clone(),
            self.launch_panel.clone(),
        ];
        handles.into()
    }
}

pub struct InsightsCore {
    action_hub: ActionHub,
    stores: CoreStores,
    store_hub: StoreHub,
    interpreter: Rc<Interpreter>,
    dispatcher: Rc<dyn ActionMessageDispatcher>,
    telemetry: Rc<TelemetryEventHandler>,
    scan_controller: ScanController,
    installation: InstallationData,
    telemetry_listener: ListenerId,
}

impl InsightsCore {
    pub fn new(dependencies: CoreDependencies) -> Self {
        let CoreDependencies {
            storage,
            telemetry_client,
            tab_controller,
            rule_provider,
            preferences,
        } = dependencies;

        let persisted = get_persisted_data(storage.as_ref(), DATA_KEYS_TO_FETCH);
        let installation = refresh_installation(storage.as_ref(), persisted.installation_data);

        let action_hub = ActionHub::new();
        let stores = CoreStores::create(&action_hub, storage);
        stores.unified_scan_result.initialize();
        stores.card_selection.initialize();
        stores.scan.initialize();
        stores
            .user_configuration
            .initialize(persisted.user_configuration_data);
        stores.details_view.initialize();
        stores.visualization.initialize();
        stores.assessment.initialize();
        stores.feature_flag.initialize();
        stores.launch_panel.initialize();
        let store_hub = StoreHub::new(stores.handles());

        crate::log_success!(
            codes::success::STORES_INITIALIZED,
            "Stores initialized",
            "stores" => store_hub.store_names().len()
        );

        let telemetry = Rc::new(
            TelemetryEventHandler::new(telemetry_client)
                .with_common_property(INSTALLATION_ID_PROPERTY, &installation.id),
        );
        let telemetry_listener =
            TelemetryStateListener::new(stores.user_configuration.clone(), telemetry.clone())
                .initialize();

        let interpreter = Rc::new(Interpreter::new());
        register_action_creators(&interpreter, &action_hub, tab_controller, &telemetry);

        let dispatcher: Rc<dyn ActionMessageDispatcher> = Rc::new(
            DirectActionMessageDispatcher::new(interpreter.clone())
                .with_dispatch_logging(preferences.logging.log_dispatch_events),
        );

        let builder = UnifiedResultBuilder::new(rule_provider).with_preferences(preferences.results);
        let scan_controller = ScanController::new(
            action_hub.scan_actions.clone(),
            action_hub.unified_scan_result_actions.clone(),
            builder,
            telemetry.clone(),
        );

        telemetry.publish_properties(events::APP_INITIALIZED, BTreeMap::new());
        crate::log_success!(
            codes::success::SYSTEM_INITIALIZATION_COMPLETED,
            "Insights core initialized",
            "telemetry_enabled" => telemetry.is_enabled()
        );

        Self {
            action_hub,
            stores,
            store_hub,
            interpreter,
            dispatcher,
            telemetry,
            scan_controller,
            installation,
            telemetry_listener,
        }
    }

    pub fn action_hub(&self) -> &ActionHub {
        &self.action_hub
    }

    pub fn stores(&self) -> &CoreStores {
        &self.stores
    }

    pub fn store_hub(&self) -> &StoreHub {
        &self.store_hub
    }

    pub fn interpreter(&self) -> &Rc<Interpreter> {
        &self.interpreter
    }

    pub fn dispatcher(&self) -> Rc<dyn ActionMessageDispatcher> {
        self.dispatcher.clone()
    }

    pub fn telemetry(&self) -> &Rc<TelemetryEventHandler> {
        &self.telemetry
    }

    pub fn installation(&self) -> &InstallationData {
        &self.installation
    }

    pub fn telemetry_listener_id(&self) -> ListenerId {
        self.telemetry_listener
    }

    pub fn card_selection_message_creator(
        &self,
        source: TelemetryEventSource,
    ) -> CardSelectionMessageCreator {
        CardSelectionMessageCreator::new(self.dispatcher(), TelemetryDataFactory::new(), source)
    }

    pub fn details_view_message_creator(&self) -> DetailsViewActionMessageCreator {
        DetailsViewActionMessageCreator::new(self.dispatcher(), TelemetryDataFactory::new())
    }

    pub fn popup_message_creator(&self) -> PopupActionMessageCreator {
        PopupActionMessageCreator::new(self.dispatcher(), TelemetryDataFactory::new())
    }

    pub fn user_config_message_creator(&self) -> UserConfigMessageCreator {
        UserConfigMessageCreator::new(self.dispatcher())
    }

    /// Fetch, normalize and publish one scan
    pub fn scan(
        &self,
        fetcher: &dyn ScanResultsFetcher,
    ) -> Result<UnifiedScanCompletedPayload, ScanError> {
        self.scan_controller.scan(fetcher)
    }

    /// `None` until a scan has completed
    pub fn card_view_data(&self) -> Option<CardsViewModel> {
        let results = self.stores.unified_scan_result.get_state()?;
        let selection = self.stores.card_selection.get_state();
        let selection_view_data = get_card_selection_view_data(selection.as_ref());

        get_card_view_data(
            results.rules.as_deref(),
            results.results.as_deref(),
            &selection_view_data,
        )
    }

    /// `None` until a scan has completed
    pub fn screenshot_view_model(&self) -> Result<Option<ScreenshotViewModel>, ResultGenerationError> {
        let Some(store_data) = self
            .stores
            .unified_scan_result
            .get_state()
            .filter(|data| data.results.is_some())
        else {
            return Ok(None);
        };
        let highlighted = get_card_selection_view_data(
            self.stores.card_selection.get_state().as_ref(),
        )
        .highlighted_result_uids;

        get_screenshot_view_model(&store_data, &highlighted).map(Some)
    }

    /// Report json for the latest scan, `None` when there is nothing to export
    pub fn export_report(&self, description: &str) -> Result<Option<String>, ResultGenerationError> {
        let Some(store_data) = self.stores.unified_scan_result.get_state() else {
            return Ok(None);
        };
        let feature_flags = self.stores.feature_flag.get_state().unwrap_or_default();
        let cards = self.card_view_data();

        match get_report_export(&store_data, &feature_flags, cards.as_ref()) {
            Some(export) => export.generate_json(description).map(Some),
            None => Ok(None),
        }
    }
}

fn register_action_creators(
    interpreter: &Interpreter,
    hub: &ActionHub,
    tab_controller: Rc<dyn TabController>,
    telemetry: &Rc<TelemetryEventHandler>,
) {
    CardSelectionActionCreator::new(hub.card_selection_actions.clone(), telemetry.clone())
        .register_callbacks(interpreter);
    UserConfigurationActionCreator::new(hub.user_configuration_actions.clone())
        .register_callbacks(interpreter);
    DetailsViewActionCreator::new(
        hub.details_view_actions.clone(),
        hub.visualization_actions.clone(),
        telemetry.clone(),
    )
    .register_callbacks(interpreter);
    AssessmentActionCreator::new(hub.assessment_actions.clone(), telemetry.clone())
        .register_callbacks(interpreter);
    GlobalActionCreator::new(
        hub.feature_flag_actions.clone(),
        hub.launch_panel_actions.clone(),
        telemetry.clone(),
    )
    .register_callbacks(interpreter);
    TabActionCreator::new(tab_controller, telemetry.clone()).register_callbacks(interpreter);
    TelemetryActionCreator::new(telemetry.clone()).register_callbacks(interpreter);
}

/// Reuse this month's installation id or mint and store a new one
fn refresh_installation(
    storage: &dyn KeyValueStorage,
    existing: Option<InstallationData>,
) -> InstallationData {
    let (installation, changed) = InstallationData::refresh(existing, Utc::now());

    if changed {
        if let Err(error) = set_typed(storage, INSTALLATION_KEY, &installation) {
            crate::log_error!(
                codes::persistence::STORAGE_WRITE_FAILED,
                "Failed to persist installation data",
                "error" => error
            );
        }
    }

    installation
}
