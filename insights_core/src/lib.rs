//! # Insights Core - scan results and store layer for Accessibility Insights

pub mod app;
pub mod config;
pub mod flux;
#[macro_use]
pub mod logging;
pub mod persistence;
pub mod results;
pub mod rules;
pub mod telemetry;
pub mod types;
pub mod views;

// Convenience re-exports
pub use app::{CoreDependencies, CoreStores, InsightsCore};
pub use results::{ResultGenerationError, UnifiedResultBuilder};
pub use rules::create_android_rule_provider;

pub mod prelude {
    pub use crate::app::{CoreDependencies, CoreStores, InsightsCore, INSTALLATION_ID_PROPERTY};

    pub use crate::flux::action_creators::{
        ScanController, ScanError, ScanResultsFetcher, TabController, TabControllerResult,
    };
    pub use crate::flux::{
        ActionMessageDispatcher, DispatchError, Message, MessageKind, Store, StoreError, StoreHub,
    };

    pub use crate::persistence::{InMemoryStorage, JsonFileStorage, KeyValueStorage, StorageError};
    pub use crate::results::{ResultGenerationError, UnifiedResultBuilder};
    pub use crate::rules::{
        create_android_rule_provider, RuleInformation, RuleInformationProvider,
        RuleInformationRegistry,
    };
    pub use crate::telemetry::{
        LoggingTelemetryClient, TelemetryClient, TelemetryEventSource, UserEvent,
    };

    pub use crate::types::{
        InstanceResultStatus, ScanResults, ScanStatus, UnifiedResult, UnifiedRule,
        UnifiedScanResultStoreData,
    };
    pub use crate::views::{
        result_section_content, result_section_title, CardsViewModel, InstanceOutcomeType,
        ResultSectionContent,
    };
}
