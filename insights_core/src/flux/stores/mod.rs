//! Concrete stores, one per slice of application state

pub mod assessment;
pub mod card_selection;
pub mod details_view;
pub mod feature_flag;
pub mod launch_panel;
pub mod scan;
pub mod unified_scan_result;
pub mod user_configuration;
pub mod visualization;

pub use assessment::AssessmentStore;
pub use card_selection::CardSelectionStore;
pub use details_view::DetailsViewStore;
pub use feature_flag::FeatureFlagStore;
pub use launch_panel::LaunchPanelStore;
pub use scan::ScanStore;
pub use unified_scan_result::UnifiedScanResultStore;
pub use user_configuration::UserConfigurationStore;
pub use visualization::VisualizationStore;
