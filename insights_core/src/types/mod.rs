//! Core data types
//!
//! - [`scan_results`] - raw, tool specific output of a mobile scan
//! - [`unified`] - tool agnostic results shared by every platform
//! - [`store_data`] - state held by the stores

pub mod scan_results;
pub mod store_data;
pub mod unified;

pub use scan_results::{BoundingRectangle, DeviceInfo, RuleResultsData, ScanResults, ViewElementData};
pub use store_data::{
    feature_flags, AssessmentStoreData, CardSelectionStoreData, DetailsViewContentPanel,
    DetailsViewPivotType, DetailsViewStoreData, FeatureFlagStoreData, InstanceStatusMap,
    LaunchPanelStoreData, LaunchPanelType, ManualTestStatus, RuleExpandCollapseData, ScanStatus,
    ScanStoreData, UnifiedScanResultStoreData, UserConfigurationStoreData, VisualizationStoreData,
    VisualizationType, NO_ISSUE_FILING_SERVICE,
};
pub use unified::{
    ApplicationProperties, GuidanceLink, InstanceResultStatus, PlatformData, ScanEngineProperties,
    ScreenshotData, TargetAppData, ToolData, UnifiedDescriptors, UnifiedIdentifiers,
    UnifiedResolution, UnifiedResult, UnifiedRule, UnifiedScanCompletedPayload, ViewPortInfo,
};
