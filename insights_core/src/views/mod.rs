//! View models derived from store state

pub mod card_selection_view_data;
pub mod cards;
pub mod report;
pub mod result_section;
pub mod screenshot;

pub use card_selection_view_data::{get_card_selection_view_data, CardSelectionViewData};
pub use cards::{get_card_view_data, CardResult, CardRuleResult, CardRuleResultsByStatus, CardsViewModel, HighlightState};
pub use report::{get_report_export, OutcomeSummary, ReportExport, ResultsReport, AUTOMATED_CHECKS_EXPORT_TYPE};
pub use result_section::{result_section_content, result_section_title, InstanceOutcomeType, ResultSectionContent};
pub use screenshot::{get_screenshot_view_model, png_dimensions, HighlightBoxViewModel, ScreenshotViewModel};
