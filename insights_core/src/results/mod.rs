// results/mod.rs
//! Scan result normalization
//!
//! Raw engine output goes in, tool agnostic [`UnifiedResult`](crate::types::UnifiedResult)s
//! and the full scan completed payload come out.

pub mod builder;
pub mod converter;
pub mod error;
pub mod fix_instructions;
pub mod rules_converter;
pub mod uid;
pub mod view_index;

pub use builder::{default_tool_data, UnifiedResultBuilder};
pub use converter::{convert_scan_results_to_unified_results, convert_with_stats, ConversionStats};
pub use error::ResultGenerationError;
pub use fix_instructions::{process_color_instruction, process_resolution, InstructionSegment};
pub use rules_converter::convert_scan_results_to_unified_rules;
pub use uid::{SequentialUidGenerator, UidGenerator, UuidGenerator};
pub use view_index::{build_view_element_index, ViewElementIndex};
