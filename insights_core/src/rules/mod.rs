// src/rules/mod.rs
//! Rule information module
//!
//! A [`RuleInformation`] bundles what the normalizer needs to know about one
//! rule: its description, whether a given finding should surface, and how to
//! phrase the fix. Providers map rule ids to that bundle.

pub mod android;
pub mod errors;
pub mod information;
pub mod provider;

pub use android::create_android_rule_provider;
pub use errors::RuleError;
pub use information::{include_all_results, IncludeResultFn, ResolutionFn, RuleInformation};
pub use provider::{RuleInformationProvider, RuleInformationRegistry, RuleRegistryBuilder};
