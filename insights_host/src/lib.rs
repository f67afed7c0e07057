//! # Insights Host
//!
//! Headless host for the insights core: loads scan result files, drives the
//! store graph and renders cards or exported reports.

pub mod app;
pub mod config;
pub mod fetch;
pub mod output;

pub use app::{HeadlessTabController, HostApp, HostError};
pub use config::{ConfigError, HostConfig};
pub use fetch::{discover_scan_files, FileScanFetcher};
pub use output::{render, render_text, OutputFormat, ScanOutcome};
