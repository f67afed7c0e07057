//! Configuration module for the insights core
//!
//! Fixed limits are compiled in through [`constants`]; user preferences come from
//! the environment through [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{CorePreferences, LogLevel};

/// Build information and configuration metadata
pub mod build_info {
    /// Crate version baked in at build time
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("INSIGHTS_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("insights_core {} ({} profile)", version(), profile())
    }
}
