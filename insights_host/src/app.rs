// src/app.rs
//! Boots the core for the host and runs scans and exports against it

use crate::config::HostConfig;
use crate::fetch::{discover_scan_files, FileScanFetcher};
use crate::output::ScanOutcome;
use insights_core::config::CorePreferences;
use insights_core::flux::action_creators::{ScanError, TabController, TabControllerResult};
use insights_core::flux::Store;
use insights_core::logging::codes;
use insights_core::persistence::{InMemoryStorage, JsonFileStorage, KeyValueStorage};
use insights_core::results::ResultGenerationError;
use insights_core::rules::{create_android_rule_provider, RuleError};
use insights_core::telemetry::LoggingTelemetryClient;
use insights_core::types::ScanStatus;
use insights_core::{log_error, log_info, log_success, CoreDependencies, InsightsCore};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Rule setup failed: {0}")]
    Rules(#[from] RuleError),

    #[error("Failed to walk '{path}': {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("No scan result files found under '{0}'")]
    NoScanFiles(PathBuf),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Results(#[from] ResultGenerationError),

    #[error("Nothing to export for '{0}'")]
    NothingToExport(PathBuf),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// No browser tabs exist in the headless host
#[derive(Debug, Default)]
pub struct HeadlessTabController;

impl TabController for HeadlessTabController {
    fn switch_to_target_tab(&self) -> TabControllerResult {
        log_info!("Ignoring tab switch in headless host");
        Ok(())
    }

    fn open_shortcut_configuration(&self) -> TabControllerResult {
        Err("shortcut configuration is not available in the headless host".into())
    }
}

pub struct HostApp {
    config: HostConfig,
}

impl HostApp {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// A fresh core over the configured storage
    pub fn boot(&self) -> Result<InsightsCore, HostError> {
        let storage: Rc<dyn KeyValueStorage> = match &self.config.storage_path {
            Some(path) => Rc::new(JsonFileStorage::new(path)),
            None => Rc::new(InMemoryStorage::new()),
        };

        let core = InsightsCore::new(CoreDependencies {
            storage,
            telemetry_client: Rc::new(LoggingTelemetryClient),
            tab_controller: Rc::new(HeadlessTabController),
            rule_provider: Rc::new(create_android_rule_provider()?),
            preferences: CorePreferences::from_env(),
        });

        if self.config.enable_telemetry {
            // Persisted, so later runs keep it without the flag
            if let Err(e) = core.user_config_message_creator().set_telemetry_state(true) {
                log_error!(
                    codes::system::CONFIGURATION_ERROR,
                    "Failed to enable telemetry",
                    "error" => e
                );
            }
        }

        Ok(core)
    }

    /// Scan a file, or every scan file below a directory
    pub fn scan_path(&self, path: &Path) -> Result<Vec<ScanOutcome>, HostError> {
        let files = if path.is_dir() {
            let files = discover_scan_files(path).map_err(|source| HostError::Discovery {
                path: path.to_path_buf(),
                source,
            })?;
            if files.is_empty() {
                return Err(HostError::NoScanFiles(path.to_path_buf()));
            }
            files
        } else {
            vec![path.to_path_buf()]
        };

        log_info!("Scanning result files", "count" => files.len(), "path" => path.display());

        let core = self.boot()?;
        let outcomes: Vec<ScanOutcome> = files.iter().map(|file| scan_file(&core, file)).collect();

        log_success!(
            codes::success::SCAN_COMPLETED,
            "Batch scan completed",
            "files" => outcomes.len(),
            "clean" => outcomes.iter().filter(|o| o.is_clean()).count()
        );

        Ok(outcomes)
    }

    /// Report json for one scan file
    pub fn export_report(&self, file: &Path) -> Result<String, HostError> {
        let core = self.boot()?;
        core.scan(&FileScanFetcher::new(file))?;

        core.export_report(&self.config.report_description)?
            .ok_or_else(|| HostError::NothingToExport(file.to_path_buf()))
    }

    pub fn write_report(&self, file: &Path, output: &Path) -> Result<(), HostError> {
        let json = self.export_report(file)?;
        std::fs::write(output, json).map_err(|source| HostError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        log_success!(
            codes::success::REPORT_EXPORTED,
            "Report written",
            "path" => output.display()
        );
        Ok(())
    }
}

/// Scans run one after another on the same core; the last one wins the stores
fn scan_file(core: &InsightsCore, file: &Path) -> ScanOutcome {
    let source = file.display().to_string();

    if let Err(e) = core.scan(&FileScanFetcher::new(file)) {
        log_error!(
            codes::scan::FETCH_FAILED,
            "Scan did not finish cleanly",
            "file" => file.display(),
            "error" => e
        );
    }

    let scan_state = core.stores().scan.get_state().unwrap_or_default();
    let cards = match scan_state.status {
        ScanStatus::Completed => core.card_view_data(),
        _ => None,
    };

    ScanOutcome {
        source,
        status: scan_state.status,
        failure_reason: scan_state.failure_reason,
        cards,
    }
}
