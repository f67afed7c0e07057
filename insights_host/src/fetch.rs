// src/fetch.rs
//! Scan results read from files written by the device scan service

use insights_core::config::compile_time::scan::{MAX_SCAN_RESULT_FILE_SIZE, SCAN_RESULT_FILE_EXTENSION};
use insights_core::flux::action_creators::{ScanError, ScanResultsFetcher};
use insights_core::results::ResultGenerationError;
use insights_core::types::ScanResults;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fetches one scan result file per call
#[derive(Debug, Clone)]
pub struct FileScanFetcher {
    path: PathBuf,
}

impl FileScanFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

impl ScanResultsFetcher for FileScanFetcher {
    fn fetch_scan_results(&self) -> Result<ScanResults, ScanError> {
        let metadata = std::fs::metadata(&self.path)
            .map_err(|e| ScanError::fetch_failed(&self.location(), &e.to_string()))?;

        if metadata.len() > MAX_SCAN_RESULT_FILE_SIZE {
            return Err(ResultGenerationError::scan_results_too_large(
                metadata.len(),
                MAX_SCAN_RESULT_FILE_SIZE,
            )
            .into());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ScanError::fetch_failed(&self.location(), &e.to_string()))?;

        Ok(ScanResults::from_json(&content)?)
    }
}

/// Every scan result file under `dir`, sorted by path
pub fn discover_scan_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == SCAN_RESULT_FILE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
