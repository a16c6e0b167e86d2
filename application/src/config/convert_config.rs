//! Conversion configuration
//!
//! [`ConvertConfig`] is the explicit input of a conversion run: where to read
//! the DPR records from and where to write the gold file. It is resolved once
//! from the layered sources (defaults, files, environment, CLI) and then
//! passed by value into the adapters.

use std::path::PathBuf;
use thiserror::Error;

/// Input file used when no source path is configured
pub const DEFAULT_SRC_PATH: &str = "biencoder-nq-dev.json";

/// Configuration resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "gold_data_path is required (pass --gold_data_path, set DPR_GOLD_GOLD_DATA_PATH, or add it to a config file)"
    )]
    MissingGoldDataPath,
}

/// Paths for a single conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// DPR biencoder JSON file to read
    pub src_path: PathBuf,
    /// Gold text file to create or truncate
    pub gold_data_path: PathBuf,
}

impl ConvertConfig {
    pub fn new(src_path: impl Into<PathBuf>, gold_data_path: impl Into<PathBuf>) -> Self {
        Self {
            src_path: src_path.into(),
            gold_data_path: gold_data_path.into(),
        }
    }

    /// Build a config from optional, already-merged values
    ///
    /// A missing source falls back to [`DEFAULT_SRC_PATH`]. A missing or
    /// empty gold path is an error.
    pub fn resolve(
        src_path: Option<PathBuf>,
        gold_data_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let src_path = src_path
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SRC_PATH));
        let gold_data_path = gold_data_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingGoldDataPath)?;

        Ok(Self {
            src_path,
            gold_data_path,
        })
    }
}
