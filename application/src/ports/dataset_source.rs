//! Dataset source port
//!
//! Defines the interface for loading the full record dataset.

use crate::use_cases::convert::ErrorKind;
use dpr_gold_domain::Dataset;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("cannot read dataset {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("invalid record in {}: {message}", path.display())]
    InvalidRecord { path: PathBuf, message: String },
}

impl SourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SourceError::Unreadable { .. } => ErrorKind::Path,
            SourceError::Malformed { .. } | SourceError::InvalidRecord { .. } => ErrorKind::Format,
        }
    }
}

/// Loads every record before conversion starts
///
/// Implementations live in the infrastructure layer (JSON files today).
pub trait DatasetSource {
    /// Read and parse the whole dataset
    fn load(&self) -> Result<Dataset, SourceError>;

    /// Human-readable location, used in logs and summaries
    fn describe(&self) -> String;
}
