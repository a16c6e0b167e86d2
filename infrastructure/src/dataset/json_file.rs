//! JSON file dataset source
//!
//! Reads a DPR biencoder file (one JSON array of record objects) through a
//! buffered reader and deserializes it in a single pass. Keys other than
//! `question` and `answers` are skipped by the deserializer, so the large
//! context lists in these files are never materialized.

use dpr_gold_application::ports::dataset_source::{DatasetSource, SourceError};
use dpr_gold_domain::Dataset;
use serde_json::error::Category;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

/// Dataset source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn classify(&self, err: serde_json::Error) -> SourceError {
        let path = self.path.clone();
        match err.classify() {
            Category::Io => SourceError::Unreadable {
                path,
                source: err.into(),
            },
            Category::Syntax | Category::Eof => SourceError::Malformed {
                path,
                message: err.to_string(),
            },
            Category::Data => SourceError::InvalidRecord {
                path,
                message: err.to_string(),
            },
        }
    }
}

impl DatasetSource for JsonFileSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        debug!("Opening dataset {}", self.path.display());

        let file = File::open(&self.path).map_err(|source| SourceError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| self.classify(e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
