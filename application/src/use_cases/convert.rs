//! Convert use case
//!
//! Loads the whole dataset, then writes one gold line per record in input
//! order. The destination is only opened once the dataset has loaded, so a
//! malformed input never creates or truncates the gold file.

use crate::ports::dataset_source::{DatasetSource, SourceError};
use crate::ports::gold_sink::{GoldSink, GoldWriter, SinkError};
use crate::ports::progress::{ConvertProgressNotifier, NoProgress};
use dpr_gold_domain::GoldLine;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Coarse classification of conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unreadable input, or an output that cannot be written
    Path,
    /// Input that is not JSON, not an array, or has malformed records
    Format,
}

/// Errors that can occur during a conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Source(e) => e.kind(),
            ConvertError::Sink(e) => e.kind(),
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutput {
    pub records_written: usize,
    /// Where the records were read from
    pub source: String,
    /// Where the gold lines were written to
    pub destination: String,
}

/// Use case for converting a DPR dataset into a gold file
pub struct ConvertUseCase<S: DatasetSource, K: GoldSink> {
    source: S,
    sink: K,
}

impl<S: DatasetSource, K: GoldSink> ConvertUseCase<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self) -> Result<ConvertOutput, ConvertError> {
        self.execute_with_progress(&NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        progress: &dyn ConvertProgressNotifier,
    ) -> Result<ConvertOutput, ConvertError> {
        let source = self.source.describe();
        let destination = self.sink.describe();

        progress.on_load_start(&source);
        match self.run(&source, &destination, progress) {
            Ok(records_written) => Ok(ConvertOutput {
                records_written,
                source,
                destination,
            }),
            Err(e) => {
                progress.on_failed();
                Err(e)
            }
        }
    }

    fn run(
        &self,
        source: &str,
        destination: &str,
        progress: &dyn ConvertProgressNotifier,
    ) -> Result<usize, ConvertError> {
        let dataset = self.source.load()?;
        info!("Loaded {} records from {}", dataset.len(), source);
        progress.on_load_complete(dataset.len());

        let mut writer = self.sink.open()?;
        debug!("Writing gold lines to {}", destination);

        for (index, record) in dataset.iter().enumerate() {
            if record.question_contains_separator() {
                warn!(
                    "Record {} has a tab or line break in its question; its gold line will not split cleanly",
                    index
                );
            }
            writer.write_line(&GoldLine::from_record(record))?;
            progress.on_record_written(index);
        }

        writer.finish()?;
        progress.on_complete(dataset.len());
        info!("Wrote {} gold lines to {}", dataset.len(), destination);

        Ok(dataset.len())
    }
}
