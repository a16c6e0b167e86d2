//! Gold sink port
//!
//! Defines where gold lines go. Opening is separate from construction so
//! that the use case can load the dataset first and only then create (or
//! truncate) the destination.

use crate::use_cases::convert::ErrorKind;
use dpr_gold_domain::GoldLine;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the gold file
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("cannot create gold file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write gold file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Path
    }
}

/// Destination of gold lines
pub trait GoldSink {
    type Writer: GoldWriter;

    /// Create or truncate the destination
    fn open(&self) -> Result<Self::Writer, SinkError>;

    /// Human-readable location, used in logs and summaries
    fn describe(&self) -> String;
}

/// An opened destination, written sequentially
pub trait GoldWriter {
    fn write_line(&mut self, line: &GoldLine) -> Result<(), SinkError>;

    /// Flush everything written so far; the writer is consumed
    fn finish(self) -> Result<(), SinkError>;
}
