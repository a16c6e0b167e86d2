//! Gold text file sink
//!
//! Writes gold lines through a buffered writer. The file is created (or
//! truncated) on [`GoldSink::open`], never before. Parent directories are
//! not created: a missing directory is reported as a path error.

use dpr_gold_application::ports::gold_sink::{GoldSink, GoldWriter, SinkError};
use dpr_gold_domain::GoldLine;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Gold sink backed by a text file on disk
#[derive(Debug, Clone)]
pub struct GoldFileSink {
    path: PathBuf,
}

impl GoldFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GoldSink for GoldFileSink {
    type Writer = GoldFileWriter;

    fn open(&self) -> Result<GoldFileWriter, SinkError> {
        let file = File::create(&self.path).map_err(|source| SinkError::Create {
            path: self.path.clone(),
            source,
        })?;

        Ok(GoldFileWriter {
            writer: BufWriter::new(file),
            path: self.path.clone(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An opened gold file
pub struct GoldFileWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl GoldFileWriter {
    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl GoldWriter for GoldFileWriter {
    fn write_line(&mut self, line: &GoldLine) -> Result<(), SinkError> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    fn finish(mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|e| self.write_error(e))
    }
}
