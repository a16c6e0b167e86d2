//! Application layer for dpr-gold
//!
//! This crate contains the conversion use case, port definitions, and the
//! run configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigError, ConvertConfig, DEFAULT_SRC_PATH};
pub use ports::{
    dataset_source::{DatasetSource, SourceError},
    gold_sink::{GoldSink, GoldWriter, SinkError},
    progress::{ConvertProgressNotifier, NoProgress},
};
pub use use_cases::convert::{ConvertError, ConvertOutput, ConvertUseCase, ErrorKind};
