//! Infrastructure layer for dpr-gold
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod gold;
pub mod pipeline;

// Re-export commonly used types
pub use config::{ConfigLoadError, ConfigLoader, FileConfig};
pub use dataset::JsonFileSource;
pub use gold::{GoldFileSink, GoldFileWriter};
pub use pipeline::{convert, convert_with_progress};
