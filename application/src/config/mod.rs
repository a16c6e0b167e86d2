//! Application configuration

pub mod convert_config;

pub use convert_config::{ConfigError, ConvertConfig, DEFAULT_SRC_PATH};
