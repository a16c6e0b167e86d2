//! Configuration loading for dpr-gold
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Command-line flags (applied by the binary)
//! 2. `DPR_GOLD_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./dpr-gold.toml` or `./.dpr-gold.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/dpr-gold/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::FileConfig;
pub use loader::{ConfigLoadError, ConfigLoader};
