//! Presentation layer for dpr-gold
//!
//! This crate contains the CLI definition, the progress reporter, and the
//! console summary formatter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
