//! Domain layer for dpr-gold
//!
//! This crate contains the records, the dataset aggregate, and the rules for
//! turning a record into a gold file line. It has no dependencies on file
//! I/O, configuration, or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Record**: one question/answer training example from a DPR biencoder file
//! - **Dataset**: the ordered, fully loaded sequence of records
//! - **Gold line**: `question \t answers \n`, where answers use literal notation

pub mod record;

// Re-export commonly used types
pub use record::{
    entities::{Dataset, DprRecord},
    gold_line::{FIELD_SEPARATOR, GoldLine, LINE_TERMINATOR},
    literal::{float_repr, render_answers, render_literal},
};
