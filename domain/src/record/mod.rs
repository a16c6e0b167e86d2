//! QA training records and their gold file rendering

pub mod entities;
pub mod gold_line;
pub mod literal;
