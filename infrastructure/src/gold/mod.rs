//! Gold file sinks

mod text_file;

pub use text_file::{GoldFileSink, GoldFileWriter};
