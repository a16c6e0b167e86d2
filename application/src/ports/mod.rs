//! Ports (interfaces) implemented by outer layers

pub mod dataset_source;
pub mod gold_sink;
pub mod progress;
