//! File-to-file conversion entry points
//!
//! Wires [`JsonFileSource`] and [`GoldFileSink`] from a [`ConvertConfig`]
//! into the [`ConvertUseCase`].

use crate::dataset::JsonFileSource;
use crate::gold::GoldFileSink;
use dpr_gold_application::{
    ConvertConfig, ConvertError, ConvertOutput, ConvertProgressNotifier, ConvertUseCase,
    NoProgress,
};

/// Convert `config.src_path` into a gold file at `config.gold_data_path`
pub fn convert(config: &ConvertConfig) -> Result<ConvertOutput, ConvertError> {
    convert_with_progress(config, &NoProgress)
}

/// Same as [`convert`], reporting progress along the way
pub fn convert_with_progress(
    config: &ConvertConfig,
    progress: &dyn ConvertProgressNotifier,
) -> Result<ConvertOutput, ConvertError> {
    let use_case = ConvertUseCase::new(
        JsonFileSource::new(&config.src_path),
        GoldFileSink::new(&config.gold_data_path),
    );
    use_case.execute_with_progress(progress)
}
