//! Raw configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! of the `DPR_GOLD_*` environment variables.

use dpr_gold_application::{ConfigError, ConvertConfig, DEFAULT_SRC_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as merged from every source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// DPR biencoder JSON file to read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_path: Option<PathBuf>,
    /// Gold text file to write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_data_path: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            src_path: Some(PathBuf::from(DEFAULT_SRC_PATH)),
            gold_data_path: None,
        }
    }
}

impl FileConfig {
    /// Apply command-line values on top of this config
    pub fn with_overrides(
        mut self,
        src_path: Option<PathBuf>,
        gold_data_path: Option<PathBuf>,
    ) -> Self {
        if src_path.is_some() {
            self.src_path = src_path;
        }
        if gold_data_path.is_some() {
            self.gold_data_path = gold_data_path;
        }
        self
    }

    /// Turn the merged values into a run configuration
    pub fn into_convert_config(self) -> Result<ConvertConfig, ConfigError> {
        ConvertConfig::resolve(self.src_path, self.gold_data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.src_path, Some(PathBuf::from("biencoder-nq-dev.json")));
        assert!(config.gold_data_path.is_none());
    }

    #[test]
    fn test_deserialize_toml() {
        let toml_str = r#"
src_path = "data/biencoder-nq-train.json"
gold_data_path = "data/gold/nq-train.tsv"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.src_path,
            Some(PathBuf::from("data/biencoder-nq-train.json"))
        );
        assert_eq!(
            config.gold_data_path,
            Some(PathBuf::from("data/gold/nq-train.tsv"))
        );
    }

    #[test]
    fn test_deserialize_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(r#"gold_data_path = "gold.tsv""#).unwrap();
        assert_eq!(config.src_path, Some(PathBuf::from(DEFAULT_SRC_PATH)));
        assert_eq!(config.gold_data_path, Some(PathBuf::from("gold.tsv")));
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let config = FileConfig::default().with_overrides(None, Some("gold.tsv".into()));
        assert_eq!(config.src_path, Some(PathBuf::from(DEFAULT_SRC_PATH)));
        assert_eq!(config.gold_data_path, Some(PathBuf::from("gold.tsv")));

        let config = config.with_overrides(Some("train.json".into()), None);
        assert_eq!(config.src_path, Some(PathBuf::from("train.json")));
        assert_eq!(config.gold_data_path, Some(PathBuf::from("gold.tsv")));
    }

    #[test]
    fn test_into_convert_config_requires_gold_path() {
        assert_eq!(
            FileConfig::default().into_convert_config(),
            Err(ConfigError::MissingGoldDataPath)
        );
    }
}
