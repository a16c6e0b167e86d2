//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "dpr-gold";
const PROJECT_FILES: [&str; 2] = ["dpr-gold.toml", ".dpr-gold.toml"];
const ENV_PREFIX: &str = "DPR_GOLD_";
const ENV_KEYS: [&str; 2] = ["src_path", "gold_data_path"];

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `DPR_GOLD_SRC_PATH`, `DPR_GOLD_GOLD_DATA_PATH`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./dpr-gold.toml` or `./.dpr-gold.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/dpr-gold/config.toml`
    /// 5. Default values
    ///
    /// Command-line flags are applied on top by the caller.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigLoadError> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                files.push(global_path);
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }

        // An explicitly requested file must exist
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigLoadError::NotFound(path.to_path_buf()));
            }
            files.push(path.to_path_buf());
        }

        Self::figment(&files)
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
            .extract()
            .map_err(|e| ConfigLoadError::Invalid(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults followed by TOML files, later files winning
    fn figment(files: &[PathBuf]) -> Figment {
        files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/dpr-gold/config.toml` (or the platform
    /// equivalent), whether or not the file exists.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config sources being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        for key in ENV_KEYS {
            let var = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            if std::env::var_os(&var).is_some() {
                println!("  [SET  ] Env:     {}", var);
            } else {
                println!("  [     ] Env:     {}", var);
            }
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./dpr-gold.toml or ./.dpr-gold.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("dpr-gold"));
    }

    #[test]
    fn test_figment_without_files_yields_defaults() {
        let config: FileConfig = ConfigLoader::figment(&[]).extract().unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(
            &global,
            "src_path = \"global.json\"\ngold_data_path = \"global.tsv\"\n",
        )
        .unwrap();
        fs::write(&project, "gold_data_path = \"project.tsv\"\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(&[global, project])
            .extract()
            .unwrap();

        assert_eq!(config.src_path, Some(PathBuf::from("global.json")));
        assert_eq!(config.gold_data_path, Some(PathBuf::from("project.tsv")));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "src_path = [1, 2]\n").unwrap();

        let result = ConfigLoader::figment(&[path]).extract::<FileConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigLoadError::NotFound(_)));
    }

    /// Point the global config lookup into the jail so a real user config
    /// never leaks into a test.
    fn isolate_global_config(jail: &mut figment::Jail) {
        let config_home = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", config_home.display());
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "dpr-gold.toml",
                "src_path = \"project.json\"\ngold_data_path = \"project.tsv\"\n",
            )?;
            jail.set_env("DPR_GOLD_GOLD_DATA_PATH", "env.tsv");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config.src_path, Some(PathBuf::from("project.json")));
            assert_eq!(config.gold_data_path, Some(PathBuf::from("env.tsv")));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_config() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("custom.toml", "src_path = \"custom.json\"\n")?;
            jail.set_env("DPR_GOLD_SRC_PATH", "env.json");

            let config =
                ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;

            assert_eq!(config.src_path, Some(PathBuf::from("env.json")));
            assert!(config.gold_data_path.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_config_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                ".dpr-gold.toml",
                "src_path = \"project.json\"\ngold_data_path = \"project.tsv\"\n",
            )?;
            jail.create_file("custom.toml", "src_path = \"custom.json\"\n")?;

            let config =
                ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| e.to_string())?;

            assert_eq!(config.src_path, Some(PathBuf::from("custom.json")));
            assert_eq!(config.gold_data_path, Some(PathBuf::from("project.tsv")));
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_global_file() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            let global_dir = jail.directory().join("xdg").join(APP_DIR);
            fs::create_dir_all(&global_dir).map_err(|e| e.to_string())?;
            fs::write(
                global_dir.join("config.toml"),
                "src_path = \"global.json\"\ngold_data_path = \"global.tsv\"\n",
            )
            .map_err(|e| e.to_string())?;
            jail.create_file("dpr-gold.toml", "gold_data_path = \"project.tsv\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config.src_path, Some(PathBuf::from("global.json")));
            assert_eq!(config.gold_data_path, Some(PathBuf::from("project.tsv")));
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_env_vars_are_ignored() {
        figment::Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.set_env("DPR_GOLD_QUIET", "true");
            jail.set_env("DPR_GOLD_VERBOSE", "3");
            jail.set_env("DPR_GOLD_SRC", "[not, a, path]");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;

            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }
}
