//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for dpr-gold
#[derive(Parser, Debug)]
#[command(name = "dpr-gold")]
#[command(author, version, about = "Convert DPR training data into a tab-separated gold file")]
#[command(long_about = r#"
Reads DPR biencoder training data (a JSON array of records) and writes one
line per record: the question, a tab, and the record's answers.

Configuration is loaded from (in priority order):
1. Command-line flags
2. DPR_GOLD_SRC_PATH / DPR_GOLD_GOLD_DATA_PATH
3. --config <path>     Explicit config file
4. ./dpr-gold.toml     Project-level config
5. ~/.config/dpr-gold/config.toml   Global config

Example:
  dpr-gold --src_path biencoder-nq-dev.json --gold_data_path gold_data/nq-dev.tsv
"#)]
pub struct Cli {
    /// Path to raw DPR training data [default: biencoder-nq-dev.json]
    #[arg(long = "src_path", visible_alias = "src-path", value_name = "PATH")]
    pub src_path: Option<PathBuf>,

    /// Where to store the parsed gold data file
    #[arg(long = "gold_data_path", visible_alias = "gold-data-path", value_name = "PATH")]
    pub gold_data_path: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress bar and summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment variables
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,
}
