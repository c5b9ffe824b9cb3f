//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Durable form for the aggregated results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PersistFormat {
    /// Structured JSON data
    Json,
    /// Self-contained styled HTML report
    Report,
}

/// CLI arguments for docquery
#[derive(Parser, Debug)]
#[command(name = "docquery")]
#[command(version, about = "Query a document against a set of remote text-inference models")]
#[command(long_about = r#"
docquery extracts the plain text of an HTML or PDF document and dispatches
it to every configured remote inference model, aggregating each model's
response (or failure) into a single result set written as JSON or as a
styled HTML report.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./docquery.toml       Project-level config
3. ~/.config/docquery/config.toml   Global config

Example:
  docquery article.html results.html
  docquery --format json report.pdf results.json
  docquery --serve --port 5000
"#)]
pub struct Cli {
    /// Input document (.html, .htm or .pdf)
    #[arg(value_name = "INPUT", required_unless_present = "serve")]
    pub input: Option<PathBuf>,

    /// Destination file for the aggregated results
    #[arg(value_name = "OUTPUT", required_unless_present = "serve")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    pub format: PersistFormat,

    /// Question for question-context models (overrides their fixed question)
    #[arg(long, value_name = "TEXT")]
    pub question: Option<String>,

    /// Run the single-model HTTP front end instead of a batch run
    #[arg(long)]
    pub serve: bool,

    /// Port for --serve
    #[arg(long, default_value_t = 5000, value_name = "PORT")]
    pub port: u16,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and the console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
