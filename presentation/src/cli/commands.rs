//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wcs_domain::ReportStyle;

/// Report style flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StyleArg {
    /// Human readable text
    Text,
    /// JSON output
    Json,
}

impl From<StyleArg> for ReportStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Text => ReportStyle::Text,
            StyleArg::Json => ReportStyle::Json,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every output format the available delegates can produce
    Formats,

    /// Find the delegate for an output format
    Resolve {
        /// Format name or MIME type (e.g., "GeoTIFF", "image/png")
        format: String,
    },

    /// List all registered delegates, including unavailable ones
    Delegates,
}

/// CLI arguments for wcs-delegates
#[derive(Parser, Debug)]
#[command(name = "wcs-delegates")]
#[command(author, version, about = "Resolve coverage output-format delegates")]
#[command(long_about = r#"
wcs-delegates locates the encoder ("delegate") able to write coverage
responses in a requested output format, among built-in delegates and
plugin delegates declared by manifests in a plugin directory.

Configuration files are loaded from (in priority order):
1. WCS_DELEGATES_<SECTION>__<KEY>          Environment
2. --config <path>                         Explicit config file
3. ./wcs-delegates.toml                    Project-level config
4. ~/.config/wcs-delegates/config.toml     Global config

Example:
  wcs-delegates formats
  wcs-delegates resolve image/png
  wcs-delegates --plugin-dir ./plugins -o json delegates
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Report style (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<StyleArg>,

    /// Directory holding plugin manifests (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub plugin_dir: Option<PathBuf>,

    /// Hide a delegate by id (can be specified multiple times)
    #[arg(long, value_name = "ID")]
    pub disable: Vec<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
