use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::i18n::Locale;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pr-check")]
#[command(author, version, about = "Validate pull-request metadata and print a check report")]
#[command(long_about = "Checks a pull request's title format, changed-line count and file types.\n\n\
    Run without a subcommand to print the report for a built-in example PR.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Check failures found (or warnings with --strict)\n  \
    2 - Configuration, input or runtime error")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report on stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a pull request and print the report
    Check(CheckArgs),

    /// Print the report for the built-in example pull request
    Demo(DemoArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// JSON file describing the PR, or `-` to read it from stdin
    #[arg(conflicts_with_all = ["number", "title", "additions", "deletions", "files"])]
    pub input: Option<PathBuf>,

    /// PR number (when describing the PR with flags)
    #[arg(long)]
    pub number: Option<u64>,

    /// PR title
    #[arg(long)]
    pub title: Option<String>,

    /// Added lines
    #[arg(long, allow_negative_numbers = true)]
    pub additions: Option<i64>,

    /// Deleted lines
    #[arg(long, allow_negative_numbers = true)]
    pub deletions: Option<i64>,

    /// Changed file (can be specified multiple times)
    #[arg(long = "file")]
    pub files: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Changed-line threshold (overrides config)
    #[arg(long)]
    pub max_changes: Option<u64>,

    /// Message language [possible values: en, zh-CN]
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Only report, never fail
    #[arg(long, conflicts_with = "strict")]
    pub warn_only: bool,
}

impl CheckArgs {
    /// Whether any of the per-field PR flags was given.
    #[must_use]
    pub fn has_inline_pr(&self) -> bool {
        self.number.is_some()
            || self.title.is_some()
            || self.additions.is_some()
            || self.deletions.is_some()
            || !self.files.is_empty()
    }
}

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Message language [possible values: en, zh-CN]
    #[arg(long, default_value = "en")]
    pub locale: Locale,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            locale: Locale::En,
        }
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".pr-check.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".pr-check.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
