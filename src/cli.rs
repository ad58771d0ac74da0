//! Command-line argument parsing for the portfolio terminal.
//!
//! Uses clap to parse CLI arguments.

use clap::Parser;
use std::path::PathBuf;

use folio_terminal::config::Config;
use folio_terminal::repl::OutputFormat;

/// A slash-command terminal for exploring a portfolio.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run the given input and exit (repeatable, e.g. -e /help -e "/skills rust")
    #[arg(short = 'e', long = "exec", value_name = "INPUT")]
    pub exec: Vec<String>,

    /// Path to a file with one input per line
    #[arg(long, value_name = "PATH", conflicts_with = "exec")]
    pub script: Option<PathBuf>,

    /// Print how each input is classified instead of running it
    #[arg(long)]
    pub parse_only: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Write logs to a file in the state directory even when not interactive
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.output.parse()
    }

    /// Returns true when inputs come from arguments or a script rather than a person.
    pub fn is_scripted(&self) -> bool {
        !self.exec.is_empty() || self.script.is_some()
    }

    /// Returns true when a person is typing at the prompt.
    pub fn is_interactive(&self, stdin_is_terminal: bool) -> bool {
        stdin_is_terminal && !self.is_scripted()
    }

    /// Returns true if logs should go to a file rather than stderr.
    pub fn wants_file_logging(&self, stdin_is_terminal: bool) -> bool {
        self.log_file || self.is_interactive(stdin_is_terminal)
    }
}
