//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Regenerate the translation template
//! - `check`: Report whether the template on disk is up to date
//! - `init`: Initialize potgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `extract` and `check`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Repository root to scan
    #[arg(long, env = "POTGEN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Template path, relative to the root (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append line numbers to source references
    #[arg(long = "with-line-nb", visible_alias = "line-numbers")]
    pub line_numbers: bool,

    /// Write every string and reference on a single line
    #[arg(long)]
    pub no_wrap: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the source tree and write the translation template
    Extract(ExtractCommand),
    /// Fail if the translation template on disk is out of date
    Check(CheckCommand),
    /// Initialize a new .potgenrc.json configuration file
    Init,
}
