//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `update`: scan the codebase and reconcile locale files
//! - `init`: initialize a holepunch configuration file

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
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale files directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Comma-separated language codes to update or create, or 'all' to
    /// update every locale file that already exists
    pub locales: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the codebase for localization strings and reconstruct the locale
    /// files with them: unused strings are removed, untranslated strings are
    /// set to null
    Update(UpdateCommand),
    /// Initialize a new .holepunchrc.json configuration file
    Init,
}
