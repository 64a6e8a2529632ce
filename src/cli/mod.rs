//! Command-line interface.
//!
//! With no subcommand the TUI starts. The subcommands work on the stored
//! preferences without touching the terminal.

mod common;
pub mod completions;
pub mod theme;

pub use common::*;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;

/// A terminal signup desk for event sponsors, volunteers and organizers
#[derive(Parser, Debug)]
#[command(
    name = "rolecall",
    version,
    about = "A terminal signup desk for event sponsors, volunteers and organizers",
    long_about = None,
    disable_help_subcommand = true,
    after_help = indoc! {"
        Examples:
          rolecall                 Start the signup desk
          rolecall theme dark      Store a dark theme preference
          rolecall theme reset     Go back to following the terminal
    "}
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the active theme
    Show,
    /// Store the dark theme
    Dark,
    /// Store the light theme
    Light,
    /// Flip the stored theme
    Toggle,
    /// Forget the stored theme and follow the terminal again
    Reset,
}

impl Cli {
    /// Whether the TUI should start
    pub fn runs_tui(&self) -> bool {
        self.command.is_none()
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Theme { action }) => theme::execute(action),
            Some(Commands::Completions { shell }) => completions::generate(shell),
            None => Ok(()),
        }
    }
}
