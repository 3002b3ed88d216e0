use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "github-analytics")]
#[command(version, about = "Profile and head-to-head analytics for GitHub accounts")]
pub struct Cli {
    /// What to render.
    #[command(subcommand)]
    pub command: Command,
}

/// The two dashboard actions.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Analyze a single account
    Analyze {
        /// GitHub username
        handle: String,
        /// Write the HTML page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare two accounts head to head
    Compare {
        /// First GitHub username
        handle_a: String,
        /// Second GitHub username
        handle_b: String,
        /// Write the HTML page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Where the page should be written, `None` for stdout.
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            Command::Analyze { output, .. } | Command::Compare { output, .. } => output.as_ref(),
        }
    }
}
