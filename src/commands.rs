//! CLI command definitions
//!
//! Defines the clap commands for the dyntest CLI.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a built-in sample suite
    Run {
        /// Suite name (see 'dyntest list')
        suite: String,

        /// Print every case, not only failures
        #[arg(long, short)]
        verbose: bool,

        /// Output the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available suites
    List,

    /// Open a page in a browser session and save a screenshot
    Capture {
        /// URL to open
        url: String,
    },

    /// Show where run logs are written
    Logs,
}
