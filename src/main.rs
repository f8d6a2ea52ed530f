//! dyntest CLI entry point
//!
//! Runs dynamically generated test suites and browser helpers from the
//! command line.

use clap::Parser;
use dyntest::cli;
use dyntest::commands::Commands;
use dyntest::common::config::Config;
use dyntest::common::logging;

#[derive(Parser)]
#[command(name = "dyntest", about = "Runtime-generated test cases")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Suite runs also log to a per-suite file; hold the guard so buffered
    // lines flush on exit.
    let _guard = match &cli.command {
        Commands::Run { suite, .. } => {
            let log_dir = Config::load()
                .ok()
                .and_then(|c| c.output.log_dir);
            logging::init_run_log(suite, log_dir.as_deref())
        }
        _ => {
            logging::init_cli();
            None
        }
    };

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
