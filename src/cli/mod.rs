//! CLI command handling
//!
//! Dispatches CLI commands and formats output.

use colored::Colorize;

use crate::browser::Session;
use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::runner::{ConsoleListener, RunSummary, Runner, TestCaseGenerator, TraceListener};
use crate::samples::{self, FizzBuzz, FizzBuzzGrouped};

/// Number of cases the sample FizzBuzz suites generate
const SAMPLE_SUITE_MAX: u32 = 1000;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            suite,
            verbose,
            json,
        } => {
            let summary = run_suite(&suite, verbose)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }

            if summary.all_passed() {
                Ok(())
            } else {
                Err(Error::SuiteFailed {
                    suite: summary.suite,
                    failed: summary.failed,
                    total: summary.total,
                })
            }
        }

        Commands::List => {
            println!("Available suites:");
            for suite in samples::SUITES {
                println!("  {suite}");
            }
            Ok(())
        }

        Commands::Capture { url } => {
            let config = Config::load()?;
            let session = Session::open(&config).await?;

            let result = capture(&session, &url).await;
            // Always close the browser, even when the capture failed
            let quit_result = session.quit().await;
            result?;
            quit_result
        }

        Commands::Logs => {
            match paths::log_dir() {
                Some(dir) => println!("{}", dir.display()),
                None => println!("No log directory available on this platform"),
            }
            Ok(())
        }
    }
}

async fn capture(session: &Session, url: &str) -> Result<()> {
    session.goto(url).await?;
    let path = session.save_screenshot().await?;
    println!("Saved screenshot: {}", path.display());
    Ok(())
}

/// Run one of the built-in suites by name
pub fn run_suite(name: &str, verbose: bool) -> Result<RunSummary> {
    match name {
        "fizzbuzz" => execute(FizzBuzz::new(SAMPLE_SUITE_MAX), verbose),
        "fizzbuzz-grouped" => execute(FizzBuzzGrouped::new(SAMPLE_SUITE_MAX), verbose),
        other => Err(Error::UnknownSuite(other.to_string())),
    }
}

fn execute<G: TestCaseGenerator>(generator: G, verbose: bool) -> Result<RunSummary> {
    Runner::new(generator)
        .with_listener(ConsoleListener::new(verbose))
        .with_listener(TraceListener)
        .run()
}

fn print_summary(summary: &RunSummary) {
    if summary.all_passed() {
        println!(
            "\n{} {} ({} cases)\n",
            "✓".green().bold(),
            "Suite Passed".green().bold(),
            summary.total
        );
    } else {
        println!(
            "\n{} {} ({} of {} cases failed)\n",
            "✗".red().bold(),
            "Suite Failed".red().bold(),
            summary.failed,
            summary.total
        );
    }
}
