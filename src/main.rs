//! tsci-update - Self-update advisory for the tsci CLI
//!
//! Checks the npm registry for a newer published version of the CLI,
//! asks for confirmation with a bounded wait, and runs the package
//! manager's global install on an affirmative answer.

use clap::Parser;
use std::process::ExitCode;
use tsci_update::checker::{UpdateChecker, UpdateDecision};
use tsci_update::cli::CliArgs;
use tsci_update::prompt::{Confirmer, TerminalPrompt};

/// Confirmer that always answers yes (for --yes)
struct AlwaysYes;

#[async_trait::async_trait]
impl Confirmer for AlwaysYes {
    async fn confirm(&self, _question: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic.
///
/// An unavailable registry or a failed install is reported but never turned
/// into a non-zero exit: the update is advisory.
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AlwaysYes)
    } else {
        Box::new(TerminalPrompt::with_timeout(args.timeout))
    };

    let checker = UpdateChecker::new()?
        .with_package(&args.package)
        .with_confirmer(confirmer)
        .with_quiet(args.quiet);

    match checker.run_for_decision().await {
        UpdateDecision::SkippedByEnvironment => {
            if !args.quiet {
                println!("Update check skipped by environment.");
            }
        }
        UpdateDecision::CheckFailed | UpdateDecision::NoUpdateAvailable => {
            if !args.quiet {
                println!("No update available.");
            }
        }
        UpdateDecision::UpdateAvailable { .. } => {}
    }

    Ok(())
}
