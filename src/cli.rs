//! CLI argument parsing module for tsci-update

use clap::Parser;
use std::time::Duration;

/// Parse a positive number of seconds into a Duration
fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Self-update advisory for the tsci CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "tsci-update", version, about = "Self-update advisory for the tsci CLI")]
pub struct CliArgs {
    /// Package to check on the npm registry
    #[arg(long, default_value = "@tscircuit/cli")]
    pub package: String,

    /// Seconds to wait for the confirmation prompt
    #[arg(long, value_parser = parse_seconds, default_value = "5")]
    pub timeout: Duration,

    /// Answer yes without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress the spinner and informational output
    #[arg(short, long)]
    pub quiet: bool,
}
