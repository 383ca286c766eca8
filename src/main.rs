// Demo: hold a sleep inhibition until the user types the release key.

#![deny(unsafe_code)]

use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use inhibit_sleep::{config::Settings, platform, BackendKind, HostOs, SleepInhibitor};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "inhibit-sleep", version, about = "Keep this machine awake until you say so")]
struct Cli {
    /// JSON settings file.
    #[arg(long, env = "INHIBIT_SLEEP_CONFIG")]
    config: Option<PathBuf>,

    /// Label for the inhibition (overrides the settings file).
    #[arg(long)]
    name: Option<String>,

    /// Print which backends this host supports, as JSON, and exit.
    #[arg(long)]
    probe: bool,
}

#[derive(Serialize)]
struct CapabilityReport {
    host: HostOs,
    selected: BackendKind,
    supported: Vec<BackendKind>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.probe {
        let host = HostOs::current();
        let report = CapabilityReport {
            host,
            selected: BackendKind::select(host),
            supported: BackendKind::PRIORITY
                .into_iter()
                .filter(|&k| platform::is_supported(k))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(name) = cli.name {
        settings.identifier = name;
    }

    println!("Starting inhibit-sleep demo");
    let mut inhibitor = SleepInhibitor::new(&settings.identifier);
    info!(backend = %inhibitor.kind(), identifier = %settings.identifier, "requesting inhibition");
    inhibitor.inhibit()?;

    println!("Sleep inhibition requested");
    println!("Type {} and press Enter to release the inhibition", settings.release_key);
    wait_for_key(io::stdin().lock(), settings.release_key)?;

    println!("Releasing inhibition");
    inhibitor.release();
    println!("Released inhibition");
    Ok(())
}

/// Block until a line starting with `key` (any case) arrives, or input ends.
fn wait_for_key(input: impl BufRead, key: char) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let first = line.trim_start().chars().next();
        if first.is_some_and(|c| c.eq_ignore_ascii_case(&key)) {
            return Ok(());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_stops_at_release_key() {
        let mut input = io::Cursor::new("x\n  C then more\nnever read\n");
        wait_for_key(&mut input, 'c').expect("wait");

        let mut rest = String::new();
        io::Read::read_to_string(&mut input, &mut rest).expect("read rest");
        assert_eq!(rest, "never read\n");
    }

    #[test]
    fn wait_returns_on_eof() {
        wait_for_key(io::Cursor::new(""), 'c').expect("wait");
    }

    #[test]
    fn cli_parses_name_and_probe() {
        let cli = Cli::parse_from(["inhibit-sleep", "--name", "Render", "--probe"]);
        assert_eq!(cli.name.as_deref(), Some("Render"));
        assert!(cli.probe);
    }
}
