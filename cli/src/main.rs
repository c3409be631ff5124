//! # Assistants Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `assistants` CLI, a keyword-routed assistant simulator.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The domain, configuration and command handlers live in the library half of
//! the crate (`lib.rs`); this file only wires them to the command line.
//!
//! Running without a subcommand is the same as `assistants simulate`.
//!
//! ## Examples
//!
//! ```bash
//! # Play the default (or discovered) scenario
//! assistants
//!
//! # Classify some text, with debug logging on stderr
//! assistants -vv classify "any good workout songs?"
//! ```
//!
use assistants::commands;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "assistants",
    about = "Keyword-routed assistant simulator",
    long_about = "Classifies free-text requests as music, fitness or study and answers\n\
                  them with the matching assistant's canned response.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Options for the implicit `simulate` run when no subcommand is given.
    #[command(flatten)]
    simulate: commands::simulate::SimulateArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play through the scenario of simulated users.
    #[command(alias = "s")]
    Simulate(commands::simulate::SimulateArgs),
    /// Print the category a piece of text is classified as.
    #[command(alias = "c")]
    Classify(commands::classify::ClassifyArgs),
    /// Send one request to a one-off assistant.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Simulate(args)) => commands::simulate::handle_simulate(args),
        Some(Commands::Classify(args)) => commands::classify::handle_classify(args),
        Some(Commands::Ask(args)) => commands::ask::handle_ask(args),
        None => commands::simulate::handle_simulate(cli.simulate),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses_as_simulate() {
        let cli = Cli::try_parse_from(["assistants", "--config", "x.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(
            cli.simulate.config.as_deref(),
            Some(std::path::Path::new("x.toml"))
        );
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["assistants", "-vv", "classify", "hi"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Classify(_))));
    }
}
