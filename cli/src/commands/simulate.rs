//! # Simulate Command
//!
//! File: cli/src/commands/simulate.rs
//!
//! ## Overview
//!
//! Implements `assistants simulate`, the default command. For every session in
//! the scenario it builds the profile and the assistant serving it, classifies
//! the session input into a request, and prints the exchange:
//!
//! ```text
//! Hello, Alice! How can I help you today?
//! Response: Here's a Chill Vibes Playlist for you! | Confidence: 0.95 | Action: True
//! ----------------------------------------
//! ```
//!
//! ## Architecture
//!
//! 1. Load the sessions via `core::config::load_sessions` (explicit path, project
//!    file, user file, or the built-in default). Every assistant is built there,
//!    so an invalid profile aborts before any output.
//! 2. Handle each request in order and print its exchange.
//!
use crate::assistant::{Assistant, Request};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Width of the dashed line printed after each exchange.
const SEPARATOR_WIDTH: usize = 40;

#[derive(Parser, Debug, Default)]
pub struct SimulateArgs {
    /// Scenario file to play instead of the discovered or built-in one.
    #[arg(short, long, env = "ASSISTANTS_CONFIG")]
    pub config: Option<PathBuf>,
}

pub fn handle_simulate(args: SimulateArgs) -> Result<()> {
    let sessions = config::load_sessions(args.config.as_deref())
        .context("Failed to load simulation scenario")?;
    info!("Simulating {} session(s)", sessions.len());

    for session in &sessions {
        let request = Request::classified(session.input.as_str());
        print!("{}", render_exchange(&session.assistant, &request)?);
    }
    Ok(())
}

/// Formats the greeting, response line and separator for one request.
pub fn render_exchange(assistant: &Assistant, request: &Request) -> Result<String> {
    let profile = assistant.profile();
    debug!(
        "{} (age {}, premium: {}, {} preference(s)) -> {} assistant, {:?} classified as {} at {}",
        profile.name(),
        profile.age(),
        profile.is_premium(),
        profile.preferences().len(),
        assistant.kind(),
        request.input(),
        request.category(),
        request.timestamp().to_rfc3339(),
    );
    let response = assistant
        .handle_request(request)
        .with_context(|| format!("Failed to answer {:?}", request.input()))?;
    Ok(format!(
        "{}\n{}\n{}\n",
        assistant.greet(),
        response,
        "-".repeat(SEPARATOR_WIDTH)
    ))
}
