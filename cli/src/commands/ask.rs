//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Implements `assistants ask`, a one-off exchange: the profile and assistant
//! kind come from flags, the request text from the trailing arguments.
//!
//! ```bash
//! assistants ask --assistant music --name Alice --age 25 --pref mood=chill Play a song
//! ```
//!
//! Output has the same three-line shape as a `simulate` session.
//!
use super::simulate::render_exchange;
use crate::assistant::{Assistant, AssistantKind, Request, UserProfile};
use crate::core::error::{AssistantError, Result};
use anyhow::Context;
use clap::Parser;
use std::collections::HashMap;
use tracing::warn;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Assistant kind: general, music, fitness or study.
    #[arg(short, long, default_value = "general")]
    pub assistant: AssistantKind,

    /// Name of the user asking.
    #[arg(short, long)]
    pub name: String,

    /// Age of the user asking. Must be positive.
    #[arg(long, allow_negative_numbers = true)]
    pub age: i64,

    /// Profile preference as KEY=VALUE (e.g. mood=chill). Repeatable.
    #[arg(short, long = "pref", value_name = "KEY=VALUE")]
    pub prefs: Vec<String>,

    /// Mark the user as a premium subscriber.
    #[arg(long)]
    pub premium: bool,

    /// The request text.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub fn handle_ask(args: AskArgs) -> Result<()> {
    let preferences = parse_preferences(&args.prefs)?;
    let profile = UserProfile::new(args.name, args.age, preferences, args.premium)
        .context("Failed to build user profile")?;
    let assistant = Assistant::new(args.assistant, profile);
    let request = Request::classified(args.text.join(" "));
    print!("{}", render_exchange(&assistant, &request)?);
    Ok(())
}

/// Parses `KEY=VALUE` pairs. The first `=` splits; later ones belong to the value.
/// A repeated key keeps its last value.
fn parse_preferences(raw: &[String]) -> std::result::Result<HashMap<String, String>, AssistantError> {
    let mut preferences = HashMap::with_capacity(raw.len());
    for pair in raw {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AssistantError::InvalidPreference(pair.clone()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AssistantError::InvalidPreference(pair.clone()));
        }
        if preferences
            .insert(key.to_string(), value.trim().to_string())
            .is_some()
        {
            warn!("Preference '{}' given more than once, keeping the last value.", key);
        }
    }
    Ok(preferences)
}
