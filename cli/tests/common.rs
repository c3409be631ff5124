//! # Assistants CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in `cli/tests/`
//! is compiled as its own test crate and runs the compiled `assistants` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// The expected output of the built-in scenario.
pub const DEFAULT_SCENARIO_OUTPUT: &str = "\
Hello, Alice! How can I help you today?
Response: Here's a Chill Vibes Playlist for you! | Confidence: 0.95 | Action: True
----------------------------------------
Hello, Bob! How can I help you today?
Response: Suggested workout: Strength Workout Routine. | Confidence: 0.9 | Action: True
----------------------------------------
Hello, Carol! How can I help you today?
Response: Scheduled a study session for history. | Confidence: 0.92 | Action: True
----------------------------------------
";

/// # Get Assistants Command (`assistants_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `assistants` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn assistants_cmd() -> Command {
    Command::cargo_bin("assistants").expect("Failed to find assistants binary for testing")
}

/// # Isolated Command (`isolated_cmd`)
///
/// Like `assistants_cmd`, but runs inside `dir` with the home and config
/// directories pointed at it, so no project or user scenario on the host
/// machine leaks into the test.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = assistants_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("ASSISTANTS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
