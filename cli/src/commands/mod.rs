//! # Assistants Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each top-level subcommand lives in its own module and exposes an `Args`
//! struct plus a `handle_*` function that `main.rs` dispatches to:
//!
//! - `simulate`: plays through the configured scenario (the default command)
//! - `classify`: prints the category a piece of text maps to
//! - `ask`: runs one request against a one-off assistant and profile
//!
//! Handlers print to stdout; logging goes to stderr through `tracing`.
//!

/// Runs a single request against an assistant built from command-line flags.
pub mod ask;
/// Prints the category for free text.
pub mod classify;
/// Plays through a scenario of sessions.
pub mod simulate;
