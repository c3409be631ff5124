//! # Assistants Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! The library half of the `assistants` crate. `main.rs` only parses arguments,
//! sets up logging and dispatches; everything it calls lives here, where the
//! integration tests in `cli/tests/` can also reach it as `assistants::...`.
//!
//! - `assistant`: the domain (classification, profiles, dispatch)
//! - `core`: configuration and error types
//! - `commands`: one module per subcommand
//!
pub mod assistant;
pub mod commands;
pub mod core;
