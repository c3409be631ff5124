//! # Assistants Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the command modules:
//! - `config`: scenario discovery, loading and validation
//! - `error`: the `AssistantError` enum and the crate-wide `Result` alias
//!
//! ```ignore
//! use crate::core::config;
//! use crate::core::error::{AssistantError, Result};
//! ```
//!
pub mod config;
pub mod error;
