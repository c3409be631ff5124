//! # Assistants Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the assistants
//! application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AssistantError`: A custom error enum using `thiserror` for specific failures
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so call sites can attach context
//!
//! The error types cover:
//! - Record validation (profiles and responses that break their invariants)
//! - Scenario configuration errors
//! - Bad command-line input (unknown assistant kinds, malformed preferences)
//!
//! ## Examples
//!
//! ```ignore
//! // Reject a record at construction time
//! if age <= 0 {
//!     return Err(AssistantError::validation("age", format!("must be positive, got {}", age)));
//! }
//!
//! // Detect a validation failure after it has been wrapped by anyhow
//! match result {
//!     Err(e) if e.downcast_ref::<AssistantError>().map_or(false, AssistantError::is_validation) => {
//!         eprintln!("Invalid record: {}", e);
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the assistants application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// A record failed its construction-time invariant check.
    #[error("Validation error: {field} {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown assistant kind '{0}'. Expected one of: general, music, fitness, study.")]
    UnknownAssistant(String),

    #[error("Invalid preference '{0}'. Expected KEY=VALUE.")]
    InvalidPreference(String),
}

impl AssistantError {
    /// Shorthand for building a `Validation` error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
