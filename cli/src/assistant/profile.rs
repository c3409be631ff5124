//! # User Profiles
//!
//! File: cli/src/assistant/profile.rs
//!
//! ## Overview
//!
//! A `UserProfile` is the static description of a simulated user: a name, an
//! age, free-form string preferences and a premium flag. Profiles are
//! validated when built and cannot be changed afterwards; the assistant that
//! wraps a profile owns it for its whole lifetime.
//!
use crate::core::error::AssistantError;
use std::collections::HashMap;

/// Static description of a simulated user and their preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    name: String,
    age: i64,
    preferences: HashMap<String, String>,
    is_premium: bool,
}

impl UserProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Validation` if `name` is empty or `age` is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        age: i64,
        preferences: HashMap<String, String>,
        is_premium: bool,
    ) -> Result<Self, AssistantError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AssistantError::validation("name", "must not be empty"));
        }
        if age <= 0 {
            return Err(AssistantError::validation(
                "age",
                format!("must be a positive integer, got {}", age),
            ));
        }
        Ok(Self {
            name,
            age,
            preferences,
            is_premium,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn preferences(&self) -> &HashMap<String, String> {
        &self.preferences
    }

    /// Looks up a preference, falling back to `default` when the key is absent.
    pub fn preference<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.preferences
            .get(key)
            .map(String::as_str)
            .unwrap_or(default)
    }
}
