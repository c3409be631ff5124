//! # Requests and Responses
//!
//! File: cli/src/assistant/request.rs
//!
//! ## Overview
//!
//! `Request` is one piece of user input together with the time it arrived and
//! its classified `Category`. `Response` is what an assistant hands back: a
//! message, a confidence score in `[0.0, 1.0]` and whether an action was taken.
//! Both are immutable once built.
//!
use super::category::{self, Category};
use crate::core::error::AssistantError;
use chrono::{DateTime, Local};
use std::fmt;

/// A single user request, consumed by one assistant call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    input: String,
    timestamp: DateTime<Local>,
    category: Category,
}

impl Request {
    pub fn new(input: impl Into<String>, timestamp: DateTime<Local>, category: Category) -> Self {
        Self {
            input: input.into(),
            timestamp,
            category,
        }
    }

    /// Builds a request stamped with the current time, classifying `input`.
    pub fn classified(input: impl Into<String>) -> Self {
        let input = input.into();
        let category = category::classify(&input);
        Self::new(input, Local::now(), category)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// A confidence score guaranteed to lie in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// # Errors
    ///
    /// Returns `AssistantError::Validation` when `value` is NaN or outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, AssistantError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AssistantError::validation(
                "confidence",
                format!("must be within [0.0, 1.0], got {}", value),
            ))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of handling a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    message: String,
    confidence: Confidence,
    action_performed: bool,
}

impl Response {
    /// Creates a validated response.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Validation` if `confidence` is outside `[0.0, 1.0]`.
    pub fn new(
        message: impl Into<String>,
        confidence: f64,
        action_performed: bool,
    ) -> Result<Self, AssistantError> {
        Ok(Self {
            message: message.into(),
            confidence: Confidence::new(confidence)?,
            action_performed,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn confidence(&self) -> f64 {
        self.confidence.value()
    }

    pub fn action_performed(&self) -> bool {
        self.action_performed
    }
}

/// Renders the `Response: ... | Confidence: ... | Action: ...` report line.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Response: {} | Confidence: {} | Action: {}",
            self.message,
            self.confidence,
            if self.action_performed { "True" } else { "False" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_request() {
        let request = Request::classified("Play me some music");
        assert_eq!(request.input(), "Play me some music");
        assert_eq!(request.category(), Category::Music);
        assert!(request.timestamp() <= Local::now());
    }

    #[test]
    fn test_explicit_request_keeps_given_category() {
        let now = Local::now();
        let request = Request::new("anything", now, Category::Study);
        assert_eq!(request.category(), Category::Study);
        assert_eq!(request.timestamp(), now);
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(1.0).is_ok());
        assert!(Confidence::new(-0.01).unwrap_err().is_validation());
        assert!(Confidence::new(1.01).unwrap_err().is_validation());
        assert!(Confidence::new(f64::NAN).is_err());
    }

    #[test]
    fn test_response_rejects_out_of_range_confidence() {
        let err = Response::new("too sure", 1.5, true).unwrap_err();
        assert!(err.to_string().contains("confidence"));
    }

    #[test]
    fn test_response_line_format() {
        let response = Response::new("Sorry, I can't handle that request.", 0.5, false).unwrap();
        assert_eq!(
            response.to_string(),
            "Response: Sorry, I can't handle that request. | Confidence: 0.5 | Action: False"
        );

        let response = Response::new("Done.", 0.9, true).unwrap();
        assert_eq!(
            response.to_string(),
            "Response: Done. | Confidence: 0.9 | Action: True"
        );
    }
}
