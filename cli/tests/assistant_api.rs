//! # Assistants Library Integration Tests
//!
//! File: cli/tests/assistant_api.rs
//!
//! ## Overview
//!
//! Exercises the public library API (`assistants::assistant`) the way the
//! command handlers use it: build a profile, wrap it in an assistant, answer a
//! classified request.
//!

use assistants::assistant::{Assistant, AssistantKind, Category, Request, Response, UserProfile};
use std::collections::HashMap;

fn profile(pairs: &[(&str, &str)]) -> UserProfile {
    let prefs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    UserProfile::new("Alice", 25, prefs, true).expect("valid profile")
}

#[test]
fn test_music_request_title_cases_uncased_boundaries() {
    let assistant = Assistant::new(AssistantKind::Music, profile(&[("mood", "中a chill")]));
    let request = Request::classified("Play me some music");
    assert_eq!(request.category(), Category::Music);

    let response = assistant.handle_request(&request).expect("response should build");
    assert_eq!(response.message(), "Here's a 中A Chill Vibes Playlist for you!");
    assert_eq!(response.confidence(), 0.95);
    assert!(response.action_performed());
}

#[test]
fn test_fitness_goal_uses_titlecase_digraph() {
    let assistant = Assistant::new(
        AssistantKind::Fitness,
        profile(&[("fitness_goal", "ǆango drills")]),
    );
    let response = assistant
        .handle_request(&Request::classified("Suggest a workout"))
        .unwrap();
    assert_eq!(
        response.message(),
        "Suggested workout: ǅango Drills Workout Routine."
    );
}

#[test]
fn test_fallback_is_a_validated_response() {
    let assistant = Assistant::new(AssistantKind::Study, profile(&[]));
    let response = assistant
        .handle_request(&Request::classified("Tell me a joke"))
        .unwrap();
    assert_eq!(
        response,
        Response::new("Sorry, I can't handle that request.", 0.5, false).unwrap()
    );
}

#[test]
fn test_response_constructor_enforces_confidence_range() {
    for confidence in [-0.1, 1.000_001, f64::NAN] {
        let err = Response::new("nope", confidence, true).unwrap_err();
        assert!(err.is_validation(), "{} should be rejected", confidence);
    }
}
