//! # Assistants and Request Dispatch
//!
//! File: cli/src/assistant/handlers.rs
//!
//! ## Overview
//!
//! An `Assistant` pairs an `AssistantKind` with the `UserProfile` it serves.
//! Every kind shares the same contract (`greet` and `handle_request`); the
//! specialised kinds each own exactly one `Category`.
//!
//! ## Architecture
//!
//! Dispatch is table-driven rather than layered:
//! 1. `AssistantKind::specialty` names the single category a kind handles
//!    (`General` handles none).
//! 2. `handler_for` maps a category to its handler function.
//! 3. Anything that does not match the kind's specialty goes to `fallback`.
//!
//! ```ignore
//! let assistant = Assistant::new(AssistantKind::Music, profile);
//! let response = assistant.handle_request(&Request::classified("play a song"))?;
//! println!("{}", response);
//! ```
//!
use super::category::Category;
use super::profile::UserProfile;
use super::request::{Request, Response};
use super::text::title_case;
use crate::core::error::AssistantError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const FALLBACK_MESSAGE: &str = "Sorry, I can't handle that request.";
const FALLBACK_CONFIDENCE: f64 = 0.5;
const MUSIC_CONFIDENCE: f64 = 0.95;
const FITNESS_CONFIDENCE: f64 = 0.9;
const STUDY_CONFIDENCE: f64 = 0.92;

/// A function producing the specialised response for one category.
type Handler = fn(&UserProfile) -> Result<Response, AssistantError>;

/// The closed set of assistant variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantKind {
    /// Handles nothing; always answers with the fallback.
    General,
    Music,
    Fitness,
    Study,
}

impl AssistantKind {
    /// The one category this kind knows how to handle.
    pub fn specialty(self) -> Option<Category> {
        match self {
            AssistantKind::General => None,
            AssistantKind::Music => Some(Category::Music),
            AssistantKind::Fitness => Some(Category::Fitness),
            AssistantKind::Study => Some(Category::Study),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssistantKind::General => "general",
            AssistantKind::Music => "music",
            AssistantKind::Fitness => "fitness",
            AssistantKind::Study => "study",
        }
    }
}

impl fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistantKind {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(AssistantKind::General),
            "music" => Ok(AssistantKind::Music),
            "fitness" => Ok(AssistantKind::Fitness),
            "study" => Ok(AssistantKind::Study),
            _ => Err(AssistantError::UnknownAssistant(s.to_string())),
        }
    }
}

/// An assistant serving a single user profile.
#[derive(Debug, Clone)]
pub struct Assistant {
    kind: AssistantKind,
    profile: UserProfile,
}

impl Assistant {
    pub fn new(kind: AssistantKind, profile: UserProfile) -> Self {
        Self { kind, profile }
    }

    pub fn kind(&self) -> AssistantKind {
        self.kind
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn greet(&self) -> String {
        format!("Hello, {}! How can I help you today?", self.profile.name())
    }

    /// # Handle Request (`handle_request`)
    ///
    /// Answers `request` with the kind's specialised handler when the request's
    /// category is this kind's specialty, and with the shared fallback otherwise.
    /// Stateless: the result depends only on the request category and the profile.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Validation` if the built `Response` breaks its
    /// confidence invariant.
    pub fn handle_request(&self, request: &Request) -> Result<Response, AssistantError> {
        let category = request.category();
        let response = match self.kind.specialty() {
            Some(specialty) if specialty == category => match handler_for(category) {
                Some(handler) => {
                    debug!("{} assistant handling {} request", self.kind, category);
                    handler(&self.profile)?
                }
                None => fallback()?,
            },
            _ => {
                debug!(
                    "{} assistant cannot handle {} request, using fallback",
                    self.kind, category
                );
                fallback()?
            }
        };
        debug!(
            confidence = response.confidence(),
            action_performed = response.action_performed(),
            "{} assistant answered",
            self.kind
        );
        Ok(response)
    }
}

/// Category → handler lookup.
fn handler_for(category: Category) -> Option<Handler> {
    match category {
        Category::Music => Some(recommend_playlist),
        Category::Fitness => Some(suggest_workout),
        Category::Study => Some(schedule_study_session),
        Category::Unknown => None,
    }
}

fn fallback() -> Result<Response, AssistantError> {
    Response::new(FALLBACK_MESSAGE, FALLBACK_CONFIDENCE, false)
}

fn recommend_playlist(profile: &UserProfile) -> Result<Response, AssistantError> {
    let mood = title_case(profile.preference("mood", "happy"));
    Response::new(
        format!("Here's a {} Vibes Playlist for you!", mood),
        MUSIC_CONFIDENCE,
        true,
    )
}

fn suggest_workout(profile: &UserProfile) -> Result<Response, AssistantError> {
    let goal = title_case(profile.preference("fitness_goal", "general fitness"));
    Response::new(
        format!("Suggested workout: {} Workout Routine.", goal),
        FITNESS_CONFIDENCE,
        true,
    )
}

fn schedule_study_session(profile: &UserProfile) -> Result<Response, AssistantError> {
    let topic = profile.preference("study_topic", "math");
    Response::new(
        format!("Scheduled a study session for {}.", topic),
        STUDY_CONFIDENCE,
        true,
    )
}
