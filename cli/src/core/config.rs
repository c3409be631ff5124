//! # Assistants Scenario Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the simulation scenario: the list of sessions the
//! `simulate` command plays through. Each session names an assistant kind, the
//! profile it serves, and the text the user sends.
//!
//! ## Architecture
//!
//! Scenario sources, in order of precedence (the first one found wins; they are
//! not merged, since a scenario is an ordered script):
//! 1. An explicit path (`--config` or `ASSISTANTS_CONFIG`), with `~` expanded
//! 2. Project-specific `.assistants.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. The built-in default scenario
//!
//! Whatever the source, the scenario is validated before use: it must contain
//! at least one session and every profile must pass `UserProfile` validation.
//!
//! ## Examples
//!
//! Scenario file format:
//!
//! ```toml
//! [[sessions]]
//! assistant = "music"
//! input = "Play me some music"
//!
//! [sessions.profile]
//! name = "Alice"
//! age = 25
//! premium = true
//! preferences = { mood = "chill" }
//! ```
//!
use crate::assistant::{Assistant, AssistantKind, UserProfile};
use crate::core::error::{AssistantError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".assistants.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// A full simulation script, loaded from TOML or built in.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub sessions: Vec<SessionConfig>,
}

/// One simulated user: which assistant serves them and what they ask.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub assistant: AssistantKind,
    pub input: String,
    pub profile: ProfileConfig,
}

/// Raw profile fields as written in the scenario file. Validated by `build`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub preferences: HashMap<String, String>,
}

impl ProfileConfig {
    pub fn build(&self) -> std::result::Result<UserProfile, AssistantError> {
        UserProfile::new(
            self.name.clone(),
            self.age,
            self.preferences.clone(),
            self.premium,
        )
    }
}

impl Default for Scenario {
    /// Alice, Bob and Carol, each paired with the assistant matching their request.
    fn default() -> Self {
        Self {
            sessions: vec![
                default_session(
                    AssistantKind::Music,
                    "Play me some music",
                    ("Alice", 25, true),
                    ("mood", "chill"),
                ),
                default_session(
                    AssistantKind::Fitness,
                    "Suggest a workout",
                    ("Bob", 30, false),
                    ("fitness_goal", "strength"),
                ),
                default_session(
                    AssistantKind::Study,
                    "Schedule a study session",
                    ("Carol", 20, true),
                    ("study_topic", "history"),
                ),
            ],
        }
    }
}

fn default_session(
    assistant: AssistantKind,
    input: &str,
    (name, age, premium): (&str, i64, bool),
    (pref_key, pref_value): (&str, &str),
) -> SessionConfig {
    SessionConfig {
        assistant,
        input: input.to_string(),
        profile: ProfileConfig {
            name: name.to_string(),
            age,
            premium,
            preferences: HashMap::from([(pref_key.to_string(), pref_value.to_string())]),
        },
    }
}

/// A validated session, ready to run.
#[derive(Debug, Clone)]
pub struct Session {
    pub assistant: Assistant,
    pub input: String,
}

/// # Load Sessions (`load_sessions`)
///
/// Resolves the scenario from the highest-precedence source available and
/// builds its sessions, validating every profile on the way.
///
/// ## Errors
///
/// Fails if an explicit path does not exist, a found file cannot be read or
/// parsed, or the resulting scenario does not validate.
pub fn load_sessions(explicit: Option<&Path>) -> Result<Vec<Session>> {
    build_sessions(load_scenario(explicit)?).context("Scenario validation failed")
}

fn load_scenario(explicit: Option<&Path>) -> Result<Scenario> {
    let scenario = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            if !expanded.is_file() {
                return Err(anyhow!(AssistantError::Config(format!(
                    "Scenario file '{}' does not exist or is not a file.",
                    expanded.display()
                ))));
            }
            info!("Loading scenario from: {}", expanded.display());
            load_scenario_from_path(&expanded)?
        }
        None => match load_project_scenario()? {
            Some(scenario) => scenario,
            None => load_user_scenario()?.unwrap_or_else(|| {
                debug!("No scenario file found, using the built-in scenario.");
                Scenario::default()
            }),
        },
    };
    debug!("Final scenario: {:?}", scenario);
    Ok(scenario)
}

fn load_project_scenario() -> Result<Option<Scenario>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project scenario from: {}", path.display());
            load_scenario_from_path(&path).map(Some)
        }
        None => {
            debug!("No project scenario ({}) found.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

fn load_user_scenario() -> Result<Option<Scenario>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Assistants", "assistants") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
    if config_path.is_file() {
        info!("Loading user scenario from: {}", config_path.display());
        load_scenario_from_path(&config_path).map(Some)
    } else {
        debug!("User scenario file not found at {}", config_path.display());
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for the project
/// scenario file. The search stops at the first directory holding `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project scenario search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_scenario_from_path(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Turns the raw scenario into runnable sessions. Requires at least one
/// session; each profile goes through `UserProfile` validation exactly once.
fn build_sessions(scenario: Scenario) -> Result<Vec<Session>> {
    if scenario.sessions.is_empty() {
        return Err(anyhow!(AssistantError::Config(
            "Scenario must define at least one [[sessions]] entry.".to_string()
        )));
    }
    let sessions = scenario
        .sessions
        .into_iter()
        .enumerate()
        .map(|(index, session)| -> Result<Session> {
            let profile = session
                .profile
                .build()
                .with_context(|| format!("Invalid profile in session {}", index + 1))?;
            Ok(Session {
                assistant: Assistant::new(session.assistant, profile),
                input: session.input,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("Scenario with {} session(s) is valid.", sessions.len());
    Ok(sessions)
}
