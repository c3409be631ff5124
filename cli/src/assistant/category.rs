//! # Request Classification
//!
//! File: cli/src/assistant/category.rs
//!
//! ## Overview
//!
//! Maps free text to a `Category` by case-insensitive substring matching.
//! Keyword groups are checked in a fixed priority order and the first group
//! with a hit wins, so "play a song during my workout" is a music request.
//!
use std::fmt;
use tracing::trace;

/// The classified intent of a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Music,
    Fitness,
    Study,
    Unknown,
}

/// Keyword groups in priority order.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Music, &["music", "song", "playlist"]),
    (Category::Fitness, &["workout", "exercise"]),
    (Category::Study, &["study", "homework"]),
];

impl Category {
    /// Lowercase name used on the command line and in scenario files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Fitness => "fitness",
            Category::Study => "study",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Classify Input (`classify`)
///
/// Returns the category of `input`. Never fails: text without any recognised
/// keyword (including the empty string) is `Category::Unknown`.
pub fn classify(input: &str) -> Category {
    let lowered = input.to_lowercase();
    let category = KEYWORDS
        .iter()
        .find(|(_, words)| contains_any(&lowered, words))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Unknown);
    trace!("Classified {:?} as {}", input, category);
    category
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_keywords() {
        assert_eq!(classify("Play me some music"), Category::Music);
        assert_eq!(classify("what SONG is this"), Category::Music);
        assert_eq!(classify("Make a Playlist"), Category::Music);
    }

    #[test]
    fn test_fitness_and_study_keywords() {
        assert_eq!(classify("Suggest a workout"), Category::Fitness);
        assert_eq!(classify("I need EXERCISE"), Category::Fitness);
        assert_eq!(classify("Schedule a study session"), Category::Study);
        assert_eq!(classify("help with homework"), Category::Study);
    }

    #[test]
    fn test_priority_order_first_group_wins() {
        assert_eq!(classify("music for my workout"), Category::Music);
        assert_eq!(classify("a playlist to study to"), Category::Music);
        assert_eq!(classify("exercise before homework"), Category::Fitness);
    }

    #[test]
    fn test_unknown_when_no_keyword() {
        assert_eq!(classify("Tell me a joke"), Category::Unknown);
        assert_eq!(classify(""), Category::Unknown);
        assert_eq!(classify("   "), Category::Unknown);
    }

    #[test]
    fn test_substring_matching_inside_words() {
        // "studying" and "songs" still contain their keywords.
        assert_eq!(classify("I was studying"), Category::Study);
        assert_eq!(classify("songs please"), Category::Music);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Fitness.to_string(), "fitness");
        assert_eq!(Category::Unknown.as_str(), "unknown");
    }
}
