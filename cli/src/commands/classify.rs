//! # Classify Command
//!
//! File: cli/src/commands/classify.rs
//!
//! ## Overview
//!
//! Implements `assistants classify <TEXT>...`, which prints the category name
//! (`music`, `fitness`, `study` or `unknown`) for the given text. Multiple
//! words are joined with single spaces before classification.
//!
//! ```bash
//! assistants classify Play me a song   # music
//! assistants classify "Tell me a joke"  # unknown
//! ```
//!
use crate::assistant::classify;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// The text to classify.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub fn handle_classify(args: ClassifyArgs) -> Result<()> {
    let text = args.text.join(" ");
    let category = classify(&text);
    info!("Classified {:?} as {}", text, category);
    println!("{}", category);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_words() {
        let args = ClassifyArgs::try_parse_from(["classify", "play", "a", "song"]).unwrap();
        assert_eq!(args.text, vec!["play", "a", "song"]);
    }

    #[test]
    fn test_requires_text() {
        assert!(ClassifyArgs::try_parse_from(["classify"]).is_err());
    }
}
