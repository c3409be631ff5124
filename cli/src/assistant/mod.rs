//! # Assistant Domain
//!
//! File: cli/src/assistant/mod.rs
//!
//! ## Overview
//!
//! The keyword-routed assistant simulation:
//! - `category`: classifies free text into a `Category`
//! - `profile`: validated `UserProfile` records
//! - `request`: `Request`, `Response` and the checked `Confidence` score
//! - `handlers`: `Assistant`, its kinds, and category-based dispatch
//! - `text`: title-casing of preference values
//!
//! The command modules build on these types; nothing here prints or touches
//! the filesystem.
//!
pub mod category;
pub mod handlers;
pub mod profile;
pub mod request;
pub mod text;

pub use category::{classify, Category};
pub use handlers::{Assistant, AssistantKind};
pub use profile::UserProfile;
pub use request::{Request, Response};
