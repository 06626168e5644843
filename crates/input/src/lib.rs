//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::PlacerAction`] values plus
//! the two session-level requests (save, quit) that the event loop handles
//! itself. Holding a key relies on the terminal's own auto-repeat.

pub mod map;

pub use bread_placer_types as types;

pub use map::{handle_key_event, is_actionable, should_quit, should_save};
