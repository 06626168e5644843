//! Command dispatch for the placement session.
//!
//! Maps [`PlacerAction`](bread_placer_types::PlacerAction) values produced by
//! the input layer onto [`Session`](bread_placer_core::Session) operations and
//! reports rejections as [`ActionError`] values the UI can show.

pub mod dispatch;

pub use bread_placer_core as core;
pub use bread_placer_types as types;

pub use dispatch::{apply_action, ActionError, ActionOutcome};
