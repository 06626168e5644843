//! Breadboard placement core - pure, deterministic, and testable
//!
//! This crate holds the placement rules for dual-in-line ICs on a 3 x 64
//! breadboard. It has **no dependencies** on terminals, files, or input
//! devices; everything is a synchronous function over the IC list.
//!
//! # Module Structure
//!
//! - [`ic`]: the IC record (name, code, pins, location)
//! - [`geometry`]: occupied row spans derived from pin count and orientation
//! - [`placement`]: collision-checked moves and rotation
//! - [`selection`]: cursor state machine with an optionally attached IC
//! - [`membership`]: outside pool counting, bring-inside, put-outside
//! - [`session`]: owner of the IC list and selection, the single writer
//!
//! # Placement Rules
//!
//! - Columns 1-3 are board lanes; column 0 means "not on the board"
//! - An IC with `n` pins covers `n / 2` consecutive rows inside `1..=64`
//! - Two ICs in the same lane never share a row after a successful command
//! - A rejected command returns `false` (or `None`) and changes nothing
//!
//! # Example
//!
//! ```
//! use bread_placer_core::{Ic, Session};
//! use bread_placer_types::{IcId, Location, Orientation};
//!
//! let a = Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up));
//! let b = Ic::with_pin_count(8).at(Location::new(1, 5, Orientation::Up));
//! let mut session = Session::new(vec![a, b]);
//!
//! // Rows 2..=5 would overlap B.
//! assert!(!session.try_move(IcId(0), 0, 1));
//! // Lane 2 is empty.
//! assert!(session.try_move(IcId(0), 1, 0));
//! ```

pub mod geometry;
pub mod ic;
pub mod membership;
pub mod placement;
pub mod selection;
pub mod session;

pub use bread_placer_types as types;

// Re-export commonly used items for convenience
pub use geometry::{occupied_span, row_is_inside, Span};
pub use ic::Ic;
pub use membership::{count_outside, move_outside_ic_in, outside_ics, put_outside};
pub use placement::{column_occupants, overlapping_pairs, rotate, try_move, try_move_with};
pub use selection::Selection;
pub use session::Session;
