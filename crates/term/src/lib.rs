//! Terminal rendering for the placement editor.
//!
//! The board is drawn into a plain framebuffer and flushed to the terminal
//! with crossterm, without a widget toolkit in between. Drawing is pure and
//! covered by unit tests; only [`TerminalRenderer`] touches the terminal.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use bread_placer_core as core;
pub use bread_placer_types as types;

pub use board_view::{BoardView, StatusBar, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
