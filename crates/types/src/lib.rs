//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the placement core, the file formats, the terminal view and the input map.
//!
//! # Board Dimensions
//!
//! The breadboard has three IC lanes and 64 rows:
//!
//! - **Columns**: 1-3 are board lanes, 0 is the "outside the board" sentinel
//! - **Rows**: 1-64, row 1 at the top
//!
//! # Examples
//!
//! ```
//! use bread_placer_types::{Orientation, PinType, BOARD_COLUMNS, BOARD_ROWS};
//!
//! assert_eq!(Orientation::Up.flipped(), Orientation::Down);
//! assert_eq!(PinType::from_label("GND1"), PinType::Gnd);
//! assert_eq!(BOARD_COLUMNS, 3);
//! assert_eq!(BOARD_ROWS, 64);
//! ```

use std::fmt;

/// Number of IC lanes on the board (columns 1..=3).
pub const BOARD_COLUMNS: u8 = 3;

/// Number of rows on the board (rows 1..=64).
pub const BOARD_ROWS: i16 = 64;

/// First valid board row.
pub const FIRST_ROW: i16 = 1;

/// Column value used for ICs that are not placed on the board.
pub const OUTSIDE_COLUMN: u8 = 0;

/// Stable handle for an IC: its index in the session's IC list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IcId(pub usize);

impl IcId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for IcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction in which the pin numbering runs along the board.
///
/// `Up` places pin 1 on the topmost occupied row, `Down` on the bottommost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Up,
    Down,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }

    /// Numeric code used by project files.
    pub fn code(self) -> u8 {
        match self {
            Orientation::Up => 0,
            Orientation::Down => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Orientation::Up),
            1 => Some(Orientation::Down),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
        }
    }
}

/// Where an IC sits: lane, row of pin 1, and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub column: u8,
    pub row: i16,
    pub orientation: Orientation,
}

impl Location {
    pub const fn new(column: u8, row: i16, orientation: Orientation) -> Self {
        Self {
            column,
            row,
            orientation,
        }
    }

    /// Location of an IC that has never been placed.
    pub const fn outside() -> Self {
        Self::new(OUTSIDE_COLUMN, 0, Orientation::Up)
    }

    pub fn is_outside(&self) -> bool {
        self.column == OUTSIDE_COLUMN
    }
}

/// Electrical classification of a pin, derived from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinType {
    NonSpecial,
    Vcc,
    Gnd,
    NotConnected,
}

impl PinType {
    /// Classify a label by prefix (`GND`, `VCC`, `N.C.`).
    pub fn from_label(label: &str) -> Self {
        if label.starts_with("GND") {
            PinType::Gnd
        } else if label.starts_with("VCC") {
            PinType::Vcc
        } else if label.starts_with("N.C.") {
            PinType::NotConnected
        } else {
            PinType::NonSpecial
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PinType::NonSpecial => "signal",
            PinType::Vcc => "vcc",
            PinType::Gnd => "gnd",
            PinType::NotConnected => "nc",
        }
    }
}

/// One lead of an IC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// 1-based position.
    pub number: u16,
    pub kind: PinType,
    pub label: String,
    /// Lead is routed off the board.
    pub goes_outside: bool,
}

impl Pin {
    pub fn new(number: u16, label: impl Into<String>, goes_outside: bool) -> Self {
        let label = label.into();
        Self {
            number,
            kind: PinType::from_label(&label),
            label,
            goes_outside,
        }
    }
}

/// Cursor state of the selection machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Hovering,
    Selecting,
}

impl SelectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionState::Hovering => "hovering",
            SelectionState::Selecting => "selecting",
        }
    }
}

/// How overlap between a moving IC and a placed one is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionPolicy {
    /// Only the mover's two end rows are tested against the other span.
    /// A larger IC can swallow a smaller one without being rejected.
    Endpoints,
    /// Any shared row is a collision.
    #[default]
    Interval,
}

impl CollisionPolicy {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "endpoints" | "legacy" => Some(CollisionPolicy::Endpoints),
            "interval" | "strict" => Some(CollisionPolicy::Interval),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollisionPolicy::Endpoints => "endpoints",
            CollisionPolicy::Interval => "interval",
        }
    }
}

/// Board commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacerAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Rotate,
    ToggleAttach,
    PutOutside,
    BringInside,
    PoolNext,
    PoolPrev,
}

impl PlacerAction {
    /// Cursor delta as `(d_column, d_row)` for movement actions.
    pub fn delta(self) -> Option<(i16, i16)> {
        match self {
            PlacerAction::MoveUp => Some((0, -1)),
            PlacerAction::MoveDown => Some((0, 1)),
            PlacerAction::MoveLeft => Some((-1, 0)),
            PlacerAction::MoveRight => Some((1, 0)),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlacerAction::MoveUp => "moveUp",
            PlacerAction::MoveDown => "moveDown",
            PlacerAction::MoveLeft => "moveLeft",
            PlacerAction::MoveRight => "moveRight",
            PlacerAction::Rotate => "rotate",
            PlacerAction::ToggleAttach => "toggleAttach",
            PlacerAction::PutOutside => "putOutside",
            PlacerAction::BringInside => "bringInside",
            PlacerAction::PoolNext => "poolNext",
            PlacerAction::PoolPrev => "poolPrev",
        }
    }
}
