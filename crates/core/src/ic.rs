//! IC module - one dual-in-line package and its placement.

use crate::types::{Location, Pin, PinType};

/// A dual-in-line IC.
///
/// The pin list is fixed at construction; only the [`Location`] changes while
/// the IC is moved around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ic {
    pub name: Option<String>,
    pub code: Option<String>,
    pins: Vec<Pin>,
    pub location: Location,
}

impl Ic {
    /// Create an IC outside the board.
    ///
    /// Callers guarantee an even, non-zero pin count with pins numbered
    /// `1..=pins.len()` in order.
    pub fn new(name: Option<String>, code: Option<String>, pins: Vec<Pin>) -> Self {
        debug_assert!(!pins.is_empty() && pins.len() % 2 == 0);
        Self {
            name,
            code,
            pins,
            location: Location::outside(),
        }
    }

    /// IC with placeholder pin labels, mostly useful in tests and benches.
    pub fn with_pin_count(n_pins: u16) -> Self {
        let pins = (1..=n_pins)
            .map(|n| Pin::new(n, format!("P{n}"), false))
            .collect();
        Self::new(None, None, pins)
    }

    /// Builder-style placement, bypassing collision checks.
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn n_pins(&self) -> usize {
        self.pins.len()
    }

    /// Rows occupied on the board (`n_pins / 2`).
    pub fn row_count(&self) -> i16 {
        i16::try_from(self.pins.len() / 2).unwrap_or(i16::MAX)
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Pin by 1-based number.
    pub fn pin(&self, number: u16) -> Option<&Pin> {
        (number as usize)
            .checked_sub(1)
            .and_then(|i| self.pins.get(i))
    }

    /// Short label for lists and the board view.
    pub fn display_name(&self) -> &str {
        self.code
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("IC")
    }

    pub fn power_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins
            .iter()
            .filter(|p| matches!(p.kind, PinType::Vcc | PinType::Gnd))
    }
}
