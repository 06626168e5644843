//! Geometry module - occupied row spans
//!
//! An IC with `n` pins covers `n / 2` consecutive rows. The anchor row holds
//! pin 1: it is the top of the span for [`Orientation::Up`] and the bottom for
//! [`Orientation::Down`].

use crate::ic::Ic;
use crate::types::{Location, Orientation, BOARD_ROWS, FIRST_ROW};

/// Inclusive range of board rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub min: i16,
    pub max: i16,
}

impl Span {
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// Span covered by `row_count` rows anchored at `location`.
    pub fn at(location: Location, row_count: i16) -> Self {
        let extent = row_count - 1;
        match location.orientation {
            Orientation::Up => Self::new(location.row, location.row.saturating_add(extent)),
            Orientation::Down => Self::new(location.row.saturating_sub(extent), location.row),
        }
    }

    pub fn len(&self) -> i16 {
        self.max.saturating_sub(self.min).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    pub fn contains(&self, row: i16) -> bool {
        row >= self.min && row <= self.max
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// The span moved by `d_row`, or `None` when a bound leaves the `i16` range.
    pub fn shifted(&self, d_row: i16) -> Option<Self> {
        Some(Self::new(
            self.min.checked_add(d_row)?,
            self.max.checked_add(d_row)?,
        ))
    }

    /// Whether the span lies within rows `1..=64`.
    pub fn is_on_board(&self) -> bool {
        self.min >= FIRST_ROW && self.max <= BOARD_ROWS
    }

    pub fn rows(&self) -> impl Iterator<Item = i16> {
        self.min..=self.max
    }
}

/// Rows covered by `ic` at its current location.
pub fn occupied_span(ic: &Ic) -> Span {
    Span::at(ic.location, ic.row_count())
}

/// Whether `row` falls within the span of `ic`, both ends inclusive.
pub fn row_is_inside(ic: &Ic, row: i16) -> bool {
    occupied_span(ic).contains(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Orientation::Up, 10, 8, Span::new(10, 13))]
    #[case(Orientation::Down, 10, 8, Span::new(7, 10))]
    #[case(Orientation::Up, 1, 2, Span::new(1, 1))]
    #[case(Orientation::Down, 64, 16, Span::new(57, 64))]
    fn span_follows_orientation(
        #[case] orientation: Orientation,
        #[case] row: i16,
        #[case] n_pins: u16,
        #[case] expected: Span,
    ) {
        let ic = Ic::with_pin_count(n_pins).at(Location::new(1, row, orientation));
        let span = occupied_span(&ic);
        assert_eq!(span, expected);
        assert_eq!(span.len(), (n_pins / 2) as i16);
    }

    #[test]
    fn span_anchor_is_row() {
        for n_pins in [2u16, 4, 8, 14, 16, 20, 40] {
            for row in 20..40 {
                let up = Ic::with_pin_count(n_pins).at(Location::new(2, row, Orientation::Up));
                let down =
                    Ic::with_pin_count(n_pins).at(Location::new(2, row, Orientation::Down));
                assert_eq!(occupied_span(&up).min, row);
                assert_eq!(occupied_span(&down).max, row);
                assert_eq!(occupied_span(&up).len(), (n_pins / 2) as i16);
                assert_eq!(occupied_span(&down).len(), (n_pins / 2) as i16);
            }
        }
    }

    #[test]
    fn row_is_inside_is_inclusive() {
        let ic = Ic::with_pin_count(8).at(Location::new(1, 5, Orientation::Up));
        assert!(!row_is_inside(&ic, 4));
        assert!(row_is_inside(&ic, 5));
        assert!(row_is_inside(&ic, 8));
        assert!(!row_is_inside(&ic, 9));
    }

    #[test]
    fn intersects_detects_engulfment() {
        let big = Span::new(1, 10);
        let small = Span::new(4, 5);
        assert!(big.intersects(&small));
        assert!(small.intersects(&big));
        assert!(!Span::new(1, 4).intersects(&Span::new(5, 8)));
    }

    #[test]
    fn board_bounds() {
        assert!(Span::new(1, 64).is_on_board());
        assert!(!Span::new(0, 3).is_on_board());
        assert!(!Span::new(61, 65).is_on_board());
    }

    #[test]
    fn shift_past_i16_range_is_none() {
        let span = Span::new(10, 13);
        assert_eq!(span.shifted(-9), Some(Span::new(1, 4)));
        assert_eq!(span.shifted(i16::MAX), None);
        assert_eq!(span.shifted(i16::MIN), None);
    }

    #[test]
    fn huge_ic_span_saturates() {
        let span = Span::at(Location::new(0, i16::MAX, Orientation::Up), 200);
        assert_eq!(span, Span::new(i16::MAX, i16::MAX));
        let span = Span::at(Location::new(0, i16::MIN, Orientation::Down), 200);
        assert_eq!(span, Span::new(i16::MIN, i16::MIN));
    }
}
