//! Selection module - board cursor and attached IC
//!
//! Two states:
//!
//! - **Hovering**: the cursor moves freely, nothing is attached.
//! - **Selecting**: an IC is attached to the cursor; moving the cursor moves
//!   the IC, and a blocked IC blocks the cursor too.
//!
//! The attached IC is held as an [`IcId`], never as a reference into the list.

use crate::geometry::row_is_inside;
use crate::ic::Ic;
use crate::placement::try_move_with;
use crate::types::{CollisionPolicy, IcId, SelectionState, BOARD_COLUMNS, BOARD_ROWS, FIRST_ROW};

/// Cursor over the board plus the optionally attached IC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    column: u8,
    row: i16,
    state: SelectionState,
    attached: Option<IcId>,
}

impl Selection {
    /// Cursor at the top of the first lane, nothing attached.
    pub fn new() -> Self {
        Self::at(1, FIRST_ROW)
    }

    /// Cursor at `(column, row)`, clamped to the board.
    pub fn at(column: u8, row: i16) -> Self {
        Self {
            column: column.clamp(1, BOARD_COLUMNS),
            row: row.clamp(FIRST_ROW, BOARD_ROWS),
            state: SelectionState::Hovering,
            attached: None,
        }
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn row(&self) -> i16 {
        self.row
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn attached(&self) -> Option<IcId> {
        self.attached
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    /// Move the cursor, dragging the attached IC along when selecting.
    ///
    /// Returns `false` when the attached IC could not move; the cursor stays
    /// put in that case. Otherwise the cursor is shifted and clamped to the
    /// board, each axis independently.
    pub fn move_cursor(
        &mut self,
        ics: &mut [Ic],
        d_column: i16,
        d_row: i16,
        policy: CollisionPolicy,
    ) -> bool {
        if self.state == SelectionState::Selecting {
            let Some(id) = self.attached else {
                self.release();
                return false;
            };
            if !try_move_with(ics, id, d_column, d_row, policy) {
                return false;
            }
        }

        let column = (self.column as i16)
            .saturating_add(d_column)
            .clamp(1, BOARD_COLUMNS as i16);
        self.column = column as u8;
        self.row = self.row.saturating_add(d_row).clamp(FIRST_ROW, BOARD_ROWS);
        true
    }

    /// Attach the first IC (in list order) under the cursor.
    ///
    /// Returns the attached IC, or `None` with the state unchanged when the
    /// cursor is over an empty cell.
    pub fn select_at_cursor(&mut self, ics: &[Ic]) -> Option<IcId> {
        let id = self.ic_under_cursor(ics)?;
        self.attached = Some(id);
        self.state = SelectionState::Selecting;
        Some(id)
    }

    /// Detach the IC, back to hovering. No geometric effect.
    pub fn release(&mut self) {
        self.state = SelectionState::Hovering;
        self.attached = None;
    }

    /// First IC whose span covers the cursor cell.
    pub fn ic_under_cursor(&self, ics: &[Ic]) -> Option<IcId> {
        ics.iter()
            .position(|ic| ic.location.column == self.column && row_is_inside(ic, self.row))
            .map(IcId)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Orientation};

    fn board() -> Vec<Ic> {
        vec![
            Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up)),
            Ic::with_pin_count(8).at(Location::new(1, 5, Orientation::Up)),
        ]
    }

    #[test]
    fn hovering_cursor_clamps_each_axis() {
        let mut ics = board();
        let mut sel = Selection::new();

        assert!(sel.move_cursor(&mut ics, -1, -1, CollisionPolicy::Interval));
        assert_eq!((sel.column(), sel.row()), (1, 1));

        assert!(sel.move_cursor(&mut ics, 5, 100, CollisionPolicy::Interval));
        assert_eq!((sel.column(), sel.row()), (3, 64));

        // Hovering never moves ICs.
        assert_eq!(ics, board());
    }

    #[test]
    fn extreme_deltas_clamp_instead_of_wrapping() {
        let mut sel = Selection::at(1, 10);

        assert!(sel.move_cursor(&mut [], 0, i16::MAX, CollisionPolicy::Interval));
        assert_eq!(sel.row(), 64);
        assert!(sel.move_cursor(&mut [], i16::MAX, i16::MIN, CollisionPolicy::Interval));
        assert_eq!((sel.column(), sel.row()), (3, 1));
        assert!(sel.move_cursor(&mut [], i16::MIN, 0, CollisionPolicy::Interval));
        assert_eq!(sel.column(), 1);
    }

    #[test]
    fn attached_ic_refuses_extreme_delta() {
        let mut ics = board();
        let mut sel = Selection::at(1, 6);
        sel.select_at_cursor(&ics);

        assert!(!sel.move_cursor(&mut ics, 0, i16::MAX, CollisionPolicy::Interval));
        assert_eq!((sel.column(), sel.row()), (1, 6));
        assert_eq!(ics, board());
    }

    #[test]
    fn select_attaches_ic_under_cursor() {
        let ics = board();
        let mut sel = Selection::at(1, 3);
        assert_eq!(sel.select_at_cursor(&ics), Some(IcId(0)));
        assert_eq!(sel.state(), SelectionState::Selecting);
        assert_eq!(sel.attached(), Some(IcId(0)));
    }

    #[test]
    fn select_on_empty_cell_keeps_state() {
        let ics = board();
        let mut sel = Selection::at(2, 3);
        assert_eq!(sel.select_at_cursor(&ics), None);
        assert_eq!(sel.state(), SelectionState::Hovering);
        assert_eq!(sel.attached(), None);
    }

    #[test]
    fn blocked_ic_blocks_cursor() {
        let mut ics = board();
        let mut sel = Selection::at(1, 2);
        sel.select_at_cursor(&ics);

        assert!(!sel.move_cursor(&mut ics, 0, 1, CollisionPolicy::Interval));
        assert_eq!((sel.column(), sel.row()), (1, 2));
        assert_eq!(ics[0].location.row, 1);
    }

    #[test]
    fn attached_ic_moves_with_cursor() {
        let mut ics = board();
        let mut sel = Selection::at(1, 2);
        sel.select_at_cursor(&ics);

        assert!(sel.move_cursor(&mut ics, 1, 0, CollisionPolicy::Interval));
        assert!(sel.move_cursor(&mut ics, 0, 10, CollisionPolicy::Interval));
        assert_eq!(ics[0].location, Location::new(2, 11, Orientation::Up));
        assert_eq!((sel.column(), sel.row()), (2, 12));
    }

    #[test]
    fn release_returns_to_hovering() {
        let ics = board();
        let mut sel = Selection::at(1, 6);
        assert_eq!(sel.select_at_cursor(&ics), Some(IcId(1)));
        sel.release();
        assert_eq!(sel.state(), SelectionState::Hovering);
        assert_eq!(sel.attached(), None);
    }
}
