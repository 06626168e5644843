//! Membership module - moving ICs between the outside pool and the board

use crate::ic::Ic;
use crate::placement::try_move_with;
use crate::types::{CollisionPolicy, IcId, Orientation, OUTSIDE_COLUMN};

/// Number of ICs not placed on the board.
pub fn count_outside(ics: &[Ic]) -> usize {
    ics.iter().filter(|ic| ic.location.is_outside()).count()
}

/// Outside ICs in list order.
pub fn outside_ics(ics: &[Ic]) -> impl Iterator<Item = (IcId, &Ic)> {
    ics.iter()
        .enumerate()
        .filter(|(_, ic)| ic.location.is_outside())
        .map(|(index, ic)| (IcId(index), ic))
}

/// The `ordinal`-th outside IC (0-based, list order).
pub fn nth_outside(ics: &[Ic], ordinal: usize) -> Option<IcId> {
    outside_ics(ics).nth(ordinal).map(|(id, _)| id)
}

/// Place the `ordinal`-th outside IC at `(column, row)`, facing up.
///
/// The destination is validated like any other move. On failure the IC keeps
/// the row and orientation it had before the attempt.
pub fn move_outside_ic_in(
    ics: &mut [Ic],
    ordinal: usize,
    row: i16,
    column: u8,
    policy: CollisionPolicy,
) -> bool {
    let Some(id) = nth_outside(ics, ordinal) else {
        return false;
    };

    let previous = ics[id.index()].location;
    {
        let location = &mut ics[id.index()].location;
        location.row = 0;
        location.orientation = Orientation::Up;
    }

    if try_move_with(ics, id, column as i16, row, policy) {
        return true;
    }

    ics[id.index()].location = previous;
    false
}

/// Take an IC off the board. Always succeeds.
pub fn put_outside(ic: &mut Ic) {
    ic.location.column = OUTSIDE_COLUMN;
}
