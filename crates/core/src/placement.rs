//! Placement module - collision-checked movement and rotation
//!
//! Every mutation here is validate-then-commit: the candidate location is
//! checked against the board bounds and every other IC in the target lane, and
//! the IC is only touched when all checks pass. A rejected request returns
//! `false` and leaves the whole list unchanged.

use arrayvec::ArrayVec;

use crate::geometry::{occupied_span, Span};
use crate::ic::Ic;
use crate::types::{CollisionPolicy, IcId, Location, Orientation, BOARD_COLUMNS, BOARD_ROWS};

/// Upper bound on ICs that can share one lane without overlapping.
pub const MAX_PER_COLUMN: usize = BOARD_ROWS as usize;

/// Move `target` by `(d_column, d_row)` using the default collision policy.
pub fn try_move(ics: &mut [Ic], target: IcId, d_column: i16, d_row: i16) -> bool {
    try_move_with(ics, target, d_column, d_row, CollisionPolicy::default())
}

/// Move `target` by `(d_column, d_row)`.
///
/// Bounds are checked on the span endpoints, so orientation is respected.
/// Returns `false` without mutating anything when the destination leaves the
/// board or collides with another IC in the destination lane.
pub fn try_move_with(
    ics: &mut [Ic],
    target: IcId,
    d_column: i16,
    d_row: i16,
    policy: CollisionPolicy,
) -> bool {
    let Some(ic) = ics.get(target.index()) else {
        return false;
    };

    let Some(new_column) = (ic.location.column as i16).checked_add(d_column) else {
        return false;
    };
    if new_column < 1 || new_column > BOARD_COLUMNS as i16 {
        return false;
    }
    let new_column = new_column as u8;

    let Some(candidate) = occupied_span(ic).shifted(d_row) else {
        return false;
    };
    if !candidate.is_on_board() {
        return false;
    }

    if !is_free(ics, Some(target), new_column, candidate, policy) {
        return false;
    }

    let location = &mut ics[target.index()].location;
    location.column = new_column;
    location.row = match location.orientation {
        Orientation::Up => candidate.min,
        Orientation::Down => candidate.max,
    };
    true
}

/// Flip the orientation of `target` in place, using the default policy.
pub fn rotate(ics: &mut [Ic], target: IcId) -> bool {
    rotate_with(ics, target, CollisionPolicy::default())
}

/// Flip the orientation of `target` while keeping its span fixed.
///
/// The anchor row moves to the other end of the span. For ICs on the board the
/// resulting location is re-validated and the rotation refused if it would
/// leave the board or collide; outside ICs always rotate.
pub fn rotate_with(ics: &mut [Ic], target: IcId, policy: CollisionPolicy) -> bool {
    let Some(ic) = ics.get(target.index()) else {
        return false;
    };

    let rotated = rotated_location(ic.location, ic.row_count());
    if !ic.location.is_outside() {
        let span = Span::at(rotated, ic.row_count());
        if !span.is_on_board() || !is_free(ics, Some(target), rotated.column, span, policy) {
            return false;
        }
    }

    ics[target.index()].location = rotated;
    true
}

/// Location after flipping orientation with the span held in place.
pub fn rotated_location(location: Location, row_count: i16) -> Location {
    let extent = row_count - 1;
    let row = match location.orientation {
        Orientation::Up => location.row.saturating_add(extent),
        Orientation::Down => location.row.saturating_sub(extent),
    };
    Location {
        row,
        orientation: location.orientation.flipped(),
        ..location
    }
}

/// Whether `span` in `column` is free of every IC except `exclude`.
pub fn is_free(
    ics: &[Ic],
    exclude: Option<IcId>,
    column: u8,
    span: Span,
    policy: CollisionPolicy,
) -> bool {
    ics.iter().enumerate().all(|(index, other)| {
        if Some(IcId(index)) == exclude || other.location.column != column {
            return true;
        }
        !collides(span, occupied_span(other), policy)
    })
}

/// Collision test between a candidate span and a placed IC's span.
pub fn collides(candidate: Span, placed: Span, policy: CollisionPolicy) -> bool {
    match policy {
        CollisionPolicy::Endpoints => {
            placed.contains(candidate.min) || placed.contains(candidate.max)
        }
        CollisionPolicy::Interval => candidate.intersects(&placed),
    }
}

/// ICs in `column`, ordered by their top row.
///
/// Stops collecting once the lane is full, which only happens for boards that
/// were loaded with overlapping placements.
pub fn column_occupants(ics: &[Ic], column: u8) -> ArrayVec<IcId, MAX_PER_COLUMN> {
    let mut out = ArrayVec::new();
    for (index, ic) in ics.iter().enumerate() {
        if ic.location.column != column {
            continue;
        }
        if out.try_push(IcId(index)).is_err() {
            log::warn!("lane {column} holds more than {MAX_PER_COLUMN} ICs");
            break;
        }
    }
    out.sort_by_key(|id: &IcId| occupied_span(&ics[id.index()]).min);
    out
}

/// Pairs of on-board ICs in the same lane whose spans share a row.
pub fn overlapping_pairs(ics: &[Ic]) -> Vec<(IcId, IcId)> {
    let mut pairs = Vec::new();
    for (i, a) in ics.iter().enumerate() {
        if a.location.is_outside() {
            continue;
        }
        for (j, b) in ics.iter().enumerate().skip(i + 1) {
            if b.location.column != a.location.column {
                continue;
            }
            if occupied_span(a).intersects(&occupied_span(b)) {
                pairs.push((IcId(i), IcId(j)));
            }
        }
    }
    pairs
}
