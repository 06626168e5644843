use crate::core::Session;
use crate::types::{IcId, PlacerAction};

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    CursorMoved,
    IcMoved(IcId),
    Rotated(IcId),
    Attached(IcId),
    Released,
    SentOutside(IcId),
    BroughtInside(IcId),
    PoolPicked(IcId),
}

impl ActionOutcome {
    /// Whether the IC placements changed (and the project is dirty).
    pub fn changes_placement(self) -> bool {
        matches!(
            self,
            ActionOutcome::IcMoved(_)
                | ActionOutcome::Rotated(_)
                | ActionOutcome::SentOutside(_)
                | ActionOutcome::BroughtInside(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    MoveBlocked,
    RotationBlocked,
    NothingAtCursor,
    PoolEmpty,
    InsertBlocked,
}

impl ActionError {
    pub fn code(self) -> &'static str {
        match self {
            ActionError::MoveBlocked
            | ActionError::RotationBlocked
            | ActionError::InsertBlocked => "blocked",
            ActionError::NothingAtCursor => "no_target",
            ActionError::PoolEmpty => "pool_empty",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActionError::MoveBlocked => "move would leave the board or overlap another IC",
            ActionError::RotationBlocked => "rotation would overlap another IC",
            ActionError::NothingAtCursor => "no IC under the cursor",
            ActionError::PoolEmpty => "no ICs left outside the board",
            ActionError::InsertBlocked => "picked IC does not fit at the cursor",
        }
    }
}

/// Apply one board command to the session.
pub fn apply_action(
    session: &mut Session,
    action: PlacerAction,
) -> Result<ActionOutcome, ActionError> {
    if let Some((d_column, d_row)) = action.delta() {
        let attached = session.selection().attached();
        if !session.move_cursor(d_column, d_row) {
            return Err(ActionError::MoveBlocked);
        }
        return Ok(match attached {
            Some(id) => ActionOutcome::IcMoved(id),
            None => ActionOutcome::CursorMoved,
        });
    }

    match action {
        PlacerAction::Rotate => {
            let id = session.target().ok_or(ActionError::NothingAtCursor)?;
            if session.rotate(id) {
                Ok(ActionOutcome::Rotated(id))
            } else {
                Err(ActionError::RotationBlocked)
            }
        }
        PlacerAction::ToggleAttach => {
            if session.selection().is_selecting() {
                session.release();
                return Ok(ActionOutcome::Released);
            }
            session
                .select_at_cursor()
                .map(ActionOutcome::Attached)
                .ok_or(ActionError::NothingAtCursor)
        }
        PlacerAction::PutOutside => {
            let id = session.target().ok_or(ActionError::NothingAtCursor)?;
            session.put_outside(id);
            log::debug!("{id} sent outside");
            Ok(ActionOutcome::SentOutside(id))
        }
        PlacerAction::BringInside => {
            if session.count_outside() == 0 {
                return Err(ActionError::PoolEmpty);
            }
            let id = session.bring_inside().ok_or(ActionError::InsertBlocked)?;
            log::debug!(
                "{id} placed at column {} row {}",
                session.selection().column(),
                session.selection().row()
            );
            Ok(ActionOutcome::BroughtInside(id))
        }
        PlacerAction::PoolNext => session
            .cycle_pool(1)
            .map(ActionOutcome::PoolPicked)
            .ok_or(ActionError::PoolEmpty),
        PlacerAction::PoolPrev => session
            .cycle_pool(-1)
            .map(ActionOutcome::PoolPicked)
            .ok_or(ActionError::PoolEmpty),
        PlacerAction::MoveUp
        | PlacerAction::MoveDown
        | PlacerAction::MoveLeft
        | PlacerAction::MoveRight => Ok(ActionOutcome::CursorMoved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ic;
    use crate::types::{Location, Orientation};

    fn session() -> Session {
        Session::new(vec![
            Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up)),
            Ic::with_pin_count(8).at(Location::new(1, 5, Orientation::Up)),
            Ic::with_pin_count(16),
        ])
    }

    #[test]
    fn hover_move_is_cursor_only() {
        let mut s = session();
        assert_eq!(
            apply_action(&mut s, PlacerAction::MoveDown),
            Ok(ActionOutcome::CursorMoved)
        );
        assert_eq!(s.selection().row(), 2);
    }

    #[test]
    fn attached_move_blocked_by_neighbor() {
        let mut s = session();
        assert_eq!(
            apply_action(&mut s, PlacerAction::ToggleAttach),
            Ok(ActionOutcome::Attached(IcId(0)))
        );
        let err = apply_action(&mut s, PlacerAction::MoveDown).unwrap_err();
        assert_eq!(err, ActionError::MoveBlocked);
        assert_eq!(err.code(), "blocked");
        assert_eq!(s.selection().row(), 1);
    }

    #[test]
    fn attached_move_reports_ic() {
        let mut s = session();
        apply_action(&mut s, PlacerAction::ToggleAttach).unwrap();
        let outcome = apply_action(&mut s, PlacerAction::MoveRight).unwrap();
        assert_eq!(outcome, ActionOutcome::IcMoved(IcId(0)));
        assert!(outcome.changes_placement());
    }

    #[test]
    fn rotate_without_target() {
        let mut s = session();
        apply_action(&mut s, PlacerAction::MoveRight).unwrap();
        assert_eq!(
            apply_action(&mut s, PlacerAction::Rotate),
            Err(ActionError::NothingAtCursor)
        );
    }

    #[test]
    fn rotate_hovered_ic() {
        let mut s = session();
        assert_eq!(
            apply_action(&mut s, PlacerAction::Rotate),
            Ok(ActionOutcome::Rotated(IcId(0)))
        );
        assert_eq!(s.ics()[0].location, Location::new(1, 4, Orientation::Down));
    }

    #[test]
    fn insert_then_send_outside() {
        let mut s = session();
        apply_action(&mut s, PlacerAction::MoveRight).unwrap();
        assert_eq!(
            apply_action(&mut s, PlacerAction::BringInside),
            Ok(ActionOutcome::BroughtInside(IcId(2)))
        );
        assert_eq!(
            apply_action(&mut s, PlacerAction::BringInside),
            Err(ActionError::PoolEmpty)
        );
        assert_eq!(
            apply_action(&mut s, PlacerAction::PutOutside),
            Ok(ActionOutcome::SentOutside(IcId(2)))
        );
        assert_eq!(s.count_outside(), 1);
    }

    #[test]
    fn insert_blocked_keeps_pool() {
        let mut s = session();
        assert_eq!(
            apply_action(&mut s, PlacerAction::BringInside),
            Err(ActionError::InsertBlocked)
        );
        assert_eq!(s.count_outside(), 1);
    }

    #[test]
    fn pool_cycling_on_empty_pool() {
        let mut s = Session::new(vec![
            Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up))
        ]);
        assert_eq!(
            apply_action(&mut s, PlacerAction::PoolNext),
            Err(ActionError::PoolEmpty)
        );
        assert_eq!(
            apply_action(&mut s, PlacerAction::PoolPrev),
            Err(ActionError::PoolEmpty)
        );
    }
}
