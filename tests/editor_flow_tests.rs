//! Key-to-command flow: crossterm keys through the input map into the engine

use crossterm::event::{KeyCode, KeyEvent};

use bread_placer::core::{Ic, Session};
use bread_placer::engine::{apply_action, ActionError, ActionOutcome};
use bread_placer::input::handle_key_event;
use bread_placer::types::{CollisionPolicy, IcId, Location, Orientation, SelectionState};

fn press(session: &mut Session, code: KeyCode) -> Result<ActionOutcome, ActionError> {
    let action = handle_key_event(KeyEvent::from(code)).expect("key should map to an action");
    apply_action(session, action)
}

fn press_n(session: &mut Session, code: KeyCode, n: usize) {
    for _ in 0..n {
        press(session, code).unwrap();
    }
}

#[test]
fn test_place_three_ics_from_the_pool() {
    let mut session = Session::new(vec![
        Ic::with_pin_count(8),
        Ic::with_pin_count(14),
        Ic::with_pin_count(16),
    ]);

    // First pick lands at the cursor.
    assert_eq!(
        press(&mut session, KeyCode::Char('i')),
        Ok(ActionOutcome::BroughtInside(IcId(0)))
    );
    assert_eq!(session.ics()[0].location, Location::new(1, 1, Orientation::Up));

    // The same cell is now occupied.
    assert_eq!(
        press(&mut session, KeyCode::Char('i')),
        Err(ActionError::InsertBlocked)
    );

    press_n(&mut session, KeyCode::Down, 4);
    assert_eq!(
        press(&mut session, KeyCode::Char('i')),
        Ok(ActionOutcome::BroughtInside(IcId(1)))
    );

    press(&mut session, KeyCode::Right).unwrap();
    assert_eq!(
        press(&mut session, KeyCode::Char('i')),
        Ok(ActionOutcome::BroughtInside(IcId(2)))
    );
    assert_eq!(session.count_outside(), 0);
    assert_eq!(
        press(&mut session, KeyCode::Char('i')),
        Err(ActionError::PoolEmpty)
    );
    assert!(session.overlaps().is_empty());
}

#[test]
fn test_drag_attached_ic_until_blocked() {
    let mut session = Session::new(vec![
        Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up)),
        Ic::with_pin_count(8).at(Location::new(1, 9, Orientation::Up)),
    ]);

    assert_eq!(
        press(&mut session, KeyCode::Char(' ')),
        Ok(ActionOutcome::Attached(IcId(0)))
    );

    // Rows 1-4 can move down to 5-8, then B at row 9 blocks.
    for _ in 0..4 {
        assert_eq!(
            press(&mut session, KeyCode::Char('j')),
            Ok(ActionOutcome::IcMoved(IcId(0)))
        );
    }
    assert_eq!(
        press(&mut session, KeyCode::Char('j')),
        Err(ActionError::MoveBlocked)
    );
    assert_eq!(session.selection().row(), 5);
    assert_eq!(session.ics()[0].location.row, 5);

    // Sideways works, and the cursor follows.
    assert_eq!(
        press(&mut session, KeyCode::Char('l')),
        Ok(ActionOutcome::IcMoved(IcId(0)))
    );
    assert_eq!(session.selection().column(), 2);

    assert_eq!(
        press(&mut session, KeyCode::Enter),
        Ok(ActionOutcome::Released)
    );
    assert_eq!(session.selection().state(), SelectionState::Hovering);
}

#[test]
fn test_rotate_keeps_span_and_revalidates() {
    // Rotation keeps the span, so the neighbour right below does not block it.
    let mut session = Session::new(vec![
        Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up)),
        Ic::with_pin_count(8).at(Location::new(1, 5, Orientation::Up)),
    ]);

    assert_eq!(
        press(&mut session, KeyCode::Char('r')),
        Ok(ActionOutcome::Rotated(IcId(0)))
    );
    assert_eq!(session.ics()[0].location, Location::new(1, 4, Orientation::Down));

    // A trusted load can leave an IC hanging over the top edge. Rotating
    // re-validates the location and refuses.
    let mut session = Session::new(vec![
        Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Down)),
    ]);
    assert_eq!(
        press(&mut session, KeyCode::Char('r')),
        Err(ActionError::RotationBlocked)
    );
}

#[test]
fn test_put_outside_releases_and_refills_pool() {
    let mut session = Session::new(vec![
        Ic::with_pin_count(8).at(Location::new(1, 1, Orientation::Up)),
        Ic::with_pin_count(8),
    ]);

    press(&mut session, KeyCode::Char(' ')).unwrap();
    assert_eq!(
        press(&mut session, KeyCode::Char('o')),
        Ok(ActionOutcome::SentOutside(IcId(0)))
    );
    assert!(!session.selection().is_selecting());
    assert_eq!(session.count_outside(), 2);

    assert_eq!(
        press(&mut session, KeyCode::Char('o')),
        Err(ActionError::NothingAtCursor)
    );

    assert_eq!(
        press(&mut session, KeyCode::Tab),
        Ok(ActionOutcome::PoolPicked(IcId(1)))
    );
    assert_eq!(
        press(&mut session, KeyCode::Char(']')),
        Ok(ActionOutcome::PoolPicked(IcId(0)))
    );
}

#[test]
fn test_endpoint_policy_lets_large_ic_swallow_small_one() {
    // 16 pins over rows 1-8 in lane 1, a 2-pin IC at row 5 in lane 2.
    let ics = vec![
        Ic::with_pin_count(16).at(Location::new(1, 1, Orientation::Up)),
        Ic::with_pin_count(2).at(Location::new(2, 5, Orientation::Up)),
    ];
    let mut legacy = Session::with_policy(ics.clone(), CollisionPolicy::Endpoints);
    let mut strict = Session::with_policy(ics, CollisionPolicy::Interval);

    press(&mut legacy, KeyCode::Char(' ')).unwrap();
    press(&mut strict, KeyCode::Char(' ')).unwrap();

    assert_eq!(
        press(&mut legacy, KeyCode::Right),
        Ok(ActionOutcome::IcMoved(IcId(0)))
    );
    assert_eq!(legacy.overlaps(), vec![(IcId(0), IcId(1))]);

    assert_eq!(
        press(&mut strict, KeyCode::Right),
        Err(ActionError::MoveBlocked)
    );
    assert!(strict.overlaps().is_empty());
}
