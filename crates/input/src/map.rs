//! Key mapping from terminal events to placement actions.

use crate::types::PlacerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to board actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PlacerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(PlacerAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(PlacerAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(PlacerAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(PlacerAction::MoveRight),

        // Placement
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlacerAction::Rotate),
        KeyCode::Char(' ') | KeyCode::Enter => Some(PlacerAction::ToggleAttach),
        KeyCode::Char('o') | KeyCode::Char('O') | KeyCode::Delete | KeyCode::Backspace => {
            Some(PlacerAction::PutOutside)
        }
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Insert => {
            Some(PlacerAction::BringInside)
        }

        // Outside pool
        KeyCode::Char(']') | KeyCode::Tab => Some(PlacerAction::PoolNext),
        KeyCode::Char('[') | KeyCode::BackTab => Some(PlacerAction::PoolPrev),

        _ => None,
    }
}

/// Press and auto-repeat events are acted on; releases are not.
pub fn is_actionable(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should write the project file.
pub fn should_save(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Check if key should quit the editor.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
