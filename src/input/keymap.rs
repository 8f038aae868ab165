use crate::counter::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the life counter, independent of press/release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// One of the two life buttons
    Button(Direction),
    /// Turn the crown by a number of detents (positive = clockwise)
    Crown(i32),
    Quit,
}

pub fn map_key(key: &KeyEvent) -> Option<KeyIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyIntent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            Some(KeyIntent::Button(Direction::Increase))
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down | KeyCode::Left => {
            Some(KeyIntent::Button(Direction::Decrease))
        }
        KeyCode::Char(']') => Some(KeyIntent::Crown(1)),
        KeyCode::Char('[') => Some(KeyIntent::Crown(-1)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyIntent::Quit),
        _ => None,
    }
}
