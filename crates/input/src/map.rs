//! Key mapping from terminal events to controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Control touched by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Jump / confirm button.
    Trigger,
    DialUp,
    DialDown,
    /// Jump the dial to the band for 1-4 lives.
    DialPreset(u8),
}

/// Map keyboard input to a control.
pub fn map_key(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Enter
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputKey::Trigger),

        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputKey::DialUp)
        }
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputKey::DialDown)
        }

        KeyCode::Char(c @ '1'..='4') => Some(InputKey::DialPreset(c as u8 - b'0')),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
