//! Key mapping from terminal events to the stop request.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Check if key should stop the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}
