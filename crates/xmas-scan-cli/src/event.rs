//! Event handling for keyboard input

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Poll for keyboard events with a timeout
pub fn poll(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Ignore key release events on Windows
            if key.kind == event::KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// Check if a key event is a quit command
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q' | 'Q'),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Check if a key event is an escape/back command
pub fn is_escape(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
}

/// Check if a key event is navigation down
pub fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j' | 'J'))
}

/// Check if a key event is navigation up
pub fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k' | 'K'))
}

/// Check if a key event is navigation left
pub fn is_left(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Left | KeyCode::Char('h' | 'H'))
}

/// Check if a key event is navigation right
pub fn is_right(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Right | KeyCode::Char('l' | 'L'))
}

/// Check if a key event starts a scan (Enter or s)
pub fn is_start(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter) || is_key(key, 's')
}

/// Check if a key event is a help command (? or F1)
pub fn is_help(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('?') | KeyCode::F(1))
}

/// Check if a key event is a specific character (case-insensitive)
pub fn is_key(key: &KeyEvent, c: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&c))
}

/// Check if a key event is page down
pub fn is_page_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::PageDown)
}

/// Check if a key event is page up
pub fn is_page_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::PageUp)
}

/// Pacing change requested by a key, in milliseconds
pub fn delay_step(key: &KeyEvent) -> Option<i64> {
    match key.code {
        KeyCode::Char('+' | '=') => Some(10),
        KeyCode::Char('-' | '_') => Some(-10),
        KeyCode::Char(']') => Some(1),
        KeyCode::Char('[') => Some(-1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&key(KeyCode::Char('q'))));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_hjkl_navigation_is_not_help() {
        assert!(is_left(&key(KeyCode::Char('h'))));
        assert!(!is_help(&key(KeyCode::Char('h'))));
        assert!(is_help(&key(KeyCode::Char('?'))));
    }

    #[test]
    fn test_delay_steps() {
        assert_eq!(delay_step(&key(KeyCode::Char('+'))), Some(10));
        assert_eq!(delay_step(&key(KeyCode::Char('-'))), Some(-10));
        assert_eq!(delay_step(&key(KeyCode::Char(']'))), Some(1));
        assert_eq!(delay_step(&key(KeyCode::Char('['))), Some(-1));
        assert_eq!(delay_step(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_start_keys() {
        assert!(is_start(&key(KeyCode::Enter)));
        assert!(is_start(&key(KeyCode::Char('S'))));
        assert!(!is_start(&key(KeyCode::Char(' '))));
    }
}
