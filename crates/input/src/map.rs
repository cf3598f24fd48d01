//! Key mapping from terminal events to board coordinates.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a board coordinate.
///
/// Only digit keys inside `[0, board_size)` map to a coordinate; everything
/// else returns `None` and the caller keeps waiting. This is the boundary
/// that keeps out-of-range values away from the engine.
pub fn map_key(code: KeyCode, board_size: usize) -> Option<usize> {
    match code {
        KeyCode::Char(ch) => {
            let value = ch.to_digit(10)? as usize;
            (value < board_size).then_some(value)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_in_range_map_to_coordinates() {
        for digit in 0..4usize {
            let ch = char::from_digit(digit as u32, 10).unwrap();
            assert_eq!(map_key(KeyCode::Char(ch), 4), Some(digit));
        }
    }

    #[test]
    fn test_out_of_range_digits_are_rejected() {
        assert_eq!(map_key(KeyCode::Char('4'), 4), None);
        assert_eq!(map_key(KeyCode::Char('9'), 4), None);
        assert_eq!(map_key(KeyCode::Char('0'), 1), Some(0));
        assert_eq!(map_key(KeyCode::Char('1'), 1), None);
    }

    #[test]
    fn test_non_digit_keys_are_rejected() {
        assert_eq!(map_key(KeyCode::Char('a'), 4), None);
        assert_eq!(map_key(KeyCode::Char(' '), 4), None);
        assert_eq!(map_key(KeyCode::Enter, 4), None);
        assert_eq!(map_key(KeyCode::Left, 4), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_regular_keys_do_not_quit() {
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('0'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Enter)));
    }
}
