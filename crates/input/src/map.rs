//! Key mapping from terminal events to input events.
//!
//! The bindings are fixed:
//!
//! | Key | Event |
//! |-----|-------|
//! | ← / → | move |
//! | ↑ or `x` | rotate clockwise |
//! | `y` or `z` | rotate counter-clockwise |
//! | ↓ (held) | soft drop |
//! | space | hard drop |
//! | `c` | swap with hold |
//! | Esc, `q`, Ctrl-C | quit |

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the event its press produces.
///
/// The soft drop key maps to [`InputEvent::SoftDropStart`]; its release is
/// tracked by [`crate::InputHandler`].
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Down => Some(InputEvent::SoftDropStart),

        // Rotation
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(InputEvent::RotateCw),
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(InputEvent::RotateCcw)
        }

        // Actions
        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Swap),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::SoftDropStart)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::RotateCw)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('x'))),
            Some(InputEvent::RotateCw)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('y'))),
            Some(InputEvent::RotateCcw)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Z'))),
            Some(InputEvent::RotateCcw)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::HardDrop)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('c'))),
            Some(InputEvent::Swap)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }
}
