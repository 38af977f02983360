//! Key events through the input handler into the game

use blockfall::core::{GameState, ScriptedShapes};
use blockfall::input::{map_key, InputHandler};
use blockfall::types::{GameConfig, GameEvent, InputEvent, Shape};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyEventKind::Press)
}

#[test]
fn test_fixed_bindings() {
    assert_eq!(map_key(press(KeyCode::Left)), Some(InputEvent::MoveLeft));
    assert_eq!(map_key(press(KeyCode::Right)), Some(InputEvent::MoveRight));
    assert_eq!(map_key(press(KeyCode::Up)), Some(InputEvent::RotateCw));
    assert_eq!(map_key(press(KeyCode::Char('x'))), Some(InputEvent::RotateCw));
    assert_eq!(map_key(press(KeyCode::Char('z'))), Some(InputEvent::RotateCcw));
    assert_eq!(map_key(press(KeyCode::Char('y'))), Some(InputEvent::RotateCcw));
    assert_eq!(map_key(press(KeyCode::Down)), Some(InputEvent::SoftDropStart));
    assert_eq!(map_key(press(KeyCode::Char(' '))), Some(InputEvent::HardDrop));
    assert_eq!(map_key(press(KeyCode::Char('c'))), Some(InputEvent::Swap));
    assert_eq!(map_key(press(KeyCode::Esc)), Some(InputEvent::Quit));
    assert_eq!(map_key(press(KeyCode::Char('p'))), None);
}

#[test]
fn test_key_sequence_drives_game() {
    let mut game = GameState::with_source(
        GameConfig::default(),
        ScriptedShapes::new(vec![Shape::T, Shape::Z]),
    );
    game.start(0);
    game.drain_events().for_each(drop);
    let mut handler = InputHandler::new();

    for code in [KeyCode::Right, KeyCode::Up, KeyCode::Down] {
        if let Some(event) = handler.handle_key_event(press(code)) {
            game.apply_input(event);
        }
    }
    assert!(game.is_soft_dropping());
    assert_eq!(
        game.drain_events().collect::<Vec<_>>(),
        vec![GameEvent::PieceMoved, GameEvent::PieceRotated]
    );

    // No key-up from this terminal: the timeout ends the soft drop.
    for event in handler.update(handler.key_release_timeout_ms() + 1) {
        game.apply_input(event);
    }
    assert!(!game.is_soft_dropping());
}
