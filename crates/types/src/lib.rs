//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 19 rows (indexed 0-18, row 0 at the top)
//! - **Preview area**: 5 columns x 6 rows (hold panel)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_MS` | 1000 | Gravity interval |
//! | `SOFT_DROP_FALL_MS` | 50 | Gravity interval while soft drop is held |
//! | `FRAME_MS` | 16 | Frame pacing of the terminal loop |
//! | `GAME_OVER_LINGER_MS` | 3000 | Final frame hold before teardown |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Shape, Turn, InputEvent, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let parsed = Shape::from_str("t").unwrap();
//! assert_eq!(parsed, Shape::T);
//!
//! // Shapes are indexable for table lookups
//! assert_eq!(Shape::from_index(parsed.index()), Shape::T);
//!
//! // Turning is its own inverse pair
//! assert_eq!(Turn::Cw.inverse(), Turn::Ccw);
//!
//! // Parse an input event
//! let event = InputEvent::from_str("hardDrop").unwrap();
//! assert_eq!(event, InputEvent::HardDrop);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 19);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (19 rows)
pub const BOARD_HEIGHT: u8 = 19;

/// Hold preview area width in cells
pub const PREVIEW_WIDTH: u8 = 5;

/// Hold preview area height in cells
pub const PREVIEW_HEIGHT: u8 = 6;

/// Narrowest grid the board spawn layouts fit into
pub const MIN_GRID_WIDTH: u8 = 7;

/// Shortest grid the board spawn layouts fit into
pub const MIN_GRID_HEIGHT: u8 = 5;

/// Default gravity interval (1000ms = 1 second per row)
pub const DEFAULT_FALL_MS: u32 = 1000;

/// Gravity interval while the soft drop input is held
pub const SOFT_DROP_FALL_MS: u32 = 50;

/// Frame pacing for the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// How long the final frame stays on screen after game over
pub const GAME_OVER_LINGER_MS: u32 = 3000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `num / den` (integer, rounds down).
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        Self {
            r: (self.r as u16 * num / den) as u8,
            g: (self.g as u16 * num / den) as u8,
            b: (self.b as u16 * num / den) as u8,
        }
    }
}

/// Color of an empty grid cell.
pub const EMPTY_COLOR: Rgb = Rgb::new(32, 0, 64);

/// The seven piece shapes
///
/// Each shape has a fixed color:
/// - **I**: blue-violet, straight bar
/// - **J**: deep blue
/// - **L**: amber
/// - **O**: olive, 2x2 square (rotation-invariant)
/// - **S**: green
/// - **T**: purple
/// - **Z**: dark red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

const SHAPE_COLORS: [Rgb; Shape::COUNT] = [
    Rgb::new(64, 64, 192),
    Rgb::new(0, 0, 192),
    Rgb::new(192, 128, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(128, 0, 0),
];

impl Shape {
    /// Number of shape variants
    pub const COUNT: usize = 7;

    /// All shapes, in table order
    pub const ALL: [Shape; Shape::COUNT] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Table index of this shape (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape for a table index.
    ///
    /// # Panics
    ///
    /// Panics when `index >= Shape::COUNT`; the shape set is closed.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "shape index {index} out of range 0..{}",
            Self::COUNT
        );
        Self::ALL[index]
    }

    /// Color derived from the shape
    pub fn color(self) -> Rgb {
        SHAPE_COLORS[self.index()]
    }

    /// The square is symmetric about its own center and never rotates.
    pub fn is_rotation_invariant(self) -> bool {
        self == Shape::O
    }

    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "o" => Some(Shape::O),
            "s" => Some(Shape::S),
            "t" => Some(Shape::T),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
            Shape::O => "O",
            Shape::S => "S",
            Shape::T => "T",
            Shape::Z => "Z",
        }
    }
}

/// Rotation direction (90° steps about the pivot cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Clockwise: (dx, dy) -> (-dy, dx) in screen coordinates (y grows downward)
    Cw,
    /// Counter-clockwise: (dx, dy) -> (dy, -dx)
    Ccw,
}

impl Turn {
    pub fn inverse(self) -> Self {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
        }
    }

    /// Rotate a pivot-relative offset by 90° in this direction.
    ///
    /// ```
    /// use blockfall_types::Turn;
    ///
    /// assert_eq!(Turn::Cw.apply(1, 0), (0, 1));
    /// assert_eq!(Turn::Ccw.apply(1, 0), (0, -1));
    /// ```
    pub fn apply(self, dx: i8, dy: i8) -> (i8, i8) {
        match self {
            Turn::Cw => (-dy, dx),
            Turn::Ccw => (dy, -dx),
        }
    }
}

/// Where a piece layout is placed: on the playing board, or in the
/// narrower hold preview area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnContext {
    Board,
    Preview,
}

impl SpawnContext {
    pub fn index(self) -> usize {
        match self {
            SpawnContext::Board => 0,
            SpawnContext::Preview => 1,
        }
    }
}

/// Discrete input events delivered to the game loop
///
/// Only the soft drop distinguishes key-down from key-up; every other
/// event is an instantaneous edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Soft drop key went down: accelerate gravity
    SoftDropStart,
    /// Soft drop key went up: restore gravity
    SoftDropEnd,
    /// Drop to the resting position and harden immediately
    HardDrop,
    /// Exchange the active piece with the hold buffer
    Swap,
    /// Leave the game
    Quit,
}

impl InputEvent {
    /// Parse event from string (camelCase, case-insensitive)
    ///
    /// ```
    /// use blockfall_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("moveLeft"), Some(InputEvent::MoveLeft));
    /// assert_eq!(InputEvent::from_str("softdropstart"), Some(InputEvent::SoftDropStart));
    /// assert_eq!(InputEvent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(InputEvent::MoveLeft),
            "moveright" => Some(InputEvent::MoveRight),
            "rotatecw" => Some(InputEvent::RotateCw),
            "rotateccw" => Some(InputEvent::RotateCcw),
            "softdropstart" => Some(InputEvent::SoftDropStart),
            "softdropend" => Some(InputEvent::SoftDropEnd),
            "harddrop" => Some(InputEvent::HardDrop),
            "swap" => Some(InputEvent::Swap),
            "quit" => Some(InputEvent::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::RotateCw => "rotateCw",
            InputEvent::RotateCcw => "rotateCcw",
            InputEvent::SoftDropStart => "softDropStart",
            InputEvent::SoftDropEnd => "softDropEnd",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::Swap => "swap",
            InputEvent::Quit => "quit",
        }
    }
}

/// Semantic events emitted by the core for the sound layer (and anyone else
/// listening). The core never waits on a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    GameStarted,
    PieceMoved,
    PieceRotated,
    /// A piece hardened into the grid
    PieceDropped,
    /// One or more rows were completed and removed
    LineCleared { rows: u8 },
    GameOver,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "gameStarted",
            GameEvent::PieceMoved => "pieceMoved",
            GameEvent::PieceRotated => "pieceRotated",
            GameEvent::PieceDropped => "pieceDropped",
            GameEvent::LineCleared { .. } => "lineCleared",
            GameEvent::GameOver => "gameOver",
        }
    }
}

/// Simulation settings, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Gravity interval in milliseconds
    pub fall_ms: u32,
    /// Gravity interval while soft drop is held
    pub soft_drop_ms: u32,
}

impl GameConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_ms: DEFAULT_FALL_MS,
            soft_drop_ms: SOFT_DROP_FALL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_classic_game() {
        assert_eq!(DEFAULT_FALL_MS, 1000);
        assert_eq!(SOFT_DROP_FALL_MS, 50);
        assert_eq!(GAME_OVER_LINGER_MS, 3000);

        let config = GameConfig::default();
        assert_eq!(config.fall_ms, DEFAULT_FALL_MS);
        assert_eq!(config.soft_drop_ms, SOFT_DROP_FALL_MS);
        assert_eq!((config.width, config.height), (BOARD_WIDTH, BOARD_HEIGHT));
    }

    #[test]
    fn shape_index_roundtrips_through_table() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
            assert_eq!(Shape::from_index(i), *shape);
            assert_eq!(Shape::from_str(shape.as_str()), Some(*shape));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shape_from_index_rejects_unknown_identifier() {
        Shape::from_index(Shape::COUNT);
    }

    #[test]
    fn shape_colors_are_distinct() {
        for a in Shape::ALL {
            for b in Shape::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
                }
            }
            assert_ne!(a.color(), EMPTY_COLOR);
        }
    }

    #[test]
    fn only_square_is_rotation_invariant() {
        let invariant: Vec<Shape> = Shape::ALL
            .into_iter()
            .filter(|s| s.is_rotation_invariant())
            .collect();
        assert_eq!(invariant, vec![Shape::O]);
    }

    #[test]
    fn turn_four_times_is_identity() {
        for turn in [Turn::Cw, Turn::Ccw] {
            let mut p = (2, -1);
            for _ in 0..4 {
                p = turn.apply(p.0, p.1);
            }
            assert_eq!(p, (2, -1));
        }
    }

    #[test]
    fn rgb_scaled_darkens() {
        assert_eq!(Rgb::new(90, 30, 3).scaled(1, 3), Rgb::new(30, 10, 1));
    }
}
