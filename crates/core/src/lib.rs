//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has no dependencies on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted shape sequence) produces identical games
//! - **Testable**: Time is passed in as a clock reading, never read behind your back
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size settled-cell matrix, occupancy and color per cell
//! - [`piece`]: four-cell pieces, static spawn layouts, pivot rotation
//! - [`rules`]: collision and placement queries
//! - [`line_clear`]: completed-row detection and row compaction
//! - [`hold`]: single-slot hold buffer with once-per-spawn swap
//! - [`game_state`]: the game loop state machine
//! - [`rng`]: seedable shape sources
//! - [`clock`]: monotonic time source
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn draws one of the 7 shapes with equal odds
//! - **Pivot rotation**: 90° about a fixed pivot cell, rejected if blocked (no kicks);
//!   the square never rotates
//! - **Immediate hardening**: a grounded piece hardens on the next gravity step
//! - **Hold**: swap the active piece with a held one, once per spawned piece
//! - **Scoring**: one point per cleared row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//! game.start(0);
//!
//! game.apply_input(InputEvent::MoveRight);
//! game.apply_input(InputEvent::RotateCw);
//! game.apply_input(InputEvent::HardDrop);
//!
//! assert_eq!(game.pieces_spawned(), 2);
//! assert!(game.grid().occupied_count() == 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! current [`Clock`](clock::Clock) reading. Gravity steps once per fall interval
//! (1000ms, or 50ms while soft drop is held).

pub mod clock;
pub mod game_state;
pub mod grid;
pub mod hold;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use game_state::{GameState, Phase};
pub use grid::{Cell, Grid};
pub use hold::HoldBuffer;
pub use piece::{Piece, PieceCells, Point};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng};
pub use snapshot::GameSnapshot;
