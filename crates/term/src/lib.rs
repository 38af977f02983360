//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, with no widget or layout library in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod hold_spin;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{background_color, shadow_color, AnchorY, GameView, Viewport};
pub use hold_spin::HoldSpin;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
