//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond the
//! event types. It maps `crossterm` key events into
//! [`crate::types::InputEvent`]s and turns the soft-drop key into a clean
//! start/end edge pair, including on terminals that never report key release.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit};
