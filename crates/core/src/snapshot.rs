//! Snapshot module - what the renderer sees
//!
//! A plain copy of the game state taken once per frame. Renderers read it and
//! never touch [`crate::GameState`] directly. [`crate::GameState::snapshot_into`]
//! refills an existing snapshot so the frame loop reuses the grid allocation.

use crate::game_state::Phase;
use crate::grid::Grid;
use crate::piece::{Piece, PieceCells};

/// Read-only view of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<Piece>,
    /// Where the active piece would come to rest
    pub ghost: Option<PieceCells>,
    /// Held piece in preview layout
    pub hold: Option<Piece>,
    pub can_swap: bool,
    pub soft_dropping: bool,
    pub phase: Phase,
    pub score: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            active: None,
            ghost: None,
            hold: None,
            can_swap: true,
            soft_dropping: false,
            phase: Phase::Ready,
            score: 0,
            pieces_spawned: 0,
        }
    }
}
