//! Game state module - the game loop state machine
//!
//! Ties together the grid, the active piece, the hold buffer and the shape
//! source. Time-driven gravity comes in through [`GameState::tick`], discrete
//! input through [`GameState::apply_input`]. Every mutation is validated by
//! [`crate::rules`] first; rejected moves leave the state untouched.
//!
//! Hardening always runs in the same order: write the piece into the grid,
//! clear completed rows, spawn the next piece. A spawn onto occupied cells ends
//! the game.

use arrayvec::ArrayVec;
use log::{debug, info, trace, warn};

use crate::grid::Grid;
use crate::hold::HoldBuffer;
use crate::line_clear;
use crate::piece::{Piece, PieceCells};
use crate::rng::{ShapeSource, SimpleRng};
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Upper bound on semantic events buffered between drains
pub const EVENT_CAPACITY: usize = 32;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Created, no piece spawned yet
    Ready,
    /// A piece is falling; the only phase that accepts mutations
    Falling,
    /// Terminal
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    hold: HoldBuffer,
    source: R,
    phase: Phase,
    /// One point per cleared row
    score: u32,
    pieces_spawned: u32,
    soft_dropping: bool,
    /// Clock reading of the last gravity step
    last_fall_ms: u64,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState<SimpleRng> {
    /// Create a new default-sized game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(GameConfig::default(), SimpleRng::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: ShapeSource> GameState<R> {
    /// Create a game on an empty grid sized by `config`
    pub fn with_source(config: GameConfig, source: R) -> Self {
        Self::with_grid(Grid::new(config.width, config.height), config, source)
    }

    /// Create a game on a pre-filled grid. The grid's size wins over `config`.
    ///
    /// # Panics
    ///
    /// Panics if the grid is too small for the board spawn layouts.
    pub fn with_grid(grid: Grid, config: GameConfig, source: R) -> Self {
        assert!(
            grid.width() >= MIN_GRID_WIDTH && grid.height() >= MIN_GRID_HEIGHT,
            "grid {}x{} is smaller than the minimum {MIN_GRID_WIDTH}x{MIN_GRID_HEIGHT}",
            grid.width(),
            grid.height()
        );
        Self {
            config: config.with_size(grid.width(), grid.height()),
            grid,
            active: None,
            hold: HoldBuffer::new(),
            source,
            phase: Phase::Ready,
            score: 0,
            pieces_spawned: 0,
            soft_dropping: false,
            last_fall_ms: 0,
            events: ArrayVec::new(),
        }
    }

    /// Start the game and spawn the first piece. `now_ms` anchors gravity.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase != Phase::Ready {
            return;
        }
        info!(
            "game started on {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
        self.phase = Phase::Falling;
        self.last_fall_ms = now_ms;
        self.emit(GameEvent::GameStarted);
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playable(&self) -> bool {
        self.phase == Phase::Falling
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn hold(&self) -> &HoldBuffer {
        &self.hold
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_dropping
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        if self.soft_dropping {
            self.config.soft_drop_ms
        } else {
            self.config.fall_ms
        }
    }

    /// Where the active piece would land if dropped now
    pub fn ghost_cells(&self) -> Option<PieceCells> {
        let active = self.active.as_ref()?;
        Some(rules::resting_cells(active, &self.grid))
    }

    /// Hand buffered semantic events to a consumer, oldest first.
    pub fn drain_events(&mut self) -> arrayvec::Drain<'_, GameEvent, EVENT_CAPACITY> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.active = self.active;
        out.ghost = self.ghost_cells();
        out.hold = self.hold.held().copied();
        out.can_swap = self.hold.can_swap();
        out.soft_dropping = self.soft_dropping;
        out.phase = self.phase;
        out.score = self.score;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            grid: Grid::with_size(self.grid.width(), self.grid.height()),
            ..GameSnapshot::default()
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Gravity step. Returns true if anything moved or hardened.
    ///
    /// Fires when at least one fall interval has passed since the last step.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        if now_ms.saturating_sub(self.last_fall_ms) < self.fall_interval_ms() as u64 {
            return false;
        }
        self.last_fall_ms = now_ms;

        let Some(active) = self.active else {
            return false;
        };

        if rules::touches_bottom_or_stack(&active, &self.grid) {
            self.harden_active();
        } else {
            self.active = Some(active.with_cells(active.translated(0, 1)));
        }
        true
    }

    /// Apply one input event. Returns true if the state changed.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveLeft => self.try_shift(-1),
            InputEvent::MoveRight => self.try_shift(1),
            InputEvent::RotateCw => self.try_rotate(Turn::Cw),
            InputEvent::RotateCcw => self.try_rotate(Turn::Ccw),
            InputEvent::SoftDropStart => self.set_soft_drop(true),
            InputEvent::SoftDropEnd => self.set_soft_drop(false),
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::Swap => self.swap(),
            // Leaving is the frame loop's business
            InputEvent::Quit => false,
        }
    }

    /// Shift one column left (-1) or right (+1)
    pub fn try_shift(&mut self, dx: i8) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !rules::can_shift(&active, &self.grid, dx) {
            return false;
        }

        self.active = Some(active.with_cells(active.translated(dx, 0)));
        self.emit(GameEvent::PieceMoved);
        true
    }

    /// Rotate about the pivot; no wall kicks
    pub fn try_rotate(&mut self, turn: Turn) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if active.shape().is_rotation_invariant() {
            return false;
        }

        let candidate = active.rotated(turn);
        if !rules::is_legal(&candidate, &self.grid) {
            return false;
        }

        self.active = Some(active.with_cells(candidate));
        self.emit(GameEvent::PieceRotated);
        true
    }

    fn set_soft_drop(&mut self, held: bool) -> bool {
        if !self.is_playable() || self.soft_dropping == held {
            return false;
        }
        self.soft_dropping = held;
        true
    }

    /// Fall to the resting position and harden without waiting for gravity
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let cells = rules::resting_cells(&active, &self.grid);
        self.active = Some(active.with_cells(cells));
        self.harden_active();
        true
    }

    /// Exchange the active piece with the hold buffer, once per spawn
    pub fn swap(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let source = &mut self.source;
        let Some(incoming) = self
            .hold
            .exchange(active.shape(), || source.next_shape())
        else {
            return false;
        };

        debug!(
            "swapped {} into hold, {} now active",
            active.shape().as_str(),
            incoming.as_str()
        );

        let piece = Piece::new(incoming, SpawnContext::Board);
        self.active = Some(piece);
        if rules::overlaps_stack(piece.cells(), &self.grid) {
            self.end_game();
        }
        true
    }

    /// Write the active piece into the grid, clear rows, spawn the next piece
    ///
    /// Does nothing outside [`Phase::Falling`].
    pub fn harden_active(&mut self) {
        if !self.is_playable() {
            return;
        }
        let Some(piece) = self.active.take() else {
            return;
        };

        let color = piece.color();
        let mut locked_out = false;
        for &(x, y) in piece.cells() {
            if self.grid.contains(x, y) {
                self.grid.set_occupied(x, y, color);
            } else {
                // Only cells above row 0 can get here; legality checks the other edges.
                locked_out = true;
            }
        }
        self.emit(GameEvent::PieceDropped);

        let rows = line_clear::clear_lines(&mut self.grid);
        if rows > 0 {
            self.score = self.score.saturating_add(rows);
            debug!("cleared {rows} row(s), score {}", self.score);
            self.emit(GameEvent::LineCleared {
                rows: rows.min(u8::MAX as u32) as u8,
            });
        }

        if locked_out {
            self.active = Some(piece);
            self.end_game();
            return;
        }

        self.spawn_piece();
    }

    /// Spawn a fresh board piece. Returns false (and ends the game) if it
    /// lands on hardened cells, or false without spawning once the game is over.
    pub fn spawn_piece(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let piece = Piece::spawn(None, SpawnContext::Board, &mut self.source);
        self.hold.on_spawn();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.active = Some(piece);
        trace!("spawned {} (#{})", piece.shape().as_str(), self.pieces_spawned);

        if rules::overlaps_stack(piece.cells(), &self.grid) {
            self.end_game();
            return false;
        }
        true
    }

    fn end_game(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        info!(
            "game over after {} pieces, score {}",
            self.pieces_spawned, self.score
        );
        self.phase = Phase::GameOver;
        self.soft_dropping = false;
        self.emit(GameEvent::GameOver);
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            warn!("event queue full, dropping {}", event.as_str());
        }
    }
}
