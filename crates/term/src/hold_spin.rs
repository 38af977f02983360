//! Cosmetic spin of the held piece in the hold preview box.
//!
//! Every 500-2000ms the held piece turns a quarter step. The direction is
//! drawn from a six-slot pattern of counter-clockwise and clockwise slots.
//! Each turn moves one slot toward the opposite direction, so the spin keeps
//! drifting back and forth instead of running away in one direction. A pattern
//! that is all one direction resets to three of each.
//!
//! This is presentation only. The core's hold buffer is never touched; the
//! turn is applied to the frame's snapshot just before rendering.

use crate::core::{GameSnapshot, SimpleRng};
use crate::types::{Shape, Turn};

const PATTERN_LEN: u8 = 6;
const DEFAULT_CCW_SLOTS: u8 = 3;
const MIN_INTERVAL_MS: u64 = 500;
const MAX_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct HoldSpin {
    rng: SimpleRng,
    /// Shape the current spin belongs to
    held: Option<Shape>,
    /// Net clockwise quarter turns, 0..4
    quarter_turns: u8,
    /// Counter-clockwise slots in the six-slot pattern
    ccw_slots: u8,
    next_turn_ms: u64,
}

impl HoldSpin {
    pub fn new(seed: u32, now_ms: u64) -> Self {
        let mut spin = Self {
            rng: SimpleRng::new(seed),
            held: None,
            quarter_turns: 0,
            ccw_slots: DEFAULT_CCW_SLOTS,
            next_turn_ms: 0,
        };
        spin.schedule(now_ms);
        spin
    }

    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    pub fn ccw_slots(&self) -> u8 {
        self.ccw_slots
    }

    /// Advance the animation. Returns true if the held piece turned.
    ///
    /// A newly held shape starts upright.
    pub fn update(&mut self, now_ms: u64, held: Option<Shape>) -> bool {
        if held != self.held {
            self.held = held;
            self.quarter_turns = 0;
        }
        if held.is_none() || now_ms < self.next_turn_ms {
            return false;
        }
        self.schedule(now_ms);

        let slot = self.rng.next_range(PATTERN_LEN as u32) as u8;
        let clockwise = slot >= self.ccw_slots;
        self.quarter_turns = (self.quarter_turns + if clockwise { 1 } else { 3 }) % 4;

        self.ccw_slots = match self.ccw_slots {
            0 | PATTERN_LEN => DEFAULT_CCW_SLOTS,
            n if clockwise => n - 1,
            n => n + 1,
        };
        true
    }

    /// Turn the snapshot's held piece to the current spin.
    pub fn apply(&self, snap: &mut GameSnapshot) {
        if let Some(mut piece) = snap.hold {
            for _ in 0..self.quarter_turns {
                piece = piece.with_cells(piece.rotated(Turn::Cw));
            }
            snap.hold = Some(piece);
        }
    }

    fn schedule(&mut self, now_ms: u64) {
        let spread = (MAX_INTERVAL_MS - MIN_INTERVAL_MS + 1) as u32;
        self.next_turn_ms = now_ms + MIN_INTERVAL_MS + self.rng.next_range(spread) as u64;
    }
}
