//! Input handler for terminal environments.
//!
//! Turns raw key events into game input events. The only stateful key is soft
//! drop: the game needs a start edge when it goes down and an end edge when it
//! comes up. Terminals that report key release (kitty keyboard protocol) give
//! us the end edge directly; everywhere else a release timeout stands in for it.

use crossterm::event::{KeyEvent, KeyEventKind};

use arrayvec::ArrayVec;

use crate::map::map_key;
use crate::types::InputEvent;

// Without release events, a held key only shows up as autorepeat presses, and
// the first repeat arrives after the OS repeat delay (typically 250-500ms).
// The timeout has to outlast that delay or a held key flickers start/end.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

/// Tracks soft-drop key state across frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    /// Milliseconds since the soft drop key last showed up
    soft_drop_idle_ms: u32,
    key_release_timeout_ms: u32,
    /// Set once the terminal has delivered any release event
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            soft_drop_idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Translate one key event into zero or one input event.
    ///
    /// Autorepeat presses repeat moves and rotations but never restart the
    /// soft drop.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<InputEvent> {
        let event = map_key(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if event == InputEvent::SoftDropStart {
                    self.soft_drop_idle_ms = 0;
                    if self.soft_drop_held {
                        return None;
                    }
                    self.soft_drop_held = true;
                }
                Some(event)
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                if event == InputEvent::SoftDropStart {
                    return self.release_soft_drop();
                }
                None
            }
        }
    }

    /// Advance timers; emits the soft drop end edge once the key goes quiet
    /// on terminals without release events.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputEvent, 1> {
        let mut out = ArrayVec::new();
        if !self.soft_drop_held || self.release_events_seen {
            return out;
        }

        self.soft_drop_idle_ms = self.soft_drop_idle_ms.saturating_add(elapsed_ms);
        if self.soft_drop_idle_ms > self.key_release_timeout_ms {
            if let Some(event) = self.release_soft_drop() {
                out.push(event);
            }
        }
        out
    }

    fn release_soft_drop(&mut self) -> Option<InputEvent> {
        if !self.soft_drop_held {
            return None;
        }
        self.soft_drop_held = false;
        self.soft_drop_idle_ms = 0;
        Some(InputEvent::SoftDropEnd)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
