//! Hold buffer - one deferred piece, swapped at most once per spawn.

use crate::piece::Piece;
use crate::types::{Shape, SpawnContext};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldBuffer {
    /// Held piece, laid out for the preview panel
    held: Option<Piece>,
    swapped_this_spawn: bool,
}

impl HoldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn held_shape(&self) -> Option<Shape> {
        self.held.map(|p| p.shape())
    }

    pub fn has_swapped_this_spawn(&self) -> bool {
        self.swapped_this_spawn
    }

    pub fn can_swap(&self) -> bool {
        !self.swapped_this_spawn
    }

    /// Store `outgoing` and hand back the previously held shape.
    ///
    /// Returns None (and stores nothing) if a swap already happened since the
    /// last spawn. `fill_empty` supplies the incoming shape when the buffer
    /// was empty.
    pub fn exchange(
        &mut self,
        outgoing: Shape,
        fill_empty: impl FnOnce() -> Shape,
    ) -> Option<Shape> {
        if self.swapped_this_spawn {
            return None;
        }
        let incoming = self.held_shape().unwrap_or_else(fill_empty);
        self.held = Some(Piece::new(outgoing, SpawnContext::Preview));
        self.swapped_this_spawn = true;
        Some(incoming)
    }

    /// A new piece spawned; the next swap is allowed again.
    pub fn on_spawn(&mut self) {
        self.swapped_this_spawn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_exchange_fills_from_source() {
        let mut hold = HoldBuffer::new();
        let incoming = hold.exchange(Shape::T, || Shape::Z);

        assert_eq!(incoming, Some(Shape::Z));
        assert_eq!(hold.held_shape(), Some(Shape::T));
        assert_eq!(
            hold.held().map(|p| *p.cells()),
            Some(*Piece::new(Shape::T, SpawnContext::Preview).cells())
        );
    }

    #[test]
    fn second_exchange_before_spawn_is_noop() {
        let mut hold = HoldBuffer::new();
        hold.exchange(Shape::T, || Shape::Z);
        let before = hold.clone();

        assert_eq!(hold.exchange(Shape::Z, || Shape::I), None);
        assert_eq!(hold, before);
    }

    #[test]
    fn spawn_rearms_exchange() {
        let mut hold = HoldBuffer::new();
        hold.exchange(Shape::T, || Shape::Z);
        hold.on_spawn();

        assert!(hold.can_swap());
        assert_eq!(hold.exchange(Shape::I, || unreachable!()), Some(Shape::T));
        assert_eq!(hold.held_shape(), Some(Shape::I));
    }
}
