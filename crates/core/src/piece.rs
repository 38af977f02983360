//! Piece module - movable four-cell pieces and their spawn layouts
//!
//! A piece is an immutable value: [`Piece::rotated`] and [`Piece::translated`]
//! only compute *candidate* cells. The game loop validates a candidate against
//! the grid and commits it with [`Piece::with_cells`].
//!
//! Rotation is a pure 90° turn about the pivot cell, no wall kicks.

use crate::rng::ShapeSource;
use crate::types::{Rgb, Shape, SpawnContext, Turn};

/// Absolute grid coordinate of one cell (x, y)
pub type Point = (i8, i8);

/// The four cells of a piece, in layout order
pub type PieceCells = [Point; 4];

/// Initial cells and pivot for one (shape, context) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cells: PieceCells,
    pub pivot: usize,
}

const fn layout(cells: PieceCells, pivot: usize) -> Layout {
    Layout { cells, pivot }
}

/// Spawn layouts indexed by `[shape.index()][context.index()]`.
///
/// Both contexts share the same relative layout; the preview one is shifted
/// to fit the narrower hold panel.
pub static LAYOUTS: [[Layout; 2]; Shape::COUNT] = [
    // I
    [
        layout([(4, 0), (4, 1), (4, 2), (4, 3)], 2),
        layout([(2, 1), (2, 2), (2, 3), (2, 4)], 2),
    ],
    // J
    [
        layout([(3, 0), (3, 1), (4, 1), (5, 1)], 2),
        layout([(1, 2), (1, 3), (2, 3), (3, 3)], 2),
    ],
    // L
    [
        layout([(3, 1), (4, 1), (5, 1), (5, 0)], 1),
        layout([(1, 3), (2, 3), (3, 3), (3, 2)], 1),
    ],
    // O
    [
        layout([(4, 0), (5, 0), (4, 1), (5, 1)], 0),
        layout([(1, 2), (2, 2), (1, 3), (2, 3)], 0),
    ],
    // S
    [
        layout([(4, 0), (5, 0), (4, 1), (3, 1)], 2),
        layout([(2, 2), (3, 2), (2, 3), (1, 3)], 2),
    ],
    // T
    [
        layout([(5, 0), (4, 1), (5, 1), (6, 1)], 2),
        layout([(2, 2), (1, 3), (2, 3), (3, 3)], 2),
    ],
    // Z
    [
        layout([(4, 0), (5, 0), (5, 1), (6, 1)], 2),
        layout([(1, 2), (2, 2), (2, 3), (3, 3)], 2),
    ],
];

/// Look up the spawn layout for a shape in a context
pub fn spawn_layout(shape: Shape, context: SpawnContext) -> &'static Layout {
    &LAYOUTS[shape.index()][context.index()]
}

/// A four-cell piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    cells: PieceCells,
    pivot: usize,
}

impl Piece {
    /// Create a piece of `shape` at its spawn layout for `context`
    pub fn new(shape: Shape, context: SpawnContext) -> Self {
        let layout = spawn_layout(shape, context);
        Self {
            shape,
            cells: layout.cells,
            pivot: layout.pivot,
        }
    }

    /// Spawn a piece, drawing the shape from `source` when none is given
    pub fn spawn<S: ShapeSource + ?Sized>(
        shape: Option<Shape>,
        context: SpawnContext,
        source: &mut S,
    ) -> Self {
        let shape = shape.unwrap_or_else(|| source.next_shape());
        Self::new(shape, context)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Rgb {
        self.shape.color()
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot
    }

    /// The rotation center, or None for the rotation-invariant square
    pub fn pivot(&self) -> Option<Point> {
        if self.shape.is_rotation_invariant() {
            None
        } else {
            Some(self.cells[self.pivot])
        }
    }

    /// Candidate cells after a 90° turn about the pivot.
    ///
    /// The square returns its cells unchanged.
    pub fn rotated(&self, turn: Turn) -> PieceCells {
        let Some((px, py)) = self.pivot() else {
            return self.cells;
        };

        let mut out = self.cells;
        for (i, cell) in out.iter_mut().enumerate() {
            if i == self.pivot {
                continue;
            }
            let (dx, dy) = turn.apply(cell.0 - px, cell.1 - py);
            *cell = (px + dx, py + dy);
        }
        out
    }

    /// Candidate cells offset by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> PieceCells {
        self.cells.map(|(x, y)| (x + dx, y + dy))
    }

    /// Commit validated cells. Shape and pivot index are unchanged.
    pub fn with_cells(self, cells: PieceCells) -> Self {
        Self { cells, ..self }
    }

    /// The same shape laid out fresh in another context
    pub fn relayout(&self, context: SpawnContext) -> Self {
        Self::new(self.shape, context)
    }

    /// Largest row index among the cells
    pub fn lowest_row(&self) -> i8 {
        self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0)
    }
}
