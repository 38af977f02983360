//! Grid module - the settled-cell matrix
//!
//! The grid is the ground truth for which cells are hardened and what color they
//! carry. Uses a flat array (row-major) for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Bounds checking is the caller's job: [`Grid::is_occupied`] and
//! [`Grid::set_occupied`] panic on coordinates outside the grid. The collision
//! rules in [`crate::rules`] check bounds before asking.

use crate::types::{Rgb, EMPTY_COLOR, MIN_GRID_HEIGHT, MIN_GRID_WIDTH};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgb,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        occupied: false,
        color: EMPTY_COLOR,
    };

    pub fn hardened(color: Rgb) -> Self {
        Self {
            occupied: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Fixed-size settled-cell matrix. Never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// Panics if the grid is too small to hold a board-context spawn layout.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width >= MIN_GRID_WIDTH && height >= MIN_GRID_HEIGHT,
            "grid {width}x{height} is smaller than the minimum {MIN_GRID_WIDTH}x{MIN_GRID_HEIGHT}"
        );
        Self::with_size(width, height)
    }

    /// Create an empty grid of any size.
    ///
    /// Line-clear and collision logic work on any shape; only spawning needs
    /// the minimum size enforced by [`Grid::new`].
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        // Piece coordinates are i8; keep one spare row/column for probing past the edge.
        assert!(
            width < i8::MAX as u8 && height < i8::MAX as u8,
            "grid {width}x{height} exceeds piece coordinate range"
        );
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether (x, y) lies inside the grid
    #[inline]
    pub fn contains(&self, x: i8, y: i8) -> bool {
        x >= 0 && (x as i16) < self.width as i16 && y >= 0 && (y as i16) < self.height as i16
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn checked_index(&self, x: i8, y: i8) -> usize {
        match self.index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "cell ({x}, {y}) outside {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Get cell at position (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) holds a hardened cell.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells[self.checked_index(x, y)].occupied
    }

    /// Mark (x, y) hardened with the given color.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    pub fn set_occupied(&mut self, x: i8, y: i8, color: Rgb) {
        let idx = self.checked_index(x, y);
        self.cells[idx] = Cell::hardened(color);
    }

    fn row_range(&self, y: usize) -> std::ops::Range<usize> {
        assert!(
            y < self.height as usize,
            "row {y} outside grid of height {}",
            self.height
        );
        let start = y * self.width as usize;
        start..start + self.width as usize
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let range = self.row_range(y);
        &self.cells[range]
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| cell.occupied)
    }

    /// Reset every cell in row `y` to empty
    pub fn clear_row(&mut self, y: usize) {
        let range = self.row_range(y);
        self.cells[range].fill(Cell::EMPTY);
    }

    /// Copy occupancy and color of row `from` over row `to`
    pub fn copy_row_down(&mut self, from: usize, to: usize) {
        let src = self.row_range(from);
        let dst = self.row_range(to);
        self.cells.copy_within(src, dst.start);
    }

    /// Number of hardened cells on the whole grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 19);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 18), Some(189));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 19), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(10, 19);
        let red = Rgb::new(200, 0, 0);

        grid.set_occupied(0, 0, red);
        grid.set_occupied(5, 10, red);

        assert!(grid.is_occupied(0, 0));
        assert_eq!(grid.get(5, 10), Some(Cell::hardened(red)));
        assert!(grid.cells[0].occupied);
        assert!(grid.cells[10 * 10 + 5].occupied);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_copy_row_down_keeps_colors() {
        let mut grid = Grid::with_size(3, 2);
        grid.set_occupied(1, 0, Rgb::new(1, 2, 3));
        grid.copy_row_down(0, 1);

        assert_eq!(grid.row(1), grid.row(0));
        assert_eq!(grid.get(1, 1), Some(Cell::hardened(Rgb::new(1, 2, 3))));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_is_occupied_out_of_bounds_panics() {
        Grid::new(10, 19).is_occupied(10, 0);
    }

    #[test]
    #[should_panic(expected = "smaller than the minimum")]
    fn test_new_rejects_tiny_grid() {
        Grid::new(4, 19);
    }
}
