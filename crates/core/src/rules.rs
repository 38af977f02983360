//! Collision and placement rules
//!
//! Pure queries over a grid and a piece (or candidate cells). Every mutation in
//! the game loop asks one of these before committing.
//!
//! Cells above row 0 are legal and count as unobstructed; the top edge is
//! never checked.

use crate::grid::Grid;
use crate::piece::{Piece, PieceCells, Point};

/// Which horizontal neighbors of a piece are hardened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborHardness {
    pub left_blocked: bool,
    pub right_blocked: bool,
}

/// Occupancy lookup that treats anything outside the grid as empty.
#[inline]
fn occupied_in_bounds(grid: &Grid, x: i8, y: i8) -> bool {
    grid.contains(x, y) && grid.is_occupied(x, y)
}

/// Whether a single cell may hold part of a piece
#[inline]
pub fn is_cell_legal(grid: &Grid, (x, y): Point) -> bool {
    if x < 0 || x as i16 >= grid.width() as i16 || y as i16 >= grid.height() as i16 {
        return false;
    }
    !occupied_in_bounds(grid, x, y)
}

/// False if any cell is outside [0, width), at or below `height`, or on a
/// hardened cell.
pub fn is_legal(cells: &PieceCells, grid: &Grid) -> bool {
    cells.iter().all(|&cell| is_cell_legal(grid, cell))
}

/// True if any cell sits on the last row or directly above a hardened cell
pub fn touches_bottom_or_stack(piece: &Piece, grid: &Grid) -> bool {
    let last_row = grid.height() as i16 - 1;
    piece
        .cells()
        .iter()
        .any(|&(x, y)| y as i16 >= last_row || occupied_in_bounds(grid, x, y + 1))
}

pub fn touches_left_wall(piece: &Piece) -> bool {
    piece.cells().iter().any(|&(x, _)| x <= 0)
}

pub fn touches_right_wall(piece: &Piece, grid: &Grid) -> bool {
    let last_col = grid.width() as i16 - 1;
    piece.cells().iter().any(|&(x, _)| x as i16 >= last_col)
}

/// Flags a side as blocked if any cell has a hardened neighbor on that side
pub fn neighbor_hardness(piece: &Piece, grid: &Grid) -> NeighborHardness {
    let mut out = NeighborHardness::default();
    for &(x, y) in piece.cells() {
        out.left_blocked |= occupied_in_bounds(grid, x - 1, y);
        out.right_blocked |= occupied_in_bounds(grid, x + 1, y);
    }
    out
}

/// One-column shift is legal when the wall on that side is not touched and no
/// hardened neighbor is in the way.
pub fn can_shift(piece: &Piece, grid: &Grid, dx: i8) -> bool {
    let hardness = neighbor_hardness(piece, grid);
    match dx {
        -1 => !touches_left_wall(piece) && !hardness.left_blocked,
        1 => !touches_right_wall(piece, grid) && !hardness.right_blocked,
        _ => false,
    }
}

/// True if any cell coincides with a hardened grid cell
pub fn overlaps_stack(cells: &PieceCells, grid: &Grid) -> bool {
    cells.iter().any(|&(x, y)| occupied_in_bounds(grid, x, y))
}

/// Cells the piece would occupy after falling as far as it can
pub fn resting_cells(piece: &Piece, grid: &Grid) -> PieceCells {
    let mut landing = *piece;
    while !touches_bottom_or_stack(&landing, grid) {
        landing = landing.with_cells(landing.translated(0, 1));
    }
    *landing.cells()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgb, Shape, SpawnContext};

    #[test]
    fn test_top_edge_is_not_checked() {
        let grid = Grid::new(10, 19);
        assert!(is_legal(&[(4, -2), (4, -1), (4, 0), (4, 1)], &grid));
    }

    #[test]
    fn test_neighbor_hardness_reports_both_sides() {
        let mut grid = Grid::new(10, 19);
        let piece = Piece::new(Shape::I, SpawnContext::Board); // column 4, rows 0..3
        grid.set_occupied(3, 2, Rgb::new(1, 1, 1));
        grid.set_occupied(5, 0, Rgb::new(1, 1, 1));

        let hardness = neighbor_hardness(&piece, &grid);
        assert!(hardness.left_blocked);
        assert!(hardness.right_blocked);
        assert!(!can_shift(&piece, &grid, -1));
        assert!(!can_shift(&piece, &grid, 1));
    }

    #[test]
    fn test_can_shift_rejects_non_unit_offsets() {
        let grid = Grid::new(10, 19);
        let piece = Piece::new(Shape::T, SpawnContext::Board);
        assert!(!can_shift(&piece, &grid, 0));
        assert!(!can_shift(&piece, &grid, 2));
    }

    #[test]
    fn test_resting_cells_on_empty_grid() {
        let grid = Grid::new(10, 19);
        let piece = Piece::new(Shape::O, SpawnContext::Board);
        assert_eq!(
            resting_cells(&piece, &grid),
            [(4, 17), (5, 17), (4, 18), (5, 18)]
        );
    }
}
