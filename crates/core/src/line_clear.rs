//! Line-clear engine
//!
//! Runs right after a piece hardens, before the next piece spawns, so the grid
//! alone is the full picture of what is settled.
//!
//! Completed rows are removed one at a time in increasing row order. Removing
//! row `y` copies every row above it one step down and empties row 0. Rows
//! below `y` are untouched, so a later (lower) completed row is still at its
//! original index when its turn comes.

use crate::grid::Grid;

/// Indices of every complete row, top to bottom
pub fn complete_rows(grid: &Grid) -> Vec<usize> {
    (0..grid.height() as usize)
        .filter(|&y| grid.is_row_complete(y))
        .collect()
}

/// Remove row `y` and pull every row above it down by one
pub fn collapse_row(grid: &mut Grid, y: usize) {
    for y3 in (1..=y).rev() {
        grid.copy_row_down(y3 - 1, y3);
    }
    grid.clear_row(0);
}

/// Remove every complete row, returning how many were removed.
///
/// The score counts one point per returned row.
pub fn clear_lines(grid: &mut Grid) -> u32 {
    let rows = complete_rows(grid);
    for &y in &rows {
        collapse_row(grid, y);
    }
    rows.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    const A: Rgb = Rgb::new(10, 0, 0);
    const B: Rgb = Rgb::new(0, 20, 0);

    fn fill_row(grid: &mut Grid, y: i8, color: Rgb) {
        for x in 0..grid.width() as i8 {
            grid.set_occupied(x, y, color);
        }
    }

    #[test]
    fn test_no_complete_rows_leaves_grid_unchanged() {
        let mut grid = Grid::new(10, 19);
        for x in 0..9 {
            grid.set_occupied(x, 18, A);
        }
        grid.set_occupied(3, 10, B);
        let before = grid.clone();

        assert_eq!(clear_lines(&mut grid), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_two_adjacent_rows_clear_without_double_shift() {
        let mut grid = Grid::with_size(4, 5);
        grid.set_occupied(1, 1, B); // marker above the stack
        grid.set_occupied(2, 2, A); // partial row stays
        fill_row(&mut grid, 3, A);
        fill_row(&mut grid, 4, A);

        assert_eq!(complete_rows(&grid), vec![3, 4]);
        assert_eq!(clear_lines(&mut grid), 2);

        assert!(grid.is_occupied(1, 3));
        assert!(grid.is_occupied(2, 4));
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_split_rows_clear() {
        let mut grid = Grid::with_size(3, 5);
        fill_row(&mut grid, 1, A);
        grid.set_occupied(0, 2, B);
        fill_row(&mut grid, 3, A);
        grid.set_occupied(2, 4, B);

        assert_eq!(clear_lines(&mut grid), 2);
        // Only the removal of row 3 moves row 2's cell.
        assert!(grid.is_occupied(0, 3));
        assert!(grid.is_occupied(2, 4));
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_row_zero_is_emptied_after_collapse() {
        let mut grid = Grid::with_size(2, 3);
        grid.set_occupied(0, 0, B);
        fill_row(&mut grid, 2, A);

        collapse_row(&mut grid, 2);

        assert!(!grid.is_occupied(0, 0));
        assert!(grid.is_occupied(0, 1));
        assert_eq!(grid.occupied_count(), 1);
    }
}
