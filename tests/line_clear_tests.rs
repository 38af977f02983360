//! Line-clear engine tests

use blockfall::core::{line_clear, Cell, Grid};
use blockfall::types::Rgb;

const A: Rgb = Rgb::new(200, 0, 0);
const B: Rgb = Rgb::new(0, 200, 0);

fn fill_row(grid: &mut Grid, y: i8, color: Rgb, skip: Option<i8>) {
    for x in 0..grid.width() as i8 {
        if Some(x) != skip {
            grid.set_occupied(x, y, color);
        }
    }
}

#[test]
fn test_clear_scan_without_complete_rows_is_identity() {
    let mut grid = Grid::default();
    fill_row(&mut grid, 18, A, Some(3));
    fill_row(&mut grid, 17, B, Some(0));
    grid.set_occupied(5, 2, A);
    let before = grid.clone();

    assert_eq!(line_clear::clear_lines(&mut grid), 0);
    assert_eq!(grid, before);
    assert!(line_clear::complete_rows(&grid).is_empty());
}

#[test]
fn test_bottom_row_clear_compacts_three_row_grid() {
    // 10 wide, 3 rows: row 2 full of A, row 1 partly B, row 0 empty.
    let mut grid = Grid::with_size(10, 3);
    fill_row(&mut grid, 2, A, None);
    fill_row(&mut grid, 1, B, Some(9));
    let row1_before = grid.row(1).to_vec();

    assert_eq!(line_clear::complete_rows(&grid), vec![2]);
    let cleared = line_clear::clear_lines(&mut grid);

    assert_eq!(cleared, 1);
    assert_eq!(grid.row(2), row1_before.as_slice());
    assert!(grid.row(1).iter().all(|c| *c == Cell::EMPTY));
    assert!(grid.row(0).iter().all(|c| *c == Cell::EMPTY));
}

#[test]
fn test_multiple_rows_clear_in_one_pass() {
    let mut grid = Grid::default();
    fill_row(&mut grid, 18, A, None);
    fill_row(&mut grid, 17, B, Some(4));
    fill_row(&mut grid, 16, A, None);
    grid.set_occupied(2, 15, B);

    assert_eq!(line_clear::clear_lines(&mut grid), 2);

    // Partial row and the single cell both moved down by two.
    assert!(!grid.is_occupied(4, 18));
    assert_eq!(grid.get(0, 18), Some(Cell::hardened(B)));
    assert_eq!(grid.get(2, 17), Some(Cell::hardened(B)));
    assert_eq!(grid.occupied_count(), 10);
}

#[test]
fn test_colors_travel_with_their_cells() {
    let mut grid = Grid::default();
    fill_row(&mut grid, 18, A, None);
    grid.set_occupied(7, 17, B);

    line_clear::collapse_row(&mut grid, 18);
    assert_eq!(grid.get(7, 18), Some(Cell::hardened(B)));
    assert_eq!(grid.get(7, 17), Some(Cell::EMPTY));
}

#[test]
fn test_row_zero_is_emptied_not_duplicated() {
    let mut grid = Grid::with_size(10, 3);
    fill_row(&mut grid, 2, A, None);
    grid.set_occupied(6, 0, B);

    assert_eq!(line_clear::clear_lines(&mut grid), 1);

    // Row 0 moved down to row 1 and left an empty row behind it.
    assert_eq!(grid.get(6, 1), Some(Cell::hardened(B)));
    assert_eq!(grid.get(6, 0), Some(Cell::EMPTY));
    assert_eq!(grid.occupied_count(), 1);
}
