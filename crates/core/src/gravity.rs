//! Gravity compactor
//!
//! Each column is compacted against the floor independently with a single
//! bottom-up two-pointer pass; relative vertical order is preserved.

use crate::grid::Grid;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Compact column `x`; returns true if any cell moved
pub fn apply_gravity_to_column(grid: &mut Grid, x: i8) -> bool {
    let mut moved = false;
    let mut write_y = GRID_HEIGHT as i8 - 1;

    // Scan from bottom to top
    for read_y in (0..GRID_HEIGHT as i8).rev() {
        if !grid.is_occupied(x, read_y) {
            continue;
        }
        if write_y != read_y {
            // write_y is below read_y and already vacated
            moved |= grid.move_cell(x, read_y, write_y);
        }
        write_y -= 1;
    }

    moved
}

/// Compact every column; returns true if any cell moved
pub fn apply_gravity(grid: &mut Grid) -> bool {
    let mut moved = false;
    for x in 0..GRID_WIDTH as i8 {
        moved |= apply_gravity_to_column(grid, x);
    }
    moved
}

/// No occupied cell has an empty cell below it
pub fn is_settled(grid: &Grid) -> bool {
    (0..GRID_WIDTH as i8).all(|x| {
        (0..GRID_HEIGHT as i8 - 1).all(|y| !(grid.is_occupied(x, y) && grid.is_empty(x, y + 1)))
    })
}
