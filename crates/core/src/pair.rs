//! Pair placement - drops a two-puyo piece straight into the grid
//!
//! Movement and wall kicks belong to the input layer; this only takes a
//! target column and rotation, lets both halves fall to their landing cells and
//! writes them with the strict [`Grid::set`].

use crate::error::PlaceError;
use crate::grid::Grid;
use crate::types::{Color, Position, Rotation, GRID_WIDTH};

/// A falling pair: the axis puyo and the child that orbits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuyoPair {
    pub axis: Color,
    pub child: Color,
    /// Side of the axis the child sits on
    pub rotation: Rotation,
}

impl PuyoPair {
    /// New pair in spawn orientation (child above axis)
    pub fn new(axis: Color, child: Color) -> Self {
        Self {
            axis,
            child,
            rotation: Rotation::North,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }

    pub fn rotate_ccw(&mut self) {
        self.rotation = self.rotation.rotate_ccw();
    }

    /// Column the child occupies when the axis is in `column`
    pub fn child_column(&self, column: i8) -> i8 {
        column + self.rotation.child_offset().0
    }
}

/// Row a puyo dropped into column `x` comes to rest on; `None` when the column is full.
pub fn landing_row(grid: &Grid, x: i8) -> Option<i8> {
    let mut y = -1;
    while grid.is_empty(x, y + 1) {
        y += 1;
    }
    (y >= 0).then_some(y)
}

/// Drop `pair` with its axis in `column`.
///
/// Returns `[axis, child]` landing positions.
pub fn drop_pair(grid: &mut Grid, column: i8, pair: &PuyoPair) -> Result<[Position; 2], PlaceError> {
    let child_column = pair.child_column(column);
    let width = GRID_WIDTH as i8;
    if column < 0 || column >= width || child_column < 0 || child_column >= width {
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let (axis_pos, child_pos) = if column == child_column {
        let bottom = landing_row(grid, column).ok_or(PlaceError::ColumnFull)?;
        if bottom == 0 {
            return Err(PlaceError::ColumnFull);
        }
        match pair.rotation {
            // Child below the axis lands first
            Rotation::South => (
                Position::new(column, bottom - 1),
                Position::new(column, bottom),
            ),
            _ => (
                Position::new(column, bottom),
                Position::new(column, bottom - 1),
            ),
        }
    } else {
        let axis_y = landing_row(grid, column).ok_or(PlaceError::ColumnFull)?;
        let child_y = landing_row(grid, child_column).ok_or(PlaceError::ColumnFull)?;
        (
            Position::new(column, axis_y),
            Position::new(child_column, child_y),
        )
    };

    grid.set(axis_pos.x, axis_pos.y, pair.axis)?;
    grid.set(child_pos.x, child_pos.y, pair.child)?;
    Ok([axis_pos, child_pos])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_drop_on_empty_grid() {
        let mut grid = Grid::new();
        let pair = PuyoPair::new(Color::Red, Color::Blue);
        let placed = drop_pair(&mut grid, 2, &pair).unwrap();

        assert_eq!(placed, [Position::new(2, 11), Position::new(2, 10)]);
        assert_eq!(grid.get(2, 11), Some(Color::Red));
        assert_eq!(grid.get(2, 10), Some(Color::Blue));
    }

    #[test]
    fn test_south_rotation_puts_child_underneath() {
        let mut grid = Grid::new();
        let pair = PuyoPair::new(Color::Red, Color::Blue).with_rotation(Rotation::South);
        drop_pair(&mut grid, 0, &pair).unwrap();

        assert_eq!(grid.get(0, 11), Some(Color::Blue));
        assert_eq!(grid.get(0, 10), Some(Color::Red));
    }

    #[test]
    fn test_horizontal_halves_fall_independently() {
        let mut grid = Grid::parse("G.....\nG.....\nG.....").unwrap();
        let pair = PuyoPair::new(Color::Yellow, Color::Purple).with_rotation(Rotation::West);
        let placed = drop_pair(&mut grid, 1, &pair).unwrap();

        assert_eq!(placed, [Position::new(1, 11), Position::new(0, 8)]);
    }

    #[test]
    fn test_out_of_bounds_columns() {
        let mut grid = Grid::new();
        let east = PuyoPair::new(Color::Red, Color::Red).with_rotation(Rotation::East);
        assert_eq!(drop_pair(&mut grid, 5, &east), Err(PlaceError::ColumnOutOfBounds));
        let west = PuyoPair::new(Color::Red, Color::Red).with_rotation(Rotation::West);
        assert_eq!(drop_pair(&mut grid, 0, &west), Err(PlaceError::ColumnOutOfBounds));
        assert!(grid.is_all_clear());
    }

    #[test]
    fn test_column_without_room() {
        let mut grid = Grid::parse(&"..B...\n".repeat(11)).unwrap();
        let pair = PuyoPair::new(Color::Red, Color::Green);
        assert_eq!(drop_pair(&mut grid, 2, &pair), Err(PlaceError::ColumnFull));
        assert_eq!(grid.column_height(2), 11);
    }

    #[test]
    fn test_landing_row() {
        let grid = Grid::parse("R.....\nR.....").unwrap();
        assert_eq!(landing_row(&grid, 0), Some(9));
        assert_eq!(landing_row(&grid, 1), Some(11));
        assert_eq!(landing_row(&grid, 7), None);
    }
}
