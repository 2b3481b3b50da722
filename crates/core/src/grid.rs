//! Grid module - fixed-size cell store
//!
//! The grid is 6 columns by 12 rows; each cell is empty or holds a [`Color`].
//! Uses a flat array so the whole grid is `Copy` and never allocates.
//! Coordinates: (x, y) where x ranges 0..5 (left to right), y ranges 0..11 (top to bottom).
//!
//! Access policy:
//! - reads are lenient: out-of-bounds [`Grid::get`] returns the empty sentinel `None`
//! - writes are bounds-checked: [`Grid::set`] and [`Grid::put`] return [`GridError`]
//! - [`Grid::remove`] never fails

use std::fmt;

use crate::error::{GridError, GridParseError};
use crate::types::{Cell, Color, Position, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// The playfield - 6 columns x 12 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_valid_position(x, y) {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Pure bounds check
    #[inline]
    pub fn is_valid_position(x: i8, y: i8) -> bool {
        Position::new(x, y).in_bounds()
    }

    /// Color at (x, y); `None` when the cell is empty or out of bounds
    #[inline]
    pub fn get(&self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Color at `pos`; see [`Grid::get`]
    #[inline]
    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.x, pos.y)
    }

    /// Strict write: the cell must be in bounds and empty
    pub fn set(&mut self, x: i8, y: i8, color: Color) -> Result<(), GridError> {
        let idx = Self::index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        if self.cells[idx].is_some() {
            return Err(GridError::PositionOccupied { x, y });
        }
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Lenient write: overwrites whatever is there
    pub fn put(&mut self, x: i8, y: i8, cell: Cell) -> Result<(), GridError> {
        let idx = Self::index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Empty the cell; no-op when already empty or out of bounds
    pub fn remove(&mut self, x: i8, y: i8) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = None;
        }
    }

    /// Move the cell at (x, from_y) to (x, to_y), leaving the source empty.
    /// Returns false and changes nothing when either row is out of bounds.
    pub(crate) fn move_cell(&mut self, x: i8, from_y: i8, to_y: i8) -> bool {
        match (Self::index(x, from_y), Self::index(x, to_y)) {
            (Some(from), Some(to)) => {
                self.cells[to] = self.cells[from].take();
                true
            }
            _ => false,
        }
    }

    /// In bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx].is_none())
    }

    /// In bounds and occupied
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Every cell is empty
    pub fn is_all_clear(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of occupied cells in column `x` (0 when out of bounds)
    pub fn column_height(&self, x: i8) -> usize {
        if x < 0 || x >= GRID_WIDTH as i8 {
            return 0;
        }
        (0..GRID_HEIGHT as i8)
            .filter(|&y| self.is_occupied(x, y))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_WIDTH as usize)
    }

    /// Parse the text form: one line per row, `.` for empty, color letters otherwise.
    ///
    /// Blank lines are skipped and rows are bottom-aligned, so a three-line text
    /// fills rows 9..=11.
    ///
    /// ```
    /// use puyo_chain_core::Grid;
    /// use puyo_chain_types::Color;
    ///
    /// let grid = Grid::parse("R.....\nRRB...").unwrap();
    /// assert_eq!(grid.get(0, 11), Some(Color::Red));
    /// assert_eq!(grid.get(2, 11), Some(Color::Blue));
    /// assert_eq!(grid.get(0, 10), Some(Color::Red));
    /// assert_eq!(grid.get(0, 9), None);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() > GRID_HEIGHT as usize {
            return Err(GridParseError::TooManyRows { rows: lines.len() });
        }

        let mut grid = Self::new();
        let top = GRID_HEIGHT as usize - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let row = top + i;
            let width = line.chars().count();
            if width != GRID_WIDTH as usize {
                return Err(GridParseError::RowWidth { row, width });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '.' => None,
                    other => Some(Color::from_symbol(other).ok_or(
                        GridParseError::UnknownSymbol {
                            row,
                            col,
                            symbol: other,
                        },
                    )?),
                };
                grid.cells[row * GRID_WIDTH as usize + col] = cell;
            }
        }
        Ok(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = cell.map(|c| c.symbol()).unwrap_or('.');
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(5, 0), Some(5));
        assert_eq!(Grid::index(0, 1), Some(6));
        assert_eq!(Grid::index(5, 11), Some(71));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(6, 0), None);
        assert_eq!(Grid::index(0, 12), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();
        grid.set(0, 0, Color::Red).unwrap();
        grid.set(3, 10, Color::Green).unwrap();

        assert_eq!(grid.cells[0], Some(Color::Red));
        assert_eq!(grid.cells[10 * 6 + 3], Some(Color::Green));
    }

    #[test]
    fn test_cells_view_is_row_major() {
        let grid = Grid::parse("R....B").unwrap();
        let cells = grid.cells();
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[66], Some(Color::Red));
        assert_eq!(cells[71], Some(Color::Blue));
        assert_eq!(cells.iter().flatten().count(), grid.occupied_count());
    }

    #[test]
    fn test_move_cell() {
        let mut grid = Grid::new();
        grid.set(1, 3, Color::Yellow).unwrap();

        assert!(grid.move_cell(1, 3, 11));
        assert_eq!(grid.get(1, 11), Some(Color::Yellow));
        assert!(grid.is_empty(1, 3));

        // Same row is a no-op that keeps the cell
        assert!(grid.move_cell(1, 11, 11));
        assert_eq!(grid.get(1, 11), Some(Color::Yellow));

        let before = grid;
        assert!(!grid.move_cell(1, 11, 12));
        assert!(!grid.move_cell(6, 0, 11));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let text = "......\n......\n......\n......\n......\n......\n\
                    ......\n......\n......\nY.....\nRB....\nRBGP..";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Grid::parse("RRR"),
            Err(GridParseError::RowWidth { row: 11, width: 3 })
        );
        assert_eq!(
            Grid::parse("RRX..."),
            Err(GridParseError::UnknownSymbol {
                row: 11,
                col: 2,
                symbol: 'X'
            })
        );
        let tall = "......\n".repeat(13);
        assert_eq!(
            Grid::parse(&tall),
            Err(GridParseError::TooManyRows { rows: 13 })
        );
    }

    #[test]
    fn test_column_height() {
        let grid = Grid::parse("R.....\nR.....\nRB....").unwrap();
        assert_eq!(grid.column_height(0), 3);
        assert_eq!(grid.column_height(1), 1);
        assert_eq!(grid.column_height(2), 0);
        assert_eq!(grid.column_height(-1), 0);
        assert_eq!(grid.occupied_count(), 4);
    }
}
