//! Error types for grid access, text parsing and pair placement.
//!
//! Every error here points at a defect in the caller (a bad coordinate, a
//! double placement, a malformed grid file). None of them is retried.

use std::fmt;

/// Grid access failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinates outside `[0, W) x [0, H)`
    OutOfBounds { x: i8, y: i8 },
    /// Strict write onto a non-empty cell
    PositionOccupied { x: i8, y: i8 },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "out_of_bounds",
            GridError::PositionOccupied { .. } => "position_occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "position is outside the grid",
            GridError::PositionOccupied { .. } => "position is already occupied",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridError::OutOfBounds { x, y } | GridError::PositionOccupied { x, y } => {
                write!(f, "{} at ({}, {})", self.message(), x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Text grid parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridParseError {
    /// More non-blank lines than the grid has rows
    TooManyRows { rows: usize },
    /// A row without exactly `GRID_WIDTH` symbols
    RowWidth { row: usize, width: usize },
    /// A symbol that is neither `.` nor a color letter
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

impl GridParseError {
    pub fn code(self) -> &'static str {
        match self {
            GridParseError::TooManyRows { .. } => "too_many_rows",
            GridParseError::RowWidth { .. } => "row_width",
            GridParseError::UnknownSymbol { .. } => "unknown_symbol",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridParseError::TooManyRows { .. } => "grid text has more rows than the grid",
            GridParseError::RowWidth { .. } => "grid row has the wrong number of cells",
            GridParseError::UnknownSymbol { .. } => "grid row contains an unknown symbol",
        }
    }
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridParseError::TooManyRows { rows } => write!(f, "{}: {}", self.message(), rows),
            GridParseError::RowWidth { row, width } => {
                write!(f, "{}: row {} has {}", self.message(), row, width)
            }
            GridParseError::UnknownSymbol { row, col, symbol } => {
                write!(f, "{}: {:?} at row {} col {}", self.message(), symbol, row, col)
            }
        }
    }
}

impl std::error::Error for GridParseError {}

/// Pair placement failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Axis or child column lies outside the grid
    ColumnOutOfBounds,
    /// No free cell left in a target column
    ColumnFull,
    /// The session already ended
    GameOver,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::ColumnOutOfBounds | PlaceError::ColumnFull => "invalid_place",
            PlaceError::GameOver => "game_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::ColumnOutOfBounds => "target column would place the pair out of bounds",
            PlaceError::ColumnFull => "target column has no room for the pair",
            PlaceError::GameOver => "game is over",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

impl From<GridError> for PlaceError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { .. } => PlaceError::ColumnOutOfBounds,
            GridError::PositionOccupied { .. } => PlaceError::ColumnFull,
        }
    }
}
