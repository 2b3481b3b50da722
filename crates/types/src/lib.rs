//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they are usable
//! from the chain engine, the report layer and the CLI alike.
//!
//! # Grid Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 12 rows (indexed 0-11, row 0 is the top)
//! - **Spawn cell**: (2, 0)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_GROUP_SIZE` | 4 | Smallest region that is erased |
//! | `PUYO_BASE_SCORE` | 10 | Raw points per erased cell |
//! | `ALL_CLEAR_BONUS` | 2100 | Added once when resolution leaves the grid empty |
//!
//! The step multiplier is `max(1, chain + group + color)` looked up from
//! [`CHAIN_BONUS`], [`GROUP_BONUS`] and [`COLOR_BONUS`]; each table is capped at
//! its last entry.
//!
//! # Examples
//!
//! ```
//! use puyo_chain_types::{Color, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Color::from_symbol('r'), Some(Color::Red));
//! assert_eq!(Color::Purple.symbol(), 'P');
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(GRID_WIDTH, 6);
//! assert_eq!(GRID_HEIGHT, 12);
//! ```

/// Grid width in cells (6 columns)
pub const GRID_WIDTH: u8 = 6;

/// Grid height in cells (12 rows)
pub const GRID_HEIGHT: u8 = 12;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Column a new pair spawns in
pub const SPAWN_X: i8 = 2;

/// Row a new pair's axis spawns in
pub const SPAWN_Y: i8 = 0;

/// Smallest connected same-color region that gets erased
pub const MIN_GROUP_SIZE: usize = 4;

/// Upper bound on elimination passes for one resolution.
///
/// Every pass erases at least `MIN_GROUP_SIZE` cells from a grid of `GRID_CELLS`.
pub const MAX_CHAIN_STEPS: usize = GRID_CELLS / MIN_GROUP_SIZE;

/// Raw points awarded per erased cell
pub const PUYO_BASE_SCORE: u32 = 10;

/// Chain bonus indexed by chain number (index 0 unused).
///
/// Chains past the end of the table use the last entry (512).
pub const CHAIN_BONUS: [u32; 20] = [
    0, 1, 8, 16, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 480, 512,
];

/// Simultaneous-group bonus indexed by the number of groups erased in one step
pub const GROUP_BONUS: [u32; 8] = [0, 0, 3, 4, 5, 6, 7, 10];

/// Color bonus indexed by the number of distinct colors erased in one step
pub const COLOR_BONUS: [u32; 5] = [0, 0, 3, 6, 12];

/// Bonus added when a resolution leaves the grid empty
pub const ALL_CLEAR_BONUS: u32 = 2100;

/// Number of colors dealt by default
pub const DEFAULT_COLOR_COUNT: u8 = 4;

/// Puyo colors
///
/// Cells carry nothing but their color; two cells of the same color are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Color {
    /// All colors in dealing order
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
    ];

    /// Parse from a one-letter symbol (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_chain_types::Color;
    ///
    /// assert_eq!(Color::from_symbol('B'), Some(Color::Blue));
    /// assert_eq!(Color::from_symbol('g'), Some(Color::Green));
    /// assert_eq!(Color::from_symbol('.'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            'P' => Some(Color::Purple),
            _ => None,
        }
    }

    /// Uppercase one-letter symbol used by the text grid format
    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
        }
    }

    /// Parse from a full name or a symbol (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "blue" | "b" => Some(Color::Blue),
            "green" | "g" => Some(Color::Green),
            "yellow" | "y" => Some(Color::Yellow),
            "purple" | "p" => Some(Color::Purple),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty cell
/// - `Some(Color)`: occupied by a puyo of that color
pub type Cell = Option<Color>;

/// A grid coordinate; `x` is the column, `y` the row (0 = top).
///
/// Signed so neighbour arithmetic can step off the grid and be rejected by the
/// bounds check rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the position lies inside the grid
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH as i8 && self.y >= 0 && self.y < GRID_HEIGHT as i8
    }
}

/// Orthogonal neighbour offsets: up, down, left, right
pub const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Side of the axis puyo the child puyo sits on
///
/// - **North**: child above the axis (spawn orientation)
/// - **East**: child to the right
/// - **South**: child below
/// - **West**: child to the left
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use puyo_chain_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Offset of the child puyo relative to the axis puyo
    pub fn child_offset(&self) -> (i8, i8) {
        match self {
            Rotation::North => (0, -1),
            Rotation::East => (1, 0),
            Rotation::South => (0, 1),
            Rotation::West => (-1, 0),
        }
    }

    /// Parse rotation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}
