//! Core chain logic - pure, deterministic, and testable
//!
//! This crate holds the grid model and the chain-reaction rules. It has
//! **zero dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: the same grid always resolves to the same result
//! - **Testable**: every rule is a free function over a [`Grid`]
//! - **Fast**: the grid is a `Copy` flat array; regions live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: 6x12 cell store with lenient reads and bounds-checked writes
//! - [`connectivity`]: flood-fill of same-colored regions and group discovery
//! - [`eliminate`]: erasing groups and the raw score they yield
//! - [`gravity`]: per-column compaction
//! - [`scoring`]: chain, group and color bonus tables
//! - [`chain`]: the resolve loop and its observer hooks
//! - [`pair`]: dropping a two-puyo pair into a column
//! - [`rng`]: seeded pair dealing with a two-pair preview
//! - [`playfield`]: a play session tying the pieces together
//!
//! # Rules
//!
//! - **Groups**: 4 or more orthogonally connected cells of one color
//! - **Simultaneous erase**: every group found in a scan is erased in the same step
//! - **Gravity**: after each erase, cells fall straight down within their column
//! - **Scoring**: `10 * cells * max(1, chain + group + color bonus)` per step
//! - **All clear**: a grid left empty after resolution earns a flat bonus
//!
//! # Example
//!
//! ```
//! use puyo_chain_core::{ChainResolver, Grid};
//!
//! // Reds erase, then the blue falls into a row of four blues
//! let grid = Grid::parse(
//!     "B.....\n\
//!      R.....\n\
//!      R.....\n\
//!      R.....\n\
//!      RBBB..",
//! )
//! .unwrap();
//!
//! let result = ChainResolver::default().resolve(grid);
//! assert_eq!(result.chain_count, 2);
//! assert!(result.all_clear);
//! ```

pub mod chain;
pub mod connectivity;
pub mod eliminate;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod pair;
pub mod playfield;
pub mod rng;
pub mod scoring;

pub use puyo_chain_types as types;

// Re-export commonly used types for convenience
pub use chain::{
    has_next_chain, resolve_chain, ChainObserver, ChainResolver, ChainResult, ChainStep,
    NoopObserver,
};
pub use connectivity::{
    find_connected_region, find_eliminable_groups, has_eliminable_group, Region,
};
pub use eliminate::{eliminate, group_raw_score, Elimination};
pub use error::{GridError, GridParseError, PlaceError};
pub use gravity::{apply_gravity, apply_gravity_to_column, is_settled};
pub use grid::Grid;
pub use pair::{drop_pair, landing_row, PuyoPair};
pub use playfield::Playfield;
pub use rng::{ColorQueue, SimpleRng};
pub use scoring::{ScoreTable, StepScore};
