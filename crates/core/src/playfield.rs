//! Playfield session - grid, pair queue and running score
//!
//! Ties the collaborators around the chain engine together: deal a pair, drop
//! it, resolve the chain, bank the score, check the spawn cell. Timing,
//! animation and input stay with the caller.

use crate::chain::{ChainObserver, ChainResolver, ChainResult, NoopObserver};
use crate::error::PlaceError;
use crate::grid::Grid;
use crate::pair::{drop_pair, PuyoPair};
use crate::rng::ColorQueue;
use crate::scoring::ScoreTable;
use crate::types::{Rotation, SPAWN_X, SPAWN_Y};

/// One play session
#[derive(Debug, Clone)]
pub struct Playfield {
    grid: Grid,
    queue: ColorQueue,
    resolver: ChainResolver,
    score: u32,
    /// Total chain steps across all drops
    chains: u32,
    max_chain: u32,
    all_clears: u32,
    /// Pairs placed successfully
    pieces: u32,
    game_over: bool,
}

impl Playfield {
    pub fn new(seed: u32, color_count: u8) -> Self {
        Self::with_table(seed, color_count, ScoreTable::default())
    }

    pub fn with_table(seed: u32, color_count: u8, table: ScoreTable) -> Self {
        Self {
            grid: Grid::new(),
            queue: ColorQueue::new(seed, color_count),
            resolver: ChainResolver::new(table),
            score: 0,
            chains: 0,
            max_chain: 0,
            all_clears: 0,
            pieces: 0,
            game_over: false,
        }
    }

    /// Resume from an existing position
    pub fn from_grid(grid: Grid, seed: u32, color_count: u8) -> Self {
        let mut field = Self::new(seed, color_count);
        field.grid = grid;
        field.game_over = field.is_spawn_blocked();
        field
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chains(&self) -> u32 {
        self.chains
    }

    pub fn max_chain(&self) -> u32 {
        self.max_chain
    }

    pub fn all_clears(&self) -> u32 {
        self.all_clears
    }

    pub fn color_count(&self) -> u8 {
        self.queue.color_count()
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The next two pairs
    pub fn next_pairs(&self) -> &[PuyoPair; 2] {
        self.queue.peek()
    }

    /// Spawn cell is occupied
    pub fn is_spawn_blocked(&self) -> bool {
        self.grid.is_occupied(SPAWN_X, SPAWN_Y)
    }

    /// Drop the next pair at `column` with `rotation` and resolve the chain
    pub fn drop_next(&mut self, column: i8, rotation: Rotation) -> Result<ChainResult, PlaceError> {
        self.drop_next_with(column, rotation, &mut NoopObserver)
    }

    /// As [`Playfield::drop_next`], reporting chain progress to `observer`.
    ///
    /// A rejected placement leaves the grid and the queue untouched.
    pub fn drop_next_with<O: ChainObserver + ?Sized>(
        &mut self,
        column: i8,
        rotation: Rotation,
        observer: &mut O,
    ) -> Result<ChainResult, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }

        let pair = self.queue.peek()[0].with_rotation(rotation);
        let mut grid = self.grid;
        drop_pair(&mut grid, column, &pair)?;
        self.queue.draw();
        self.pieces += 1;

        let result = self.resolver.resolve_with(grid, observer);
        self.grid = result.grid;
        self.score = self.score.saturating_add(result.total_score);
        self.chains += result.chain_count;
        self.max_chain = self.max_chain.max(result.chain_count);
        if result.all_clear_bonus > 0 {
            self.all_clears += 1;
        }
        self.game_over = self.is_spawn_blocked();

        Ok(result)
    }

    /// Start over with a fresh grid and queue
    pub fn restart(&mut self, seed: u32) {
        let color_count = self.queue.color_count();
        self.grid.clear();
        self.queue = ColorQueue::new(seed, color_count);
        self.score = 0;
        self.chains = 0;
        self.max_chain = 0;
        self.all_clears = 0;
        self.pieces = 0;
        self.game_over = false;
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(1, crate::types::DEFAULT_COLOR_COUNT)
    }
}
