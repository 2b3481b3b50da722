//! Chain resolver - the find / eliminate / fall loop
//!
//! Resolution settles the grid, then repeats [find groups → eliminate → gravity]
//! until a scan finds nothing to erase. Every pass erases at least
//! `MIN_GROUP_SIZE` cells, so the loop runs at most [`MAX_CHAIN_STEPS`] times.
//!
//! # Example
//!
//! ```
//! use puyo_chain_core::{resolve_chain, Grid};
//!
//! let grid = Grid::parse("R.....\nR.....\nRR....").unwrap();
//! let result = resolve_chain(grid);
//!
//! assert_eq!(result.chain_count, 1);
//! assert!(result.all_clear);
//! assert_eq!(result.total_score, 40 + 2100);
//! ```

use crate::connectivity::{find_eliminable_groups, has_eliminable_group, Region};
use crate::eliminate::eliminate;
use crate::gravity::apply_gravity;
use crate::grid::Grid;
use crate::scoring::ScoreTable;
use crate::types::MAX_CHAIN_STEPS;

/// One elimination pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStep {
    /// 1-based chain number
    pub chain: u32,
    /// Groups erased this pass, in discovery order
    pub groups: Vec<Region>,
    pub eliminated_count: u32,
    pub raw_score: u32,
    pub color_count: u32,
    pub multiplier: u32,
    pub step_score: u32,
}

/// Outcome of resolving a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainResult {
    /// Passes that erased at least one group
    pub chain_count: u32,
    /// Sum of step scores plus the all-clear bonus
    pub total_score: u32,
    pub total_eliminated: u32,
    /// The grid is empty after resolution
    pub all_clear: bool,
    /// Bonus added for the all-clear (0 unless the final grid is empty)
    pub all_clear_bonus: u32,
    pub steps: Vec<ChainStep>,
    /// Final settled grid
    pub grid: Grid,
}

/// Hooks invoked while a chain resolves.
///
/// All methods default to no-ops; implement only what you need.
pub trait ChainObserver {
    /// After a pass erased its groups and the grid fell
    fn on_step(&mut self, _step: &ChainStep, _grid: &Grid) {}

    /// The grid is empty after resolution
    fn on_all_clear(&mut self, _bonus: u32) {}

    /// Resolution finished
    fn on_finish(&mut self, _result: &ChainResult) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ChainObserver for NoopObserver {}

/// Resolves grids against a [`ScoreTable`]
#[derive(Debug, Clone, Default)]
pub struct ChainResolver {
    table: ScoreTable,
}

impl ChainResolver {
    pub fn new(table: ScoreTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Resolve `grid` to a stable state
    pub fn resolve(&self, grid: Grid) -> ChainResult {
        self.resolve_with(grid, &mut NoopObserver)
    }

    /// Resolve `grid`, reporting progress to `observer`
    pub fn resolve_with<O: ChainObserver + ?Sized>(
        &self,
        mut grid: Grid,
        observer: &mut O,
    ) -> ChainResult {
        let mut steps = Vec::new();
        let mut total_score: u32 = 0;
        let mut total_eliminated: u32 = 0;

        // Cells from the last placement may not be resting yet
        apply_gravity(&mut grid);

        loop {
            let groups = find_eliminable_groups(&grid);
            if groups.is_empty() {
                break;
            }
            debug_assert!(steps.len() < MAX_CHAIN_STEPS);

            let chain = steps.len() as u32 + 1;
            let elimination = eliminate(&mut grid, &groups);
            let score = self.table.step_score(
                elimination.raw_score,
                chain,
                groups.len() as u32,
                elimination.color_count,
            );
            apply_gravity(&mut grid);

            total_score = total_score.saturating_add(score.total);
            total_eliminated += elimination.eliminated_count;

            let step = ChainStep {
                chain,
                groups,
                eliminated_count: elimination.eliminated_count,
                raw_score: elimination.raw_score,
                color_count: elimination.color_count,
                multiplier: score.multiplier,
                step_score: score.total,
            };
            observer.on_step(&step, &grid);
            steps.push(step);
        }

        let all_clear = grid.is_all_clear();
        let all_clear_bonus = if all_clear {
            self.table.all_clear_bonus
        } else {
            0
        };
        if all_clear {
            total_score = total_score.saturating_add(all_clear_bonus);
            observer.on_all_clear(all_clear_bonus);
        }

        let result = ChainResult {
            chain_count: steps.len() as u32,
            total_score,
            total_eliminated,
            all_clear,
            all_clear_bonus,
            steps,
            grid,
        };
        observer.on_finish(&result);
        result
    }
}

/// Resolve with the default score table
pub fn resolve_chain(grid: Grid) -> ChainResult {
    ChainResolver::default().resolve(grid)
}

/// Whether resolving `grid` (after it settles) would erase anything
pub fn has_next_chain(grid: &Grid) -> bool {
    let mut settled = *grid;
    apply_gravity(&mut settled);
    has_eliminable_group(&settled)
}
