//! Eliminator - clears erased groups and tallies raw points

use crate::connectivity::Region;
use crate::grid::Grid;
use crate::types::{Color, PUYO_BASE_SCORE};

/// What one elimination removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elimination {
    /// Cells removed across all groups
    pub eliminated_count: u32,
    /// `eliminated_count * PUYO_BASE_SCORE`, before any bonus
    pub raw_score: u32,
    /// Distinct colors among the removed groups
    pub color_count: u32,
}

/// Raw points for one group of `size` cells
pub fn group_raw_score(size: usize) -> u32 {
    (size as u32).saturating_mul(PUYO_BASE_SCORE)
}

/// Remove every cell of every group from `grid`.
///
/// `groups` must come from a scan of this same grid with no mutation in
/// between. An empty slice leaves the grid untouched and returns zeros.
pub fn eliminate(grid: &mut Grid, groups: &[Region]) -> Elimination {
    let mut result = Elimination::default();
    let mut seen_colors = [false; Color::ALL.len()];

    for group in groups {
        for pos in group.positions() {
            grid.remove(pos.x, pos.y);
        }
        result.eliminated_count += group.size() as u32;
        result.raw_score = result.raw_score.saturating_add(group_raw_score(group.size()));
        seen_colors[group.color() as usize] = true;
    }

    result.color_count = seen_colors.iter().filter(|&&seen| seen).count() as u32;
    result
}
