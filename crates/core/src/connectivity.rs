//! Connectivity module - flood fill and eliminable-group search
//!
//! [`find_connected_region`] collects the maximal orthogonally-connected
//! same-color region around one cell. [`find_eliminable_groups`] partitions the
//! whole grid into such regions with a single row-major scan and keeps the ones
//! of at least [`MIN_GROUP_SIZE`] cells.
//!
//! Both run on the stack: the visited set is a `[bool; GRID_CELLS]` and region
//! positions live in an `ArrayVec` sized to the grid.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{
    Color, Position, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH, MIN_GROUP_SIZE, NEIGHBOR_OFFSETS,
};

/// A maximal same-color connected set of positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    color: Color,
    positions: ArrayVec<Position, GRID_CELLS>,
}

impl Region {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Positions in discovery order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn size(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Whether the region is large enough to be erased
    pub fn is_eliminable(&self) -> bool {
        self.size() >= MIN_GROUP_SIZE
    }
}

/// Visited set keyed by flat cell index
struct Visited([bool; GRID_CELLS]);

impl Visited {
    fn new() -> Self {
        Self([false; GRID_CELLS])
    }

    #[inline]
    fn slot(pos: Position) -> usize {
        pos.y as usize * GRID_WIDTH as usize + pos.x as usize
    }

    /// Mark `pos`; returns false if it was already marked
    #[inline]
    fn mark(&mut self, pos: Position) -> bool {
        let slot = &mut self.0[Self::slot(pos)];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    #[inline]
    fn contains(&self, pos: Position) -> bool {
        self.0[Self::slot(pos)]
    }
}

/// Depth-first fill from an occupied in-bounds `start`, marking into `visited`.
fn flood_fill(grid: &Grid, start: Position, color: Color, visited: &mut Visited) -> Region {
    let mut positions = ArrayVec::<Position, GRID_CELLS>::new();
    let mut stack = ArrayVec::<Position, GRID_CELLS>::new();

    visited.mark(start);
    stack.push(start);

    while let Some(pos) = stack.pop() {
        positions.push(pos);
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let next = pos.offset(dx, dy);
            if !next.in_bounds() || grid.at(next) != Some(color) {
                continue;
            }
            // Each cell is marked before it is pushed, so neither buffer can
            // exceed GRID_CELLS.
            if visited.mark(next) {
                stack.push(next);
            }
        }
    }

    Region { color, positions }
}

/// Region of same-colored cells connected to `start`.
///
/// Returns `None` (the empty region) when `start` is empty or off the grid.
///
/// ```
/// use puyo_chain_core::{find_connected_region, Grid};
/// use puyo_chain_types::{Color, Position};
///
/// let grid = Grid::parse("R.....\nRRB...").unwrap();
/// let region = find_connected_region(&grid, Position::new(0, 11)).unwrap();
/// assert_eq!(region.color(), Color::Red);
/// assert_eq!(region.size(), 3);
/// assert!(find_connected_region(&grid, Position::new(5, 0)).is_none());
/// ```
pub fn find_connected_region(grid: &Grid, start: Position) -> Option<Region> {
    let color = grid.at(start)?;
    let mut visited = Visited::new();
    Some(flood_fill(grid, start, color, &mut visited))
}

/// Every region of at least [`MIN_GROUP_SIZE`] cells, in row-major discovery order.
///
/// Regions never overlap: each occupied cell is visited exactly once.
pub fn find_eliminable_groups(grid: &Grid) -> Vec<Region> {
    let mut visited = Visited::new();
    let mut groups = Vec::new();

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            let pos = Position::new(x, y);
            if visited.contains(pos) {
                continue;
            }
            let Some(color) = grid.at(pos) else {
                continue;
            };
            let region = flood_fill(grid, pos, color, &mut visited);
            if region.is_eliminable() {
                groups.push(region);
            }
        }
    }

    groups
}

/// Whether an elimination would happen on `grid` as it stands
pub fn has_eliminable_group(grid: &Grid) -> bool {
    !find_eliminable_groups(grid).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_does_not_cross_diagonals() {
        let grid = Grid::parse("R.....\n.R....\nR.R...").unwrap();
        for pos in [
            Position::new(0, 9),
            Position::new(1, 10),
            Position::new(0, 11),
            Position::new(2, 11),
        ] {
            assert_eq!(find_connected_region(&grid, pos).unwrap().size(), 1);
        }
    }

    #[test]
    fn test_region_stops_at_other_colors() {
        let grid = Grid::parse("RRBRR.").unwrap();
        let left = find_connected_region(&grid, Position::new(0, 11)).unwrap();
        assert_eq!(left.size(), 2);
        assert!(left.contains(Position::new(1, 11)));
        assert!(!left.contains(Position::new(3, 11)));
    }

    #[test]
    fn test_region_is_deterministic() {
        let grid = Grid::parse("GGG...\nG.GG..\nGGBG..").unwrap();
        let start = Position::new(0, 11);
        let mut a = find_connected_region(&grid, start).unwrap().positions().to_vec();
        let mut b = find_connected_region(&grid, start).unwrap().positions().to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
        assert_eq!(a.len(), 9);
    }

    #[test]
    fn test_full_grid_single_color_region() {
        let grid = Grid::parse(&"YYYYYY\n".repeat(12)).unwrap();
        let region = find_connected_region(&grid, Position::new(3, 6)).unwrap();
        assert_eq!(region.size(), GRID_CELLS);
        assert_eq!(find_eliminable_groups(&grid).len(), 1);
    }

    #[test]
    fn test_groups_discovered_row_major() {
        let grid = Grid::parse("....BB\n....BB\nRRRR..").unwrap();
        let groups = find_eliminable_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].color(), Color::Blue);
        assert_eq!(groups[1].color(), Color::Red);
    }

    #[test]
    fn test_small_regions_excluded() {
        let grid = Grid::parse("RRR...\nBBB...").unwrap();
        assert!(find_eliminable_groups(&grid).is_empty());
        assert!(!has_eliminable_group(&grid));
    }
}
