//! Scoring module - chain, group and color bonuses
//!
//! A chain step scores `raw_score * multiplier` where
//! `multiplier = max(1, chain_bonus + group_bonus + color_bonus)`.
//! Each bonus is a table lookup capped at the table's last entry.
//! The all-clear bonus is added once, after the last step.

use crate::types::{ALL_CLEAR_BONUS, CHAIN_BONUS, COLOR_BONUS, GROUP_BONUS};

/// Bonus tables and the all-clear bonus.
///
/// Plain data so it can be built from configuration; [`Default`] gives the
/// standard tables from [`crate::types`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    /// Indexed by chain number (index 0 unused)
    pub chain_bonus: Vec<u32>,
    /// Indexed by simultaneous group count
    pub group_bonus: Vec<u32>,
    /// Indexed by distinct color count
    pub color_bonus: Vec<u32>,
    pub all_clear_bonus: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            chain_bonus: CHAIN_BONUS.to_vec(),
            group_bonus: GROUP_BONUS.to_vec(),
            color_bonus: COLOR_BONUS.to_vec(),
            all_clear_bonus: ALL_CLEAR_BONUS,
        }
    }
}

/// Capped table lookup; empty tables read as 0
fn lookup(table: &[u32], index: usize) -> u32 {
    table
        .get(index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(0)
}

/// Score breakdown for one chain step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepScore {
    pub chain_bonus: u32,
    pub group_bonus: u32,
    pub color_bonus: u32,
    pub multiplier: u32,
    pub total: u32,
}

impl ScoreTable {
    pub fn chain_bonus(&self, chain: u32) -> u32 {
        if chain == 0 {
            return 0;
        }
        lookup(&self.chain_bonus, chain as usize)
    }

    pub fn group_bonus(&self, groups: u32) -> u32 {
        if groups <= 1 {
            return 0;
        }
        lookup(&self.group_bonus, groups as usize)
    }

    pub fn color_bonus(&self, colors: u32) -> u32 {
        if colors <= 1 {
            return 0;
        }
        lookup(&self.color_bonus, colors as usize)
    }

    /// Multiplier applied to a step's raw score; never below 1
    pub fn multiplier(&self, chain: u32, groups: u32, colors: u32) -> u32 {
        self.chain_bonus(chain)
            .saturating_add(self.group_bonus(groups))
            .saturating_add(self.color_bonus(colors))
            .max(1)
    }

    /// Full breakdown for a step
    pub fn step_score(&self, raw_score: u32, chain: u32, groups: u32, colors: u32) -> StepScore {
        let chain_bonus = self.chain_bonus(chain);
        let group_bonus = self.group_bonus(groups);
        let color_bonus = self.color_bonus(colors);
        let multiplier = self.multiplier(chain, groups, colors);

        StepScore {
            chain_bonus,
            group_bonus,
            color_bonus,
            multiplier,
            total: raw_score.saturating_mul(multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_bonus_table() {
        let table = ScoreTable::default();
        assert_eq!(table.chain_bonus(0), 0);
        assert_eq!(table.chain_bonus(1), 1);
        assert_eq!(table.chain_bonus(2), 8);
        assert_eq!(table.chain_bonus(3), 16);
        assert_eq!(table.chain_bonus(4), 32);
        assert_eq!(table.chain_bonus(5), 64);
        assert_eq!(table.chain_bonus(6), 96);
        assert_eq!(table.chain_bonus(19), 512);
        assert_eq!(table.chain_bonus(40), 512); // Capped
    }

    #[test]
    fn test_group_and_color_bonus() {
        let table = ScoreTable::default();
        assert_eq!(table.group_bonus(1), 0);
        assert_eq!(table.group_bonus(2), 3);
        assert_eq!(table.group_bonus(7), 10);
        assert_eq!(table.group_bonus(12), 10);

        assert_eq!(table.color_bonus(1), 0);
        assert_eq!(table.color_bonus(2), 3);
        assert_eq!(table.color_bonus(3), 6);
        assert_eq!(table.color_bonus(5), 12);
    }

    #[test]
    fn test_multiplier_floor() {
        let table = ScoreTable {
            chain_bonus: vec![0, 0],
            group_bonus: Vec::new(),
            color_bonus: Vec::new(),
            all_clear_bonus: 0,
        };
        assert_eq!(table.multiplier(1, 1, 1), 1);
        assert_eq!(table.multiplier(9, 3, 3), 1);
    }

    #[test]
    fn test_step_score_breakdown() {
        let table = ScoreTable::default();

        // Single group, first chain: raw points only
        let step = table.step_score(40, 1, 1, 1);
        assert_eq!(step.multiplier, 1);
        assert_eq!(step.total, 40);

        // Two colors at once on the second chain
        let step = table.step_score(80, 2, 2, 2);
        assert_eq!(step.chain_bonus, 8);
        assert_eq!(step.group_bonus, 3);
        assert_eq!(step.color_bonus, 3);
        assert_eq!(step.multiplier, 14);
        assert_eq!(step.total, 1120);
    }

    #[test]
    fn test_step_score_saturates() {
        let table = ScoreTable::default();
        let step = table.step_score(u32::MAX, 19, 1, 1);
        assert_eq!(step.total, u32::MAX);
    }
}
