//! Runtime configuration: score table file, trace path, move lists
//!
//! Environment variables:
//! - `PUYO_SCORE_CONFIG`: JSON score table (see [`ScoreConfig`])
//! - `PUYO_CHAIN_LOG_PATH`: JSON-lines chain trace; empty disables it
//! - `PUYO_COLORS`: colors dealt in play mode (1..=5, default 4)

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use puyo_chain_core::ScoreTable;
use puyo_chain_types::{Color, Rotation, DEFAULT_COLOR_COUNT, GRID_WIDTH};

/// Score table overrides; missing fields keep the standard values.
///
/// Tables are indexed the same way as [`ScoreTable`]: `chain_bonus[n]` is the
/// bonus for chain `n`, `group_bonus[n]` for `n` simultaneous groups and
/// `color_bonus[n]` for `n` distinct colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_bonus: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_bonus: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_bonus: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_clear_bonus: Option<u32>,
}

impl ScoreConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid score config")
    }

    /// Merge onto the standard table
    pub fn into_table(self) -> Result<ScoreTable> {
        let mut table = ScoreTable::default();
        if let Some(chain) = self.chain_bonus {
            table.chain_bonus = non_empty("chain_bonus", chain)?;
        }
        if let Some(group) = self.group_bonus {
            table.group_bonus = non_empty("group_bonus", group)?;
        }
        if let Some(color) = self.color_bonus {
            table.color_bonus = non_empty("color_bonus", color)?;
        }
        if let Some(bonus) = self.all_clear_bonus {
            table.all_clear_bonus = bonus;
        }
        Ok(table)
    }
}

fn non_empty(name: &str, values: Vec<u32>) -> Result<Vec<u32>> {
    if values.is_empty() {
        bail!("{} must not be empty", name);
    }
    Ok(values)
}

/// Read and validate a score table file
pub fn load_score_table(path: impl AsRef<Path>) -> Result<ScoreTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read score config {}", path.display()))?;
    ScoreConfig::from_json(&text)?
        .into_table()
        .with_context(|| format!("bad score config {}", path.display()))
}

/// Settings gathered from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub score_config: Option<String>,
    pub log_path: Option<String>,
    pub colors: u8,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            score_config: None,
            log_path: None,
            colors: DEFAULT_COLOR_COUNT,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        use std::env;

        Self::from_vars(
            env::var("PUYO_SCORE_CONFIG").ok(),
            env::var("PUYO_CHAIN_LOG_PATH").ok(),
            env::var("PUYO_COLORS").ok(),
        )
    }

    /// Build from raw variable values; blank paths are dropped and an
    /// unusable color count falls back to the default
    pub fn from_vars(
        score_config: Option<String>,
        log_path: Option<String>,
        colors: Option<String>,
    ) -> Self {
        Self {
            score_config: score_config.and_then(non_blank),
            log_path: log_path.and_then(non_blank),
            colors: colors
                .and_then(|s| parse_colors(&s))
                .unwrap_or(DEFAULT_COLOR_COUNT),
        }
    }

    /// Score table from `score_config`, or the standard one
    pub fn score_table(&self) -> Result<ScoreTable> {
        match &self.score_config {
            Some(path) => load_score_table(path),
            None => Ok(ScoreTable::default()),
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Color count in 1..=5
pub fn parse_colors(s: &str) -> Option<u8> {
    s.trim()
        .parse::<u8>()
        .ok()
        .filter(|n| (1..=Color::ALL.len() as u8).contains(n))
}

/// A planned drop: axis column and rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: i8,
    pub rotation: Rotation,
}

/// Parse `"col:rot,col:rot,..."`; the rotation defaults to north when omitted
pub fn parse_moves(s: &str) -> Result<Vec<Move>> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(entry: &str) -> Result<Move> {
    let (column, rotation) = match entry.split_once(':') {
        Some((c, r)) => (c.trim(), r.trim()),
        None => (entry, "north"),
    };
    let column: i8 = column
        .parse()
        .map_err(|_| anyhow!("invalid column in move {:?}", entry))?;
    if column < 0 || column >= GRID_WIDTH as i8 {
        bail!("column out of range in move {:?}", entry);
    }
    let rotation =
        Rotation::from_str(rotation).ok_or_else(|| anyhow!("invalid rotation in move {:?}", entry))?;
    Ok(Move { column, rotation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default_table() {
        let table = ScoreConfig::from_json("{}").unwrap().into_table().unwrap();
        assert_eq!(table, ScoreTable::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ScoreConfig::from_json(r#"{"all_clear_bonus": 0, "color_bonus": [0, 0, 2]}"#)
            .unwrap();
        let table = config.into_table().unwrap();
        assert_eq!(table.all_clear_bonus, 0);
        assert_eq!(table.color_bonus, vec![0, 0, 2]);
        assert_eq!(table.chain_bonus, ScoreTable::default().chain_bonus);
    }

    #[test]
    fn test_rejects_empty_table_and_unknown_fields() {
        let empty = ScoreConfig::from_json(r#"{"chain_bonus": []}"#).unwrap();
        assert!(empty.into_table().is_err());
        assert!(ScoreConfig::from_json(r#"{"chain": [1]}"#).is_err());
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(parse_colors("3"), Some(3));
        assert_eq!(parse_colors(" 5 "), Some(5));
        assert_eq!(parse_colors("0"), None);
        assert_eq!(parse_colors("6"), None);
        assert_eq!(parse_colors("many"), None);
    }

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("2:north, 3:E,0").unwrap();
        assert_eq!(
            moves,
            vec![
                Move { column: 2, rotation: Rotation::North },
                Move { column: 3, rotation: Rotation::East },
                Move { column: 0, rotation: Rotation::North },
            ]
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves("6:north").is_err());
        assert!(parse_moves("x:north").is_err());
        assert!(parse_moves("1:up").is_err());
    }

    #[test]
    fn test_runtime_config_from_vars() {
        let config = RuntimeConfig::from_vars(
            Some(" scores.json ".into()),
            Some("trace.jsonl".into()),
            Some("3".into()),
        );
        assert_eq!(config.score_config.as_deref(), Some("scores.json"));
        assert_eq!(config.log_path.as_deref(), Some("trace.jsonl"));
        assert_eq!(config.colors, 3);
    }

    #[test]
    fn test_runtime_config_fallbacks() {
        assert_eq!(RuntimeConfig::from_vars(None, None, None), RuntimeConfig::default());

        // Blank paths disable the file, bad color counts use the default
        let config = RuntimeConfig::from_vars(Some("".into()), Some("   ".into()), Some("9".into()));
        assert_eq!(config.score_config, None);
        assert_eq!(config.log_path, None);
        assert_eq!(config.colors, DEFAULT_COLOR_COUNT);

        let config = RuntimeConfig::from_vars(None, None, Some("none".into()));
        assert_eq!(config.colors, DEFAULT_COLOR_COUNT);
    }
}
