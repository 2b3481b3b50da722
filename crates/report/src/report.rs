//! Serializable chain and session reports
//!
//! Wire names are lowercase strings; positions are `[x, y]` pairs and boards
//! are top-to-bottom rows in the text grid format.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use puyo_chain_core::{ChainResult, ChainStep, Grid, GridParseError, Playfield, Region};
use puyo_chain_types::{Color, Position, Rotation, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorLower {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "purple")]
    Purple,
}

impl<'de> Deserialize<'de> for ColorLower {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        Color::from_str(s)
            .map(Self::from)
            .ok_or_else(|| serde::de::Error::custom("invalid color"))
    }
}

impl From<Color> for ColorLower {
    fn from(value: Color) -> Self {
        match value {
            Color::Red => Self::Red,
            Color::Blue => Self::Blue,
            Color::Green => Self::Green,
            Color::Yellow => Self::Yellow,
            Color::Purple => Self::Purple,
        }
    }
}

impl From<ColorLower> for Color {
    fn from(value: ColorLower) -> Self {
        match value {
            ColorLower::Red => Color::Red,
            ColorLower::Blue => Color::Blue,
            ColorLower::Green => Color::Green,
            ColorLower::Yellow => Color::Yellow,
            ColorLower::Purple => Color::Purple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RotationLower {
    #[serde(rename = "north")]
    North,
    #[serde(rename = "east")]
    East,
    #[serde(rename = "south")]
    South,
    #[serde(rename = "west")]
    West,
}

impl<'de> Deserialize<'de> for RotationLower {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        Rotation::from_str(s)
            .map(Self::from)
            .ok_or_else(|| serde::de::Error::custom("invalid rotation"))
    }
}

impl From<Rotation> for RotationLower {
    fn from(value: Rotation) -> Self {
        match value {
            Rotation::North => Self::North,
            Rotation::East => Self::East,
            Rotation::South => Self::South,
            Rotation::West => Self::West,
        }
    }
}

impl From<RotationLower> for Rotation {
    fn from(value: RotationLower) -> Self {
        match value {
            RotationLower::North => Rotation::North,
            RotationLower::East => Rotation::East,
            RotationLower::South => Rotation::South,
            RotationLower::West => Rotation::West,
        }
    }
}

/// Region positions serialized as `[[x, y], ...]` without heap allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionList(pub ArrayVec<Position, GRID_CELLS>);

impl PositionList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[Position]> for PositionList {
    fn from(positions: &[Position]) -> Self {
        Self(positions.iter().copied().take(GRID_CELLS).collect())
    }
}

impl Serialize for PositionList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for pos in &self.0 {
            seq.serialize_element(&[pos.x, pos.y])?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PositionList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;
        impl<'de> serde::de::Visitor<'de> for V {
            type Value = PositionList;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "an array of [x, y] pairs")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut out = ArrayVec::<Position, GRID_CELLS>::new();
                while let Some([x, y]) = seq.next_element::<[i8; 2]>()? {
                    let pos = Position::new(x, y);
                    if !pos.in_bounds() {
                        return Err(serde::de::Error::custom("position outside the grid"));
                    }
                    out.try_push(pos)
                        .map_err(|_| serde::de::Error::custom("too many positions"))?;
                }
                Ok(PositionList(out))
            }
        }

        deserializer.deserialize_seq(V)
    }
}

/// Board rows, top to bottom, in the text grid format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub rows: Vec<String>,
}

impl BoardSnapshot {
    /// Rebuild the grid these rows describe
    pub fn to_grid(&self) -> Result<Grid, GridParseError> {
        Grid::parse(&self.rows.join("\n"))
    }
}

impl From<&Grid> for BoardSnapshot {
    fn from(grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |c| c.symbol()))
                    .collect()
            })
            .collect();
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    pub color: ColorLower,
    pub size: u32,
    pub positions: PositionList,
}

impl From<&Region> for GroupReport {
    fn from(region: &Region) -> Self {
        Self {
            color: region.color().into(),
            size: region.size() as u32,
            positions: PositionList::from(region.positions()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub chain: u32,
    pub groups: Vec<GroupReport>,
    pub eliminated: u32,
    #[serde(rename = "raw_score")]
    pub raw_score: u32,
    pub colors: u32,
    pub multiplier: u32,
    pub score: u32,
}

impl From<&ChainStep> for StepReport {
    fn from(step: &ChainStep) -> Self {
        Self {
            chain: step.chain,
            groups: step.groups.iter().map(GroupReport::from).collect(),
            eliminated: step.eliminated_count,
            raw_score: step.raw_score,
            colors: step.color_count,
            multiplier: step.multiplier,
            score: step.step_score,
        }
    }
}

/// Everything a resolution produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainReport {
    #[serde(rename = "chain_count")]
    pub chain_count: u32,
    #[serde(rename = "total_score")]
    pub total_score: u32,
    #[serde(rename = "total_eliminated")]
    pub total_eliminated: u32,
    #[serde(rename = "all_clear")]
    pub all_clear: bool,
    #[serde(rename = "all_clear_bonus")]
    pub all_clear_bonus: u32,
    pub steps: Vec<StepReport>,
    pub board: BoardSnapshot,
}

impl From<&ChainResult> for ChainReport {
    fn from(result: &ChainResult) -> Self {
        Self {
            chain_count: result.chain_count,
            total_score: result.total_score,
            total_eliminated: result.total_eliminated,
            all_clear: result.all_clear,
            all_clear_bonus: result.all_clear_bonus,
            steps: result.steps.iter().map(StepReport::from).collect(),
            board: BoardSnapshot::from(&result.grid),
        }
    }
}

/// One accepted drop in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub column: i8,
    pub rotation: RotationLower,
    pub axis: ColorLower,
    pub child: ColorLower,
    #[serde(rename = "chain_count")]
    pub chain_count: u32,
    pub score: u32,
}

/// Outcome of a played session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub seed: u32,
    pub colors: u8,
    pub pieces: u32,
    pub score: u32,
    pub chains: u32,
    #[serde(rename = "max_chain")]
    pub max_chain: u32,
    #[serde(rename = "all_clears")]
    pub all_clears: u32,
    #[serde(rename = "game_over")]
    pub game_over: bool,
    pub moves: Vec<MoveReport>,
    pub board: BoardSnapshot,
}

impl SessionReport {
    pub fn new(seed: u32, field: &Playfield, moves: Vec<MoveReport>) -> Self {
        Self {
            seed,
            colors: field.color_count(),
            pieces: field.pieces(),
            score: field.score(),
            chains: field.chains(),
            max_chain: field.max_chain(),
            all_clears: field.all_clears(),
            game_over: field.game_over(),
            moves,
            board: BoardSnapshot::from(field.grid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puyo_chain_core::resolve_chain;

    #[test]
    fn test_color_lower_accepts_names_and_symbols() {
        let c: ColorLower = serde_json::from_str("\"Purple\"").unwrap();
        assert_eq!(c, ColorLower::Purple);
        let c: ColorLower = serde_json::from_str("\"g\"").unwrap();
        assert_eq!(Color::from(c), Color::Green);
        assert!(serde_json::from_str::<ColorLower>("\"orange\"").is_err());
        assert_eq!(serde_json::to_string(&ColorLower::Red).unwrap(), "\"red\"");
    }

    #[test]
    fn test_position_list_wire_shape() {
        let list = PositionList::from(&[Position::new(0, 11), Position::new(1, 11)][..]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(serde_json::to_string(&list).unwrap(), "[[0,11],[1,11]]");

        let empty: PositionList = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());

        let back: PositionList = serde_json::from_str("[[0,11],[1,11]]").unwrap();
        assert_eq!(back, list);
        assert!(serde_json::from_str::<PositionList>("[[6,0]]").is_err());
    }

    #[test]
    fn test_board_snapshot_rows() {
        let grid = Grid::parse("R....B").unwrap();
        let board = BoardSnapshot::from(&grid);
        assert_eq!(board.rows.len(), GRID_HEIGHT as usize);
        assert_eq!(board.rows[0], "......");
        assert_eq!(board.rows[11], "R....B");
        assert_eq!(board.to_grid().unwrap(), grid);
    }

    #[test]
    fn test_chain_report_from_result() {
        let grid = Grid::parse("B.....\nR.....\nR.....\nR.....\nRBBB..").unwrap();
        let report = ChainReport::from(&resolve_chain(grid));

        assert_eq!(report.chain_count, 2);
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].groups[0].color, ColorLower::Red);
        assert_eq!(report.steps[0].groups[0].size, 4);
        assert_eq!(report.steps[1].groups[0].color, ColorLower::Blue);
        assert!(report.all_clear);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["chain_count"], 2);
        assert_eq!(value["steps"][1]["multiplier"], 8);
    }
}
