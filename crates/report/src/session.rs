//! Scripted play sessions
//!
//! Replays a list of drops against a seeded [`Playfield`]. The run stops early
//! once the spawn cell is blocked; any other rejected drop is an error.

use anyhow::{anyhow, Result};

use puyo_chain_core::{ChainObserver, PlaceError, Playfield, ScoreTable};

use crate::config::Move;
use crate::report::{MoveReport, SessionReport};

/// Play `moves` from a fresh playfield and report the outcome
pub fn run_session<O: ChainObserver + ?Sized>(
    seed: u32,
    colors: u8,
    table: ScoreTable,
    moves: &[Move],
    observer: &mut O,
) -> Result<SessionReport> {
    let mut field = Playfield::with_table(seed, colors, table);
    let mut played = Vec::with_capacity(moves.len());

    for (i, mv) in moves.iter().enumerate() {
        let pair = field.next_pairs()[0];
        let result = match field.drop_next_with(mv.column, mv.rotation, observer) {
            Ok(result) => result,
            Err(PlaceError::GameOver) => break,
            Err(err) => {
                return Err(anyhow!(
                    "move {} ({}:{}) rejected: {}",
                    i + 1,
                    mv.column,
                    mv.rotation.as_str(),
                    err
                ))
            }
        };
        played.push(MoveReport {
            column: mv.column,
            rotation: mv.rotation.into(),
            axis: pair.axis.into(),
            child: pair.child.into(),
            chain_count: result.chain_count,
            score: result.total_score,
        });
    }

    Ok(SessionReport::new(seed, &field, played))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_moves;
    use puyo_chain_core::NoopObserver;

    #[test]
    fn test_single_color_session() {
        let moves = parse_moves("0:north,0:north").unwrap();
        let report =
            run_session(9, 1, ScoreTable::default(), &moves, &mut NoopObserver).unwrap();

        assert_eq!(report.pieces, 2);
        assert_eq!(report.moves.len(), 2);
        assert_eq!(report.moves[1].chain_count, 1);
        assert_eq!(report.score, 40 + 2100);
        assert_eq!(report.all_clears, 1);
        assert!(!report.game_over);
    }

    #[test]
    fn test_session_is_deterministic() {
        let moves = parse_moves("0:north,1:east,3:south,5:west,2:north").unwrap();
        let a = run_session(77, 4, ScoreTable::default(), &moves, &mut NoopObserver).unwrap();
        let b = run_session(77, 4, ScoreTable::default(), &moves, &mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejected_move_is_an_error() {
        let moves = parse_moves("5:east").unwrap();
        let err = run_session(1, 4, ScoreTable::default(), &moves, &mut NoopObserver)
            .unwrap_err();
        assert!(err.to_string().contains("move 1"));
    }

    #[test]
    fn test_single_color_column_keeps_clearing() {
        // Every second pair completes a group of four and empties the grid
        let moves = parse_moves(&"2:north,".repeat(12)).unwrap();
        let report =
            run_session(5, 1, ScoreTable::default(), &moves, &mut NoopObserver).unwrap();
        assert!(!report.game_over);
        assert_eq!(report.pieces, 12);
        assert_eq!(report.all_clears, 6);
        assert!(report.board.to_grid().unwrap().is_all_clear());
    }
}
