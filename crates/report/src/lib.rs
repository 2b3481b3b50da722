//! Reporting layer around the chain engine
//!
//! Everything with I/O or a wire format lives here so the core stays pure:
//!
//! - [`report`]: serde views of chain results and play sessions
//! - [`config`]: score table files, environment settings and move lists
//! - [`trace`]: JSON-lines chain trace as a [`ChainObserver`](puyo_chain_core::ChainObserver)
//! - [`session`]: scripted playfield runs

pub mod config;
pub mod report;
pub mod session;
pub mod trace;

pub use config::{load_score_table, parse_colors, parse_moves, Move, RuntimeConfig, ScoreConfig};
pub use report::{
    BoardSnapshot, ChainReport, ColorLower, GroupReport, MoveReport, PositionList, RotationLower,
    SessionReport, StepReport,
};
pub use session::run_session;
pub use trace::ChainTraceLog;
