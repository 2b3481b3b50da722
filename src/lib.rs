//! Puyo chain engine (workspace facade crate).
//!
//! Re-exports the member crates under `puyo_chain::{core,report,types}` and
//! hosts the command-line parsing used by the binary.

pub mod cli;

pub use puyo_chain_core as core;
pub use puyo_chain_report as report;
pub use puyo_chain_types as types;
