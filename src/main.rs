//! Chain resolver runner (default binary).
//!
//! `resolve` reads a text grid and prints the chain report as JSON.
//! `play` replays a scripted list of drops and prints the session report.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use serde::Serialize;

use puyo_chain::cli::{parse_args, Command, PlayArgs, ResolveArgs, USAGE};
use puyo_chain::core::{ChainResolver, Grid};
use puyo_chain::report::{run_session, ChainReport, ChainTraceLog, RuntimeConfig};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("[puyo-chain] {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let env = RuntimeConfig::from_env();
    match parse_args(args)? {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Resolve(resolve) => run_resolve(resolve, &env),
        Command::Play(play) => run_play(play, &env),
    }
}

fn run_resolve(args: ResolveArgs, env: &RuntimeConfig) -> Result<()> {
    let config = args.common.merge(env);
    let table = config.score_table()?;

    let text = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read grid {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read grid from stdin")?;
            buf
        }
    };
    let grid = Grid::parse(&text).context("invalid grid")?;

    let resolver = ChainResolver::new(table);
    let result = match open_trace(config.log_path.as_deref()) {
        Some(mut trace) => resolver.resolve_with(grid, &mut trace),
        None => resolver.resolve(grid),
    };

    print_json(&ChainReport::from(&result), args.common.pretty)
}

fn run_play(args: PlayArgs, env: &RuntimeConfig) -> Result<()> {
    let config = args.common.merge(env);
    let table = config.score_table()?;
    let colors = args.colors.unwrap_or(config.colors);

    let report = match open_trace(config.log_path.as_deref()) {
        Some(mut trace) => run_session(args.seed, colors, table, &args.moves, &mut trace)?,
        None => run_session(
            args.seed,
            colors,
            table,
            &args.moves,
            &mut puyo_chain::core::NoopObserver,
        )?,
    };

    print_json(&report, args.common.pretty)
}

/// Trace log at `path`; an unopenable path only disables tracing
fn open_trace(path: Option<&str>) -> Option<ChainTraceLog> {
    let path = path?;
    match ChainTraceLog::open(path) {
        Ok(trace) => Some(trace),
        Err(e) => {
            eprintln!("[puyo-chain] chain trace disabled: {}: {}", path, e);
            None
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
