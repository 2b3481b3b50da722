//! Command-line parsing for the `puyo-chain` binary.
//!
//! ```text
//! puyo-chain resolve [FILE|-] [--config PATH] [--log PATH] [--pretty]
//! puyo-chain play --moves "2:north,3:east" [--seed N] [--colors N] [--config PATH] [--log PATH] [--pretty]
//! ```

use anyhow::{anyhow, Result};

use crate::report::{parse_colors, parse_moves, Move, RuntimeConfig};

pub const USAGE: &str = "\
usage:
  puyo-chain resolve [FILE|-] [--config PATH] [--log PATH] [--pretty]
  puyo-chain play --moves COL:ROT,... [--seed N] [--colors N] [--config PATH] [--log PATH] [--pretty]

environment:
  PUYO_SCORE_CONFIG    score table JSON file
  PUYO_CHAIN_LOG_PATH  JSON-lines chain trace
  PUYO_COLORS          colors dealt in play mode (1-5)";

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    pub config: Option<String>,
    pub log: Option<String>,
    pub pretty: bool,
}

impl CommonArgs {
    /// Flags win over the environment
    pub fn merge(&self, env: &RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            score_config: self.config.clone().or_else(|| env.score_config.clone()),
            log_path: self.log.clone().or_else(|| env.log_path.clone()),
            colors: env.colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveArgs {
    /// Grid file; `None` reads stdin
    pub input: Option<String>,
    pub common: CommonArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    pub moves: Vec<Move>,
    pub seed: u32,
    pub colors: Option<u8>,
    pub common: CommonArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Resolve(ResolveArgs),
    Play(PlayArgs),
    Help,
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(sub) = args.first() else {
        return Ok(Command::Help);
    };
    match sub.as_str() {
        "resolve" => parse_resolve(&args[1..]),
        "play" => parse_play(&args[1..]),
        "help" | "-h" | "--help" => Ok(Command::Help),
        other => Err(anyhow!("unknown command: {}", other)),
    }
}

fn value<'a>(args: &'a [String], i: usize, cmd: &str, flag: &str) -> Result<&'a String> {
    args.get(i)
        .ok_or_else(|| anyhow!("{}: missing value for {}", cmd, flag))
}

/// Consume a shared flag at `args[*i]`; returns false if it isn't one
fn common_flag(args: &[String], i: &mut usize, cmd: &str, common: &mut CommonArgs) -> Result<bool> {
    match args[*i].as_str() {
        "--config" => {
            *i += 1;
            common.config = Some(value(args, *i, cmd, "--config")?.clone());
        }
        "--log" => {
            *i += 1;
            common.log = Some(value(args, *i, cmd, "--log")?.clone());
        }
        "--pretty" => common.pretty = true,
        _ => return Ok(false),
    }
    Ok(true)
}

fn parse_resolve(args: &[String]) -> Result<Command> {
    let mut common = CommonArgs::default();
    let mut input: Option<String> = None;
    let mut i = 0usize;
    while i < args.len() {
        if !common_flag(args, &mut i, "resolve", &mut common)? {
            let arg = &args[i];
            if arg.starts_with("--") {
                return Err(anyhow!("resolve: unknown argument: {}", arg));
            }
            if input.is_some() {
                return Err(anyhow!("resolve: more than one input file"));
            }
            input = Some(arg.clone());
        }
        i += 1;
    }

    let input = input.filter(|path| path != "-");
    Ok(Command::Resolve(ResolveArgs { input, common }))
}

fn parse_play(args: &[String]) -> Result<Command> {
    let mut common = CommonArgs::default();
    let mut moves: Option<Vec<Move>> = None;
    let mut seed: u32 = 1;
    let mut colors: Option<u8> = None;
    let mut i = 0usize;
    while i < args.len() {
        if !common_flag(args, &mut i, "play", &mut common)? {
            match args[i].as_str() {
                "--moves" => {
                    i += 1;
                    moves = Some(parse_moves(value(args, i, "play", "--moves")?)?);
                }
                "--seed" => {
                    i += 1;
                    let v = value(args, i, "play", "--seed")?;
                    seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("play: invalid --seed value: {}", v))?;
                }
                "--colors" => {
                    i += 1;
                    let v = value(args, i, "play", "--colors")?;
                    colors = Some(
                        parse_colors(v).ok_or_else(|| anyhow!("play: invalid --colors value: {}", v))?,
                    );
                }
                other => return Err(anyhow!("play: unknown argument: {}", other)),
            }
        }
        i += 1;
    }

    let moves = moves.ok_or_else(|| anyhow!("play: --moves is required"))?;
    Ok(Command::Play(PlayArgs {
        moves,
        seed,
        colors,
        common,
    }))
}
