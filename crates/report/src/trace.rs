//! JSON-lines chain trace
//!
//! [`ChainTraceLog`] plugs into the resolver as a [`ChainObserver`] and writes
//! one JSON object per line. Write failures are dropped; a broken trace never
//! changes a result.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use puyo_chain_core::{ChainObserver, ChainResult, ChainStep, Grid};

use crate::report::{BoardSnapshot, StepReport};

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum TraceRecord {
    #[serde(rename = "step")]
    Step {
        #[serde(flatten)]
        step: StepReport,
        board: BoardSnapshot,
    },
    #[serde(rename = "all_clear")]
    AllClear { bonus: u32 },
    #[serde(rename = "finish")]
    Finish {
        chain_count: u32,
        total_score: u32,
        total_eliminated: u32,
        all_clear: bool,
    },
}

/// Observer writing chain progress as JSON lines
pub struct ChainTraceLog<W: Write = BufWriter<File>> {
    out: W,
    buf: Vec<u8>,
}

impl ChainTraceLog {
    /// Append to the file at `path`, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ChainTraceLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, record: &TraceRecord) {
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        let _ = self.out.write_all(&self.buf);
    }
}

impl<W: Write> ChainObserver for ChainTraceLog<W> {
    fn on_step(&mut self, step: &ChainStep, grid: &Grid) {
        self.record(&TraceRecord::Step {
            step: StepReport::from(step),
            board: BoardSnapshot::from(grid),
        });
    }

    fn on_all_clear(&mut self, bonus: u32) {
        self.record(&TraceRecord::AllClear { bonus });
    }

    fn on_finish(&mut self, result: &ChainResult) {
        self.record(&TraceRecord::Finish {
            chain_count: result.chain_count,
            total_score: result.total_score,
            total_eliminated: result.total_eliminated,
            all_clear: result.all_clear,
        });
        let _ = self.out.flush();
    }
}
