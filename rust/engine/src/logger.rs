use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::game::GameMode;
use crate::pile::PileId;

/// Records one committed relocation: which cards went from where to where.
/// Draws, recycles, foundation sends, and tableau stacks all reduce to this.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Pile the cards left
    pub from: PileId,
    /// Pile the cards landed on
    pub to: PileId,
    /// The relocated cards in landing order
    pub cards: Vec<CardId>,
}

/// Complete record of one deal: configuration, every committed move, and the
/// outcome. Serialized to JSONL for deal history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    /// Unique identifier for this deal (format: YYYYMMDD-NNNNNN)
    pub deal_id: String,
    /// RNG seed used for the shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Rule variant the deal was played under
    pub mode: GameMode,
    /// Stock draw count in effect (1 or 3)
    pub draw_count: u8,
    /// Whether Vegas cumulative scoring carried into this deal
    pub cumulative: bool,
    /// Chronological list of committed moves
    pub moves: Vec<MoveRecord>,
    /// Final score when the record was written
    pub score: i32,
    /// Whether the deal was won
    pub won: bool,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_deal_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends deal records to a JSONL file, one object per line. Creates the
/// parent directory if needed and allocates sequential deal ids.
pub struct DealLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl DealLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_deal_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &DealRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
