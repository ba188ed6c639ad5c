use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to rebuild a run: the session parameters plus every accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveJournal {
    pub format_version: u16,
    pub seed: u64,
    pub height: usize,
    pub width: usize,
    pub moves: Vec<MoveRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seq: u64,
    pub direction: Direction,
}

impl MoveJournal {
    pub fn new(seed: u64, height: usize, width: usize) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, height, width, moves: Vec::new() }
    }

    pub fn for_engine(engine: &Engine) -> Self {
        Self::new(engine.seed(), engine.height(), engine.width())
    }

    pub fn append_move(&mut self, direction: Direction) {
        let seq = self.moves.len() as u64;
        self.moves.push(MoveRecord { seq, direction });
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().map(|record| record.direction)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
