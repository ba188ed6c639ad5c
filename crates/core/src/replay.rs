use log::debug;
use thiserror::Error;

use crate::engine::Engine;
use crate::journal::{JOURNAL_FORMAT_VERSION, MoveJournal};
use crate::types::{EngineError, RunOutcome};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("journal format version {found} is not supported")]
    UnsupportedVersion { found: u16 },
    #[error("journal describes an invalid session: {0}")]
    InvalidConfig(#[from] EngineError),
    #[error("move {seq} was recorded after the run had already ended")]
    MoveAfterGameOver { seq: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    /// `None` when the journal stops before the run ends.
    pub outcome: Option<RunOutcome>,
    pub snapshot_hash: u64,
    pub steps: u32,
    pub gold: i32,
    pub level: u8,
}

pub fn replay_to_end(journal: &MoveJournal) -> Result<ReplayResult, ReplayError> {
    let engine = replay_engine(journal)?;
    Ok(ReplayResult {
        outcome: engine.outcome(),
        snapshot_hash: engine.snapshot_hash(),
        steps: engine.steps(),
        gold: engine.score(),
        level: engine.level(),
    })
}

/// Rebuilds the session and feeds it every recorded move.
pub fn replay_engine(journal: &MoveJournal) -> Result<Engine, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: journal.format_version });
    }
    let mut engine = Engine::new(journal.height, journal.width, journal.seed)?;
    for record in &journal.moves {
        if engine.is_game_over() {
            return Err(ReplayError::MoveAfterGameOver { seq: record.seq });
        }
        let outcome = engine.move_player(record.direction);
        debug!("replayed move {} ({:?}): {outcome:?}", record.seq, record.direction);
    }
    Ok(engine)
}
