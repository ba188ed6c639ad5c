//! Ranked high-score table shown between runs.

use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::RunOutcome;

pub const MAX_ENTRIES: usize = 5;
/// Sentinel recorded for runs that ended in defeat.
pub const DEFEAT_SCORE: i32 = -1;
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i32,
    pub date: NaiveDate,
}

impl ScoreEntry {
    pub fn new(score: i32, date: NaiveDate) -> Self {
        Self { score, date }
    }

    /// Entry stamped with the local calendar date.
    pub fn today(score: i32) -> Self {
        Self::new(score, Local::now().date_naive())
    }
}

/// Highest score first. Equal scores compare equal so stable sorts keep insertion order.
pub fn by_score_desc(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score.cmp(&a.score)
}

pub fn final_score(outcome: RunOutcome, gold: i32) -> i32 {
    match outcome {
        RunOutcome::Victory | RunOutcome::ExitReached => gold,
        RunOutcome::Defeat(_) => DEFEAT_SCORE,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from arbitrary entries, keeping the best five.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(by_score_desc);
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Returns `true` when the entry earned a place in the table.
    /// Ties rank below entries already present.
    pub fn record(&mut self, entry: ScoreEntry) -> bool {
        let rank = self
            .entries
            .iter()
            .position(|existing| by_score_desc(existing, &entry) == Ordering::Greater)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return false;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        true
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn ranked_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                format!("#{} {} {}", index + 1, entry.score, entry.date.format(DATE_FORMAT))
            })
            .collect()
    }
}
