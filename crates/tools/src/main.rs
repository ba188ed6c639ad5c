use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{MoveJournal, ReplayResult, replay::replay_to_end};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the move journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn load_journal(path: &Path) -> Result<MoveJournal> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    MoveJournal::from_json(&journal_data).with_context(|| "Failed to deserialize journal JSON")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let journal = load_journal(Path::new(&args.journal))?;
    info!(
        "replaying {} moves on a {}x{} grid with seed {}",
        journal.moves.len(),
        journal.height,
        journal.width,
        journal.seed
    );

    let result: ReplayResult =
        replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    match result.outcome {
        Some(outcome) => println!("Outcome: {outcome:?}"),
        None => println!("Outcome: unfinished"),
    }
    println!("Steps: {}", result.steps);
    println!("Gold: {}", result.gold);
    println!("Level: {}", result.level);
    println!("Snapshot Hash: {}", result.snapshot_hash);

    Ok(())
}

#[cfg(test)]
mod tests {
    use dungeon_core::Direction;

    use super::*;

    #[test]
    fn loads_journal_written_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.json");
        let mut journal = MoveJournal::new(21, 10, 10);
        journal.append_move(Direction::Down);
        fs::write(&path, journal.to_json().expect("serialize")).expect("write");

        let loaded = load_journal(&path).expect("load");
        assert_eq!(loaded, journal);
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.json");
        let err = load_journal(&missing).expect_err("missing file");
        assert!(err.to_string().contains("Failed to read journal file"));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json").expect("write");
        let err = load_journal(&garbage).expect_err("bad json");
        assert!(err.to_string().contains("Failed to deserialize"));
    }
}
