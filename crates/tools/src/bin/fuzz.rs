use std::fs;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use dungeon_core::{Direction, Engine, MoveJournal, MoveOutcome, rules};
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 10)]
    size: usize,
    #[arg(short, long, default_value_t = 1000)]
    moves: u32,
    /// Write the walk as a replayable move journal
    #[arg(long)]
    journal_out: Option<String>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn check_invariants(engine: &Engine, last_gold: i32) -> Result<()> {
    let player = engine.player();
    ensure!(
        (0..=rules::MAX_HEALTH).contains(&player.health),
        "Invariant failed: health {} outside [0, {}]",
        player.health,
        rules::MAX_HEALTH
    );
    ensure!(player.gold >= last_gold, "Invariant failed: gold decreased");
    ensure!(engine.steps() <= engine.max_steps(), "Invariant failed: step budget exceeded");
    let cell = engine.cell_at(player.pos).context("Invariant failed: player outside grid")?;
    ensure!(cell.is_passable(), "Invariant failed: player inside wall");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Starting Fuzz harness on seed {} ({}x{} grid) for max {} moves...",
        args.seed, args.size, args.size, args.moves
    );
    let mut engine = Engine::square(args.size, args.seed)?;
    let mut journal = MoveJournal::for_engine(&engine);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut last_gold = 0;

    for _ in 0..args.moves {
        let direction = choose(&mut rng, &Direction::ALL);
        let outcome = engine.move_player(direction);
        journal.append_move(direction);
        debug!("{direction:?} -> {outcome:?}; {}", engine.status_line());

        check_invariants(&engine, last_gold)?;
        last_gold = engine.player().gold;

        if let MoveOutcome::Finished(outcome) = outcome {
            println!("Finished with outcome {outcome:?} after {} steps", engine.steps());
            break;
        }
    }

    if let Some(path) = &args.journal_out {
        fs::write(path, journal.to_json()?)
            .with_context(|| format!("Failed to write journal to {path}"))?;
        info!("wrote {} moves to {path}", journal.moves.len());
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
