use dungeon_core::{
    Cell, Direction, Engine, HighScores, MoveOutcome, RunOutcome, ScoreEntry, final_score,
};

/// Walks a serpentine path across the grid until the run ends.
fn run_serpentine(seed: u64) -> Engine {
    let mut engine = Engine::square(10, seed).expect("engine");
    let mut heading = Direction::Right;

    for _ in 0..1000 {
        match engine.move_player(heading) {
            MoveOutcome::Finished(_) => break,
            MoveOutcome::Rejected(_) if engine.is_game_over() => break,
            MoveOutcome::Rejected(_) => {
                engine.move_player(Direction::Down);
                heading = if heading == Direction::Right { Direction::Left } else { Direction::Right };
            }
            MoveOutcome::Moved => {}
        }
    }
    engine
}

#[test]
fn test_serpentine_runs_always_end() {
    for seed in 0..24 {
        let engine = run_serpentine(seed);
        assert!(engine.is_game_over(), "seed {seed} never finished");
        assert!(engine.steps() <= engine.max_steps());
    }
}

#[test]
fn test_finished_runs_feed_the_score_table() {
    let mut table = HighScores::new();
    for seed in 0..8 {
        let engine = run_serpentine(seed);
        let outcome = engine.outcome().expect("finished run");
        let score = final_score(outcome, engine.score());
        match outcome {
            RunOutcome::Defeat(_) => assert_eq!(score, -1),
            RunOutcome::Victory | RunOutcome::ExitReached => assert_eq!(score, engine.score()),
        }
        table.record(ScoreEntry::today(score));
    }

    assert_eq!(table.entries().len(), 5);
    let scores: Vec<i32> = table.entries().iter().map(|entry| entry.score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(table.ranked_lines()[0].starts_with("#1 "));
}

#[test]
fn test_fresh_levels_are_fully_stocked() {
    for seed in 0..16 {
        let engine = Engine::square(10, seed).expect("engine");
        let grid = engine.grid();
        assert_eq!(grid.count(|cell| cell == Cell::Ladder), 1);
        assert_eq!(grid.count(|cell| matches!(cell, Cell::Gold { .. })), 5);
        assert_eq!(grid.count(|cell| matches!(cell, Cell::Trap { .. })), 5);
        assert_eq!(grid.count(|cell| matches!(cell, Cell::Wall)), 36);
    }
}
