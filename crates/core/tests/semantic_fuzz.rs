use dungeon_core::{
    Cell, DefeatCause, Direction, Engine, MoveOutcome, MoveRejection, RunOutcome, rules,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn run_fuzz_simulation(map_seed: u64, walk_seed: u64, size: usize) -> Result<(), String> {
    let mut engine = Engine::square(size, map_seed).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(walk_seed);
    let mut last_gold = 0;
    let mut last_level = engine.level();

    for _ in 0..400 {
        let steps_before = engine.steps();
        let outcome = engine.move_player(choose(&mut rng, &Direction::ALL));
        let player = engine.player();

        if !(0..=rules::MAX_HEALTH).contains(&player.health) {
            return Err(format!("health {} out of range on map_seed {map_seed}", player.health));
        }
        if player.gold < last_gold {
            return Err(format!("gold decreased on map_seed {map_seed}"));
        }
        if engine.level() < last_level {
            return Err(format!("level went backwards on map_seed {map_seed}"));
        }
        if engine.steps() > engine.max_steps() {
            return Err(format!("step budget overrun on map_seed {map_seed}"));
        }
        match engine.cell_at(player.pos) {
            None => return Err(format!("player left the grid on map_seed {map_seed}")),
            Some(Cell::Wall) => return Err(format!("player inside wall on map_seed {map_seed}")),
            Some(_) => {}
        }
        match outcome {
            MoveOutcome::Rejected(_) if engine.steps() != steps_before => {
                return Err(format!("rejected move counted a step on map_seed {map_seed}"));
            }
            MoveOutcome::Moved if engine.is_game_over() => {
                return Err(format!("game ended without a finishing outcome on {map_seed}"));
            }
            MoveOutcome::Rejected(MoveRejection::GameOver) => break,
            _ => {}
        }
        last_gold = player.gold;
        last_level = engine.level();
    }

    match engine.outcome() {
        Some(RunOutcome::Defeat(DefeatCause::HealthDepleted)) if engine.player().health != 0 => {
            Err(format!("health defeat with health left on map_seed {map_seed}"))
        }
        Some(RunOutcome::Victory) if engine.level() != rules::FINAL_LEVEL => {
            Err(format!("victory before the final level on map_seed {map_seed}"))
        }
        _ => Ok(()),
    }
}

#[test]
fn test_fuzz_random_walk_preserves_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(32));
    let inputs = (any::<u64>(), any::<u64>(), 3_usize..=16);

    runner
        .run(&inputs, |(map_seed, walk_seed, size)| {
            run_fuzz_simulation(map_seed, walk_seed, size).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random walks should preserve engine invariants");
}
