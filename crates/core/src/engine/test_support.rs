//! Shared fixtures for the engine test suites.
//! Random layouts make interaction tests flaky, so most fixtures start from a cleared interior.

use super::*;

/// Engine whose interior holds nothing but the entry tile.
pub(super) fn open_engine(size: usize) -> Engine {
    let mut engine = Engine::square(size, 4_242).expect("valid test grid");
    clear_interior(&mut engine);
    engine
}

pub(super) fn clear_interior(engine: &mut Engine) {
    let interior: Vec<Pos> = engine.grid.interior_positions().collect();
    for pos in interior {
        engine.grid.set(pos, Cell::Empty);
    }
    engine.grid.set(ENTRY_POS, Cell::Entry);
}

pub(super) fn place_row(
    engine: &mut Engine,
    row: i32,
    cols: impl IntoIterator<Item = i32>,
    cell: Cell,
) {
    for col in cols {
        engine.replace_cell(Pos::new(row, col), cell).expect("in-bounds placement");
    }
}

pub(super) fn count_events(engine: &Engine, wanted: impl Fn(&StatusEvent) -> bool) -> usize {
    engine.status_log().iter().filter(|event| wanted(event)).count()
}

pub(super) fn ranged_event_count(engine: &Engine) -> usize {
    count_events(engine, |event| {
        matches!(event, StatusEvent::RangedAttackHit | StatusEvent::RangedAttackMissed)
    })
}
