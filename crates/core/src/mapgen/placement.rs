//! Random item placement over the still-empty interior cells.

use log::warn;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::rng::GameRng;
use crate::rules::{self, ItemKind};
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementReport {
    pub requested: usize,
    pub placed: usize,
}

impl PlacementReport {
    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }
}

pub(super) fn scatter_items(
    grid: &mut Grid,
    rng: &mut GameRng,
    quotas: &[(ItemKind, usize)],
) -> PlacementReport {
    let mut free: Vec<Pos> =
        grid.interior_positions().filter(|pos| grid.cell_at(*pos) == Some(Cell::Empty)).collect();
    let requested = quotas.iter().map(|(_, count)| count).sum();
    let mut placed = 0;

    for &(kind, count) in quotas {
        for _ in 0..count {
            if free.is_empty() {
                warn!(
                    "no free cells left on {}x{} grid; placed {placed} of {requested} items",
                    grid.height, grid.width
                );
                return PlacementReport { requested, placed };
            }
            let pos = free.swap_remove(rng.index(free.len()));
            let cell = spawn_cell(kind, rng);
            grid.set(pos, cell);
            placed += 1;
        }
    }

    PlacementReport { requested, placed }
}

fn spawn_cell(kind: ItemKind, rng: &mut GameRng) -> Cell {
    match kind {
        ItemKind::Ladder => Cell::Ladder,
        ItemKind::Gold => {
            let value =
                rng.range_inclusive(*rules::GOLD_VALUE_RANGE.start(), *rules::GOLD_VALUE_RANGE.end());
            Cell::gold(value)
        }
        ItemKind::Trap => Cell::trap(),
        ItemKind::MeleeMutant => Cell::melee_mutant(),
        ItemKind::RangedMutant => Cell::ranged_mutant(),
        ItemKind::HealthPotion => Cell::health_potion(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_overwrites_occupied_cells() {
        let mut grid = Grid::new(4, 4);
        grid.set(Pos::new(1, 1), Cell::Entry);
        grid.set(Pos::new(2, 2), Cell::Exit);
        let mut rng = GameRng::seed_from_u64(11);

        let report = scatter_items(&mut grid, &mut rng, &[(ItemKind::Trap, 5)]);

        assert_eq!(report, PlacementReport { requested: 5, placed: 2 });
        assert_eq!(grid.cell_at(Pos::new(1, 1)), Some(Cell::Entry));
        assert_eq!(grid.cell_at(Pos::new(2, 2)), Some(Cell::Exit));
        assert_eq!(grid.count(|cell| matches!(cell, Cell::Trap { .. })), 2);
    }

    #[test]
    fn empty_quota_list_is_complete() {
        let mut grid = Grid::new(6, 6);
        let mut rng = GameRng::seed_from_u64(0);
        let report = scatter_items(&mut grid, &mut rng, &[]);
        assert!(report.is_complete());
        assert_eq!(rng.draws(), 0);
    }
}
