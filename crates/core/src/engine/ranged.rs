//! Ranged mutants shooting along the player's row and column.

use super::*;
use crate::rules::{RANGED_ATTACK_DAMAGE, RANGED_ATTACK_RANGE};

impl Engine {
    /// Every live ranged mutant in line with `target` and within range rolls its own hit.
    /// `target` is the square the move landed on, even when a ladder swapped the level out.
    pub(super) fn resolve_ranged_attacks(&mut self, target: Pos) {
        for origin in attack_origins(target) {
            let in_line = self.grid.cell_at(origin).is_some_and(Cell::is_active_ranged_mutant);
            if !in_line {
                continue;
            }
            if self.rng.coin_flip() {
                self.player.take_damage(RANGED_ATTACK_DAMAGE);
                self.push_status(StatusEvent::RangedAttackHit);
            } else {
                self.push_status(StatusEvent::RangedAttackMissed);
            }
        }
    }
}

/// Cells a shot can come from, nearest rows first. Diagonals never fire.
pub(super) fn attack_origins(center: Pos) -> impl Iterator<Item = Pos> {
    (-RANGED_ATTACK_RANGE..=RANGED_ATTACK_RANGE)
        .filter(|distance| *distance != 0)
        .flat_map(move |distance| [center.offset(distance, 0), center.offset(0, distance)])
        .flatten()
}
