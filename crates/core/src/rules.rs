//! Fixed game rules: health and step budgets, interaction magnitudes, and level quotas.

use std::ops::RangeInclusive;

use crate::types::Pos;

pub const MAX_HEALTH: i32 = 10;
pub const MAX_STEPS: u32 = 100;

pub const DEFAULT_DIFFICULTY: i32 = 3;
pub const DIFFICULTY_STEP: i32 = 2;
pub const STARTING_LEVEL: u8 = 1;
pub const FINAL_LEVEL: u8 = 2;

pub const ENTRY_POS: Pos = Pos::new(1, 1);
pub const MIN_GRID_DIMENSION: usize = 3;

pub const GOLD_REWARD: i32 = 2;
pub const GOLD_VALUE_RANGE: RangeInclusive<i32> = 1..=5;
pub const POTION_HEAL: i32 = 4;
pub const TRAP_DAMAGE: i32 = 2;
pub const MELEE_MUTANT_DAMAGE: i32 = 2;
pub const MUTANT_REWARD: i32 = 2;

pub const RANGED_ATTACK_DAMAGE: i32 = 2;
pub const RANGED_ATTACK_RANGE: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Ladder,
    Gold,
    Trap,
    MeleeMutant,
    RangedMutant,
    HealthPotion,
}

/// Items placed on every level, in placement order.
pub const LEVEL_QUOTAS: [(ItemKind, usize); 6] = [
    (ItemKind::Ladder, 1),
    (ItemKind::Gold, 5),
    (ItemKind::Trap, 5),
    (ItemKind::MeleeMutant, 3),
    (ItemKind::RangedMutant, 1),
    (ItemKind::HealthPotion, 2),
];

pub fn total_quota() -> usize {
    LEVEL_QUOTAS.iter().map(|(_, count)| count).sum()
}
