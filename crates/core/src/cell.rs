//! Cell kinds and the effects produced when the player steps onto them.
//!
//! Cells never touch engine state directly. `Cell::interact` describes what
//! should happen and the engine applies it after dispatch.

use serde::{Deserialize, Serialize};

use crate::rules;
use crate::types::StatusEvent;

pub const PLAYER_SYMBOL: char = 'P';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Entry,
    Exit,
    /// `value` is rolled at placement time; the pickup reward is always `GOLD_REWARD`.
    Gold { value: i32, collected: bool },
    HealthPotion { collected: bool },
    /// Traps stay armed; `triggered` is carried for rendering only.
    Trap { triggered: bool },
    MeleeMutant { defeated: bool },
    RangedMutant { defeated: bool },
    Ladder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Damage(i32),
    Heal(i32),
    GainGold(i32),
    AdvanceLevel,
    ReachExit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub replacement: Option<Cell>,
    pub effects: Vec<Effect>,
    pub events: Vec<StatusEvent>,
}

impl Interaction {
    fn none() -> Self {
        Self::default()
    }

    fn consumed(effects: Vec<Effect>, event: StatusEvent) -> Self {
        Self { replacement: Some(Cell::Empty), effects, events: vec![event] }
    }
}

impl Cell {
    pub fn gold(value: i32) -> Self {
        Cell::Gold { value, collected: false }
    }

    pub fn health_potion() -> Self {
        Cell::HealthPotion { collected: false }
    }

    pub fn trap() -> Self {
        Cell::Trap { triggered: false }
    }

    pub fn melee_mutant() -> Self {
        Cell::MeleeMutant { defeated: false }
    }

    pub fn ranged_mutant() -> Self {
        Cell::RangedMutant { defeated: false }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Entry => 'E',
            Cell::Exit => 'X',
            Cell::Gold { collected, .. } => spent_or(collected, '$'),
            Cell::HealthPotion { collected } => spent_or(collected, 'H'),
            Cell::Trap { triggered } => spent_or(triggered, 'T'),
            Cell::MeleeMutant { defeated } => spent_or(defeated, 'M'),
            Cell::RangedMutant { defeated } => spent_or(defeated, 'R'),
            Cell::Ladder => 'L',
        }
    }

    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// A ranged mutant that can still shoot at the player.
    pub fn is_active_ranged_mutant(self) -> bool {
        matches!(self, Cell::RangedMutant { defeated: false })
    }

    pub fn interact(self) -> Interaction {
        match self {
            Cell::Empty | Cell::Wall | Cell::Entry => Interaction::none(),
            Cell::Exit => Interaction {
                replacement: None,
                effects: vec![Effect::ReachExit],
                events: vec![StatusEvent::ExitFound],
            },
            Cell::Gold { collected: false, .. } => Interaction::consumed(
                vec![Effect::GainGold(rules::GOLD_REWARD)],
                StatusEvent::GoldCollected,
            ),
            Cell::HealthPotion { collected: false } => Interaction::consumed(
                vec![Effect::Heal(rules::POTION_HEAL)],
                StatusEvent::PotionConsumed,
            ),
            Cell::Trap { .. } => Interaction {
                replacement: None,
                effects: vec![Effect::Damage(rules::TRAP_DAMAGE)],
                events: vec![StatusEvent::TrapTriggered],
            },
            Cell::MeleeMutant { defeated: false } => Interaction::consumed(
                vec![
                    Effect::Damage(rules::MELEE_MUTANT_DAMAGE),
                    Effect::GainGold(rules::MUTANT_REWARD),
                ],
                StatusEvent::MeleeMutantDefeated,
            ),
            Cell::RangedMutant { defeated: false } => Interaction::consumed(
                vec![Effect::GainGold(rules::MUTANT_REWARD)],
                StatusEvent::RangedMutantDefeated,
            ),
            // The engine fills in the checkpoint score before appending it.
            Cell::Ladder => Interaction {
                replacement: None,
                effects: vec![Effect::AdvanceLevel],
                events: Vec::new(),
            },
            Cell::Gold { collected: true, .. }
            | Cell::HealthPotion { collected: true }
            | Cell::MeleeMutant { defeated: true }
            | Cell::RangedMutant { defeated: true } => Interaction::none(),
        }
    }
}

fn spent_or(spent: bool, symbol: char) -> char {
    if spent { '.' } else { symbol }
}
