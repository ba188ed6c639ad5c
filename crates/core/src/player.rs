use serde::{Deserialize, Serialize};

use crate::rules::MAX_HEALTH;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Pos,
    pub health: i32,
    pub gold: i32,
    pub steps: u32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, health: MAX_HEALTH, gold: 0, steps: 0 }
    }

    pub fn max_health(&self) -> i32 {
        MAX_HEALTH
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn add_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    pub fn increment_steps(&mut self) {
        self.steps += 1;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
