//! Ladder-driven level progression and the final-level victory.

use log::info;

use super::*;
use crate::rules::{DIFFICULTY_STEP, FINAL_LEVEL};

impl Engine {
    pub(super) fn advance_level(&mut self) {
        if self.level >= FINAL_LEVEL {
            self.push_status(StatusEvent::Victory { level: self.level });
            self.won = true;
            info!("victory on level {} with {} gold", self.level, self.player.gold);
            return;
        }

        self.level += 1;
        self.difficulty += DIFFICULTY_STEP;
        self.push_status(StatusEvent::LevelAdvanced {
            level: self.level,
            difficulty: self.difficulty,
        });
        info!("advancing to level {} at difficulty {}", self.level, self.difficulty);

        self.initialize_level(self.difficulty);
        self.push_status(StatusEvent::LevelEntered { level: self.level });
    }
}
