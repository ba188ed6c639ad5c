//! Player movement and cell interaction resolution.

use log::info;

use super::*;
use crate::cell::{Effect, Interaction};

impl Engine {
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let (row_delta, col_delta) = direction.delta();
        self.step(row_delta, col_delta, Some(direction))
    }

    /// Delta-based movement. Only unit deltas along one axis produce a "moved" status.
    pub fn move_by(&mut self, row_delta: i32, col_delta: i32) -> MoveOutcome {
        self.step(row_delta, col_delta, Direction::from_delta(row_delta, col_delta))
    }

    fn step(
        &mut self,
        row_delta: i32,
        col_delta: i32,
        direction: Option<Direction>,
    ) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome::Rejected(MoveRejection::GameOver);
        }

        let destination = self
            .player
            .pos
            .offset(row_delta, col_delta)
            .and_then(|pos| Some((pos, self.grid.cell_at(pos)?)));
        let Some((target, cell)) = destination else {
            self.push_status(StatusEvent::BlockedOutOfBounds);
            return MoveOutcome::Rejected(MoveRejection::OutOfBounds);
        };
        if !cell.is_passable() {
            self.push_status(StatusEvent::BlockedByWall);
            return MoveOutcome::Rejected(MoveRejection::Wall);
        }

        self.player.pos = target;
        self.player.increment_steps();
        self.steps += 1;
        if let Some(direction) = direction {
            self.push_status(StatusEvent::Moved(direction));
        }

        self.resolve_interaction(target, cell);
        if let Some(outcome @ (RunOutcome::Victory | RunOutcome::ExitReached)) = self.outcome() {
            info!("run finished with {outcome:?} after {} steps", self.steps);
            return MoveOutcome::Finished(outcome);
        }

        self.resolve_ranged_attacks(target);

        if self.player.is_dead() {
            self.push_status(StatusEvent::DefeatedByHealth);
            info!("player died on level {} after {} steps", self.level, self.steps);
            return MoveOutcome::Finished(RunOutcome::Defeat(DefeatCause::HealthDepleted));
        }
        if self.steps >= self.config.max_steps {
            self.push_status(StatusEvent::DefeatedBySteps);
            info!("step budget of {} exhausted on level {}", self.config.max_steps, self.level);
            return MoveOutcome::Finished(RunOutcome::Defeat(DefeatCause::StepLimit));
        }
        MoveOutcome::Moved
    }

    /// Replacement goes onto the current grid before effects run, since a
    /// level advance swaps the grid out.
    fn resolve_interaction(&mut self, pos: Pos, cell: Cell) {
        let Interaction { replacement, effects, events } = cell.interact();
        if let Some(replacement) = replacement {
            self.grid.set(pos, replacement);
        }
        for event in events {
            self.push_status(event);
        }
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Damage(amount) => self.player.take_damage(amount),
            Effect::Heal(amount) => self.player.heal(amount),
            Effect::GainGold(amount) => self.player.add_gold(amount),
            Effect::AdvanceLevel => {
                self.push_status(StatusEvent::TopScoreCheckpoint { score: self.score() });
                self.advance_level();
            }
            Effect::ReachExit => self.exit_reached = true,
        }
    }
}
