//! Game session state: grid, player, level counters, and the status feed.
//! Movement, ranged attacks, level transitions, and hashing live in submodules.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::mapgen;
use crate::player::Player;
use crate::rng::GameRng;
use crate::rules::{ENTRY_POS, STARTING_LEVEL};
use crate::types::*;

mod hash;
mod level;
mod movement;
mod ranged;
mod render;

#[cfg(test)]
mod test_support;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    player: Player,
    level: u8,
    difficulty: i32,
    steps: u32,
    won: bool,
    exit_reached: bool,
    status_log: Vec<StatusEvent>,
    rng: GameRng,
}

impl Engine {
    pub fn new(height: usize, width: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::new(height, width, seed))
    }

    pub fn square(size: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::square(size, seed))
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = GameRng::seed_from_u64(config.seed);
        let (grid, _) =
            mapgen::build_level(config.height, config.width, config.starting_difficulty, &mut rng);
        info!(
            "new session: {}x{} grid, seed {}, difficulty {}",
            config.height, config.width, config.seed, config.starting_difficulty
        );

        Ok(Self {
            grid,
            player: Player::new(ENTRY_POS),
            level: STARTING_LEVEL,
            difficulty: config.starting_difficulty,
            steps: 0,
            won: false,
            exit_reached: false,
            status_log: Vec::new(),
            rng,
            config,
        })
    }

    /// Lays out a fresh grid and puts the player back on the entry tile.
    /// Health, gold, and step counts carry over.
    pub fn initialize_level(&mut self, difficulty: i32) {
        let (grid, report) =
            mapgen::build_level(self.grid.height, self.grid.width, difficulty, &mut self.rng);
        if !report.is_complete() {
            debug!("level {} is short {} items", self.level, report.requested - report.placed);
        }
        self.grid = grid;
        self.difficulty = difficulty;
        self.player.pos = ENTRY_POS;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        self.grid.cell_at(pos)
    }

    /// Overwrites one cell and returns what was there, or `None` when `pos` is off the grid.
    pub fn replace_cell(&mut self, pos: Pos, cell: Cell) -> Option<Cell> {
        self.grid.set(pos, cell)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn score(&self) -> i32 {
        self.player.gold
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn max_steps(&self) -> u32 {
        self.config.max_steps
    }

    pub fn status_log(&self) -> &[StatusEvent] {
        &self.status_log
    }

    /// Human-readable feed with score checkpoints filtered out.
    pub fn status_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.status_log.iter().filter(|event| event.is_displayable()).map(ToString::to_string)
    }

    pub fn add_status(&mut self, message: impl Into<String>) {
        self.push_status(StatusEvent::Note(message.into()));
    }

    /// Terminal state derived from the victory and exit flags, health, and the step budget.
    pub fn outcome(&self) -> Option<RunOutcome> {
        if self.won {
            Some(RunOutcome::Victory)
        } else if self.exit_reached {
            Some(RunOutcome::ExitReached)
        } else if self.player.is_dead() {
            Some(RunOutcome::Defeat(DefeatCause::HealthDepleted))
        } else if self.steps >= self.config.max_steps {
            Some(RunOutcome::Defeat(DefeatCause::StepLimit))
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    fn push_status(&mut self, event: StatusEvent) {
        debug!("status: {event}");
        self.status_log.push(event);
    }
}
