use serde::{Deserialize, Serialize};

use crate::mapgen;
use crate::rules;
use crate::types::EngineError;

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub height: usize,
    pub width: usize,
    pub seed: u64,
    pub starting_difficulty: i32,
    pub max_steps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            seed: 0,
            starting_difficulty: rules::DEFAULT_DIFFICULTY,
            max_steps: rules::MAX_STEPS,
        }
    }
}

impl EngineConfig {
    pub fn new(height: usize, width: usize, seed: u64) -> Self {
        Self { height, width, seed, ..Self::default() }
    }

    pub fn square(size: usize, seed: u64) -> Self {
        Self::new(size, size, seed)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        mapgen::check_dimensions(self.height, self.width)?;
        if self.max_steps == 0 {
            return Err(EngineError::ZeroStepBudget);
        }
        Ok(())
    }
}
