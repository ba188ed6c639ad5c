use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `None` when the shifted coordinates do not fit in `i32`.
    pub fn offset(self, row_delta: i32, col_delta: i32) -> Option<Self> {
        Some(Self { row: self.row.checked_add(row_delta)?, col: self.col.checked_add(col_delta)? })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row and column delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_delta(row_delta: i32, col_delta: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.delta() == (row_delta, col_delta))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefeatCause {
    HealthDepleted,
    StepLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    ExitReached,
    Defeat(DefeatCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    OutOfBounds,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Rejected(MoveRejection),
    Finished(RunOutcome),
}

impl MoveOutcome {
    /// Whether the driver should treat the move as accepted.
    /// Winning or escaping counts; defeat and rejection do not.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            MoveOutcome::Moved
                | MoveOutcome::Finished(RunOutcome::Victory)
                | MoveOutcome::Finished(RunOutcome::ExitReached)
        )
    }
}

/// Typed event feed consumed by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusEvent {
    Moved(Direction),
    BlockedOutOfBounds,
    BlockedByWall,
    GoldCollected,
    PotionConsumed,
    TrapTriggered,
    MeleeMutantDefeated,
    RangedMutantDefeated,
    RangedAttackHit,
    RangedAttackMissed,
    ExitFound,
    TopScoreCheckpoint { score: i32 },
    LevelAdvanced { level: u8, difficulty: i32 },
    LevelEntered { level: u8 },
    Victory { level: u8 },
    DefeatedByHealth,
    DefeatedBySteps,
    Note(String),
}

impl StatusEvent {
    /// Checkpoints drive the high-score table and are not shown as log text.
    pub fn is_displayable(&self) -> bool {
        !matches!(self, StatusEvent::TopScoreCheckpoint { .. })
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::Moved(direction) => write!(f, "You moved {}.", direction.label()),
            StatusEvent::BlockedOutOfBounds => f.write_str("You tried to move out of bounds."),
            StatusEvent::BlockedByWall => f.write_str("You tried to move but it is a wall."),
            StatusEvent::GoldCollected => f.write_str("You picked up a gold."),
            StatusEvent::PotionConsumed => write!(
                f,
                "You picked up a health potion and recovered {} HP.",
                rules::POTION_HEAL
            ),
            StatusEvent::TrapTriggered => {
                write!(f, "You fell into a trap and lost {} HP.", rules::TRAP_DAMAGE)
            }
            StatusEvent::MeleeMutantDefeated => write!(
                f,
                "You attacked a melee mutant and won. Lost {} HP, gained {} score.",
                rules::MELEE_MUTANT_DAMAGE,
                rules::MUTANT_REWARD
            ),
            StatusEvent::RangedMutantDefeated => write!(
                f,
                "You attacked a ranged mutant and won. Gained {} score.",
                rules::MUTANT_REWARD
            ),
            StatusEvent::RangedAttackHit => write!(
                f,
                "A ranged mutant attacked and you lost {} HP.",
                rules::RANGED_ATTACK_DAMAGE
            ),
            StatusEvent::RangedAttackMissed => f.write_str("A ranged mutant attacked, but missed."),
            StatusEvent::ExitFound => f.write_str("You found the exit!"),
            StatusEvent::TopScoreCheckpoint { score } => write!(f, "Score checkpoint: {score}."),
            StatusEvent::LevelAdvanced { level, difficulty } => write!(
                f,
                "Advancing to Level {level}! Difficulty increased to {difficulty}."
            ),
            StatusEvent::LevelEntered { level } => write!(f, "You are now on Level {level}!"),
            StatusEvent::Victory { level } => {
                write!(f, "You reached the ladder on Level {level}. You win!")
            }
            StatusEvent::DefeatedByHealth => f.write_str("You lost! HP dropped to 0."),
            StatusEvent::DefeatedBySteps => f.write_str("You lost! Maximum steps reached."),
            StatusEvent::Note(message) => f.write_str(message),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid {height}x{width} is too small; both dimensions must be at least {minimum}")]
    GridTooSmall { height: usize, width: usize, minimum: usize },
    #[error("step budget must be positive")]
    ZeroStepBudget,
    #[error("grid {height}x{width} cannot hold {cells} cells")]
    GridShapeMismatch { height: usize, width: usize, cells: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_delta() {
        for direction in Direction::ALL {
            let (row_delta, col_delta) = direction.delta();
            assert_eq!(Direction::from_delta(row_delta, col_delta), Some(direction));
        }
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn offset_reports_overflow_instead_of_wrapping() {
        assert_eq!(Pos::new(1, 1).offset(2, -1), Some(Pos::new(3, 0)));
        assert_eq!(Pos::new(1, 1).offset(i32::MAX, 0), None);
        assert_eq!(Pos::new(-1, 1).offset(0, i32::MIN), None);
    }

    #[test]
    fn status_text_matches_presentation_strings() {
        assert_eq!(StatusEvent::Moved(Direction::Right).to_string(), "You moved right.");
        assert_eq!(
            StatusEvent::LevelAdvanced { level: 2, difficulty: 5 }.to_string(),
            "Advancing to Level 2! Difficulty increased to 5."
        );
        assert_eq!(
            StatusEvent::MeleeMutantDefeated.to_string(),
            "You attacked a melee mutant and won. Lost 2 HP, gained 2 score."
        );
    }

    #[test]
    fn score_checkpoint_is_hidden_from_display_feed() {
        assert!(!StatusEvent::TopScoreCheckpoint { score: 4 }.is_displayable());
        assert!(StatusEvent::GoldCollected.is_displayable());
    }

    #[test]
    fn victory_and_exit_count_as_successful_moves() {
        assert!(MoveOutcome::Moved.is_success());
        assert!(MoveOutcome::Finished(RunOutcome::Victory).is_success());
        assert!(MoveOutcome::Finished(RunOutcome::ExitReached).is_success());
        assert!(!MoveOutcome::Finished(RunOutcome::Defeat(DefeatCause::StepLimit)).is_success());
        assert!(!MoveOutcome::Rejected(MoveRejection::Wall).is_success());
    }
}
