pub mod cell;
pub mod config;
pub mod engine;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod player;
pub mod replay;
pub mod rng;
pub mod rules;
pub mod scores;
pub mod types;

pub use cell::{Cell, PLAYER_SYMBOL};
pub use config::EngineConfig;
pub use engine::Engine;
pub use grid::Grid;
pub use journal::{MoveJournal, MoveRecord};
pub use player::Player;
pub use replay::*;
pub use scores::{HighScores, ScoreEntry, final_score};
pub use types::*;
