//! Load-time game constants.
//!
//! Defaults match the classic 20x20 board. A YAML file may override any
//! subset of the fields; the level catalog and the initial snake shape are
//! not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{all_layouts, Board, Coordinate, Snake};

pub const BOARD_SIZE: u16 = 20;
pub const INITIAL_SPEED_MS: u64 = 150;
pub const MIN_SPEED_MS: u64 = 50;
pub const SPEED_DECREMENT_MS: u64 = 3;
pub const SCORE_PER_LEVEL: u32 = 5;
pub const MAX_BOARD_SIZE: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: u16,
    /// Tick interval at the start of a round, in milliseconds
    pub initial_speed_ms: u64,
    /// Floor of the tick interval
    pub min_speed_ms: u64,
    /// Interval reduction per food eaten
    pub speed_decrement_ms: u64,
    /// Foods needed per level
    pub score_per_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            speed_decrement_ms: SPEED_DECREMENT_MS,
            score_per_level: SCORE_PER_LEVEL,
        }
    }
}

impl GameConfig {
    /// Reads a YAML file; missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.score_per_level == 0 {
            return Err(ConfigError::Invalid(
                "score_per_level must be at least 1".to_string(),
            ));
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::Invalid(
                "min_speed_ms must be at least 1".to_string(),
            ));
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "min_speed_ms ({}) exceeds initial_speed_ms ({})",
                self.min_speed_ms, self.initial_speed_ms
            )));
        }

        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board_size ({}) exceeds {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }

        let board = self.board();
        let out_of_board = |cell: &Coordinate| !board.in_bounds(*cell);
        if Snake::initial(self.board_size).cells().any(|c| out_of_board(&c))
            || all_layouts().any(|layout| layout.cells().iter().any(out_of_board))
        {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }

        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_size)
    }
}
