use std::time::Duration;

use crate::config::GameConfig;

/// Score, level and tick interval of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub score: u32,
    pub level: u32,
    /// Tick interval in milliseconds; lower is faster.
    pub speed_ms: u64,
}

impl Progression {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            speed_ms: config.initial_speed_ms,
        }
    }

    /// State after one food. Speed ramps on every food, level every
    /// `score_per_level` foods.
    pub fn after_food(self, config: &GameConfig) -> Self {
        let score = self.score + 1;
        let level = if is_level_up(score, config.score_per_level) {
            self.level + 1
        } else {
            self.level
        };

        Self {
            score,
            level,
            speed_ms: next_speed(self.speed_ms, config),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

pub fn is_level_up(score: u32, score_per_level: u32) -> bool {
    score > 0 && score_per_level > 0 && score % score_per_level == 0
}

pub fn next_speed(speed_ms: u64, config: &GameConfig) -> u64 {
    speed_ms
        .saturating_sub(config.speed_decrement_ms)
        .max(config.min_speed_ms)
}
