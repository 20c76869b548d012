use std::time::Duration;

use async_trait::async_trait;

use super::CommentaryProvider;
use crate::error::CommentaryError;

const FIRST_LEVEL: &[&str] = &[
    "Didn't even clear level 1? Back to snake kindergarten with you.",
    "Level 1 has no walls inside it. None. And yet here we are.",
    "The open field beat you. The open field.",
];

const LOW_LEVEL: &[&str] = &[
    "Decent appetite, shame about the steering. Those pillars were not decoration.",
    "You found the food just fine. The obstacles found you faster.",
    "Respectable score for someone who treats walls as suggestions.",
];

const HIGH_LEVEL: &[&str] = &[
    "Past level 3? Fine, that was actually good. Probably luck, though.",
    "Impressive run. I'll assume the random food placement was on your side.",
    "Genuinely skilled, or the snake gods owed you one. Hard to say.",
];

const MIDDLE: &[&str] = &[
    "Not bad, not great. A perfectly forgettable snake.",
    "You survived long enough to see some walls. Then you met one.",
];

/// Offline commentator: canned lines picked from the final score and level.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCommentator {
    latency: Duration,
}

impl ScriptedCommentator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each reply, to mimic a remote service.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn compose(score: u32, level: u32) -> String {
        let lines = match (level, score) {
            (0..=1, _) => FIRST_LEVEL,
            (4.., _) => HIGH_LEVEL,
            (_, score) if score >= 7 => LOW_LEVEL,
            _ => MIDDLE,
        };
        let line = lines[score as usize % lines.len()];
        format!("Score {score}, level {level}. {line}")
    }
}

#[async_trait]
impl CommentaryProvider for ScriptedCommentator {
    async fn generate(&self, score: u32, level: u32) -> Result<String, CommentaryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::compose(score, level))
    }
}
