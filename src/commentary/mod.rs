//! Game-over commentary.
//!
//! The text generator is an injected collaborator. Whatever it does, the
//! caller only ever sees a string: failures, timeouts and empty replies all
//! map to fixed fallback lines.

mod scripted;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::CommentaryError;

pub use scripted::ScriptedCommentator;

pub const NOT_CONFIGURED: &str = "No commentator configured, so nobody will roast this run.";
pub const PROVIDER_FAILED: &str = "The commentator dropped out, just like your snake...";
pub const EMPTY_REPLY: &str = "The commentator is still working out how to mock that run...";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait CommentaryProvider: Send + Sync {
    async fn generate(&self, score: u32, level: u32) -> Result<String, CommentaryError>;
}

/// Runs `provider` and folds every failure into a fallback line.
pub async fn request_commentary(
    provider: Option<Arc<dyn CommentaryProvider>>,
    score: u32,
    level: u32,
    timeout: Duration,
) -> String {
    let Some(provider) = provider else {
        return NOT_CONFIGURED.to_string();
    };

    let result = match tokio::time::timeout(timeout, provider.generate(score, level)).await {
        Ok(result) => result,
        Err(_) => Err(CommentaryError::Timeout(timeout)),
    };

    match result {
        Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, score, level, "commentary request failed");
            PROVIDER_FAILED.to_string()
        }
    }
}
