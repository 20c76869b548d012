use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Board size {0} cannot hold the initial snake and every level layout")]
    BoardTooSmall(u16),
}

#[derive(Error, Debug)]
pub enum CommentaryError {
    #[error("Commentary provider failed: {0}")]
    Provider(String),

    #[error("Commentary request timed out after {0:?}")]
    Timeout(std::time::Duration),
}
