//! Errors from the edges of the core: configuration and persistence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

pub type Result<T> = std::result::Result<T, HeroError>;
