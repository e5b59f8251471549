//! Error types for the folio terminal.
//!
//! The session engine itself never fails; these cover the surroundings
//! (configuration loading, the event bridge, host I/O).

use std::io;

/// Errors produced outside the session engine.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("event error: {0}")]
    Event(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
