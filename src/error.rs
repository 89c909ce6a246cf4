use std::path::PathBuf;

/// Errors raised while running a game against the console collaborators.
///
/// Bad columns are not in here: they are [`crate::game::MoveError`] and get
/// retried, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("no valid column left to play")]
    NoValidMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
