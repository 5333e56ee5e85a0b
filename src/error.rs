use std::path::PathBuf;

use crate::board::{PlaceError, Stone};

/// Reasons a submitted move is not applied. None of these change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("not {attempted:?}'s turn ({expected:?} to move)")]
    NotYourTurn { attempted: Stone, expected: Stone },

    #[error("no game in progress yet")]
    NotReady,

    #[error(transparent)]
    Board(#[from] PlaceError),
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
