use std::path::PathBuf;

/// Reasons a move is rejected. The game state is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("a piece is still dropping")]
    DropInProgress,
}

/// Errors raised while asking an agent for the computer's move.
///
/// Both variants mean the turn machinery was driven into a state it should
/// have ruled out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("no playable column left")]
    NoLegalMove,

    #[error("agent chose column {column}, which was rejected: {source}")]
    IllegalChoice { column: usize, source: MoveError },
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
