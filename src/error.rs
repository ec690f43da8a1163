use std::path::PathBuf;

use crate::game::DiscKind;

/// Reasons a drop is rejected. A rejected drop leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("no {0} discs remaining")]
    NoDiscsRemaining(DiscKind),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("a {rows}x{columns} board is too small (need at least 6 rows and 7 columns)")]
    BoardTooSmall { rows: usize, columns: usize },

    #[error("a {rows}x{columns} board must have at least as many columns as rows")]
    TooNarrow { rows: usize, columns: usize },

    #[error("a {rows}x{columns} board has too few cells to hand out the special discs")]
    NotEnoughCells { rows: usize, columns: usize },

    #[error("a {rows}x{columns} board is too large")]
    BoardTooLarge { rows: usize, columns: usize },
}

/// Errors that can occur while saving or loading a game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse save data from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize game: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("malformed save data: {0}")]
    Malformed(String),
}

impl SaveError {
    /// True for errors caused by the content of the save rather than the file system.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SaveError::Parse { .. } | SaveError::Malformed(_))
    }
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

/// Errors produced while parsing move notation such as `O4` or `B3`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty move")]
    Empty,

    #[error("unknown disc type '{0}' (use O, B or M)")]
    UnknownKind(char),

    #[error("invalid column in move '{0}'")]
    BadColumn(String),
}
