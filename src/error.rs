use std::path::PathBuf;

/// Reasons a typed position is refused by placement-legality checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("no position entered")]
    AbsentInput,

    #[error("input too short or too long")]
    BadFormat,

    #[error("position out of the board")]
    OutOfRange,

    #[error("position already occupied")]
    Occupied,
}

/// Parsing was handed nothing to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position token is missing or incomplete")]
pub struct InvalidInput;

/// Errors raised by a placement session on top of the board rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("queen {queen} at '{token}' rejected: {source}")]
    Rejected {
        queen: usize,
        token: String,
        source: PositionError,
    },

    #[error("all {0} queens are already placed")]
    Complete(usize),

    #[error("only {placed} of {required} queens placed")]
    Incomplete { placed: usize, required: usize },

    #[error("expected {expected} positions, got {got}")]
    WrongCount { expected: usize, got: usize },
}

impl SessionError {
    /// The board-level rejection behind this error, if any.
    pub fn position_error(&self) -> Option<PositionError> {
        match self {
            SessionError::Rejected { source, .. } => Some(*source),
            _ => None,
        }
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
