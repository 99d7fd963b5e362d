use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Invalid palette size: {count} (at least {min} required)")]
    InvalidCount { count: usize, min: usize },

    #[error("Unrecognized color: {0}")]
    UnrecognizedColor(String),

    #[error("Unknown harmony scheme: {0}")]
    UnknownHarmony(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
