//! Error types for the search engine
//!
//! Provides the error type returned by search, evaluation helpers, the rules
//! adapter and configuration loading.

use thiserror::Error;

/// Errors that can occur in the search engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Top-level search asked for a depth below one ply
    #[error("Invalid search depth: {depth} (must be at least 1)")]
    InvalidDepth { depth: u32 },

    /// The rules engine refused to apply a move
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Undo requested with no applied move left on the stack
    #[error("Cannot unmake move: move stack is empty")]
    EmptyMoveStack,

    /// Position could not be parsed from FEN
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Square or move text is not valid coordinate notation
    #[error("Invalid notation: '{text}'")]
    InvalidNotation { text: String },

    /// Configuration values are out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration deserialization error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
