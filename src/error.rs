//! Error types for the portfolio terminal.
//!
//! Defines the main error enum used throughout the crate. Invalid and unknown
//! commands are not errors: the dispatcher answers those with plain text.

use thiserror::Error;

/// Main error type for terminal operations.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// A command handler failed while producing its output.
    #[error("Handler error: {0}")]
    Handler(String),

    /// The message responder could not produce a reply.
    #[error("Responder error: {0}")]
    Responder(String),

    /// Configuration errors (invalid config file, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TerminalError {
    /// Creates a handler error with the given message.
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }

    /// Creates a responder error with the given message.
    pub fn responder(msg: impl Into<String>) -> Self {
        Self::Responder(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Handler(_) => "Handler Error",
            Self::Responder(_) => "Responder Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using TerminalError.
pub type Result<T> = std::result::Result<T, TerminalError>;
