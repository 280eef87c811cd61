//! # Error Types
//!
//! This module defines error types used throughout the huefield library.

use thiserror::Error;

/// Main error type for huefield operations
#[derive(Debug, Error)]
pub enum HuefieldError {
    /// Width or height was zero
    #[error("Invalid dimensions {width}x{height}: height and width must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// No color stops were supplied
    #[error("Color stops must not be empty")]
    EmptyColorStops,

    /// Style name is not one of the recognized styles
    #[error("Unknown style '{0}': must be one of 'basic', 'tilted' or 'noise'")]
    UnknownStyle(String),

    /// A color stop could not be parsed
    #[error("Invalid color stop #{index} '{stop}': {reason}")]
    ColorParse {
        index: usize,
        stop: String,
        reason: String,
    },

    /// Image encoding or saving error
    #[error("Image error: {0}")]
    Image(String),

    /// Options file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Transport-level errors (server bind, connection)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
