//! Error types for the color engine
//!
//! The engine is pure numeric computation, so the taxonomy is small:
//! channel indexing, text parsing, and broken constant tables.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised by [`Color`](crate::Color) access and engine initialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Channel index outside `0..4`.
    #[error("channel index {index} out of range (expected 0..4)")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
    },

    /// A working-space or adaptation matrix could not be inverted.
    ///
    /// Only reachable when the primaries or reference whites are degenerate.
    #[error("singular {0} matrix")]
    SingularMatrix(&'static str),
}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for strict parsing of illuminant and observer labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseReferenceError {
    /// Label is not one of A, C, D50, D55, D65, D75, F2, F7, F11
    #[error("unknown illuminant '{0}'")]
    UnknownIlluminant(String),
    /// Label is not "2" or "10"
    #[error("unknown observer '{0}'")]
    UnknownObserver(String),
}
