//! Error types for charade_ui.

use std::fmt;

/// Result type alias for charade_ui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for charade_ui operations.
///
/// Highlight sanitization never fails: malformed ranges degrade to fewer or
/// merged highlights instead of surfacing an error. The variants here cover
/// the configuration surface (theme colors, strict route parsing).
#[derive(Debug)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Path does not name a known page route.
    UnknownRoute(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::UnknownRoute(p) => write!(f, "unknown route: {p}"),
        }
    }
}

impl std::error::Error for Error {}
