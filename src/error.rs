//! Crate-level error types.
//!
//! Camera control itself never fails (a missing floor, a denied pointer
//! lock or an empty ray hit simply turn into a no-op for that tick). The
//! variants here cover the fallible edges around it: options files, mode
//! names and replay scripts.

use std::fmt;

/// Errors produced by the city-controls crate.
#[derive(Debug)]
pub enum ControlsError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A control mode name that does not match any known mode.
    UnknownMode(String),
    /// Malformed input replay script.
    Script(String),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownMode(name) => {
                write!(f, "unknown control mode: {name}")
            }
            Self::Script(msg) => write!(f, "replay script error: {msg}"),
        }
    }
}

impl std::error::Error for ControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
