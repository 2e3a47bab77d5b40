//! Crate-level error types.
//!
//! The numerical core ([`crate::axes::extract`], [`crate::geometry::build`])
//! is total and never produces these; they come from the configuration and
//! lifecycle layers around it.

use std::fmt;

/// Errors produced by the viso-axes crate.
#[derive(Debug)]
pub enum AxesError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// No factory registered under the requested representation name.
    UnknownRepresentation(String),
    /// Attribute update requested before the buffers were created.
    NotBuilt,
}

impl fmt::Display for AxesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownRepresentation(name) => {
                write!(f, "unknown representation: {name}")
            }
            Self::NotBuilt => {
                write!(f, "representation updated before create")
            }
        }
    }
}

impl std::error::Error for AxesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AxesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
