//! Crate-level error types.

use std::fmt;

/// Errors produced by the cloudscope crate.
#[derive(Debug)]
pub enum CloudscopeError {
    /// Malformed or empty frame sequence. Playback cannot start.
    InvalidData(String),
    /// Direct frame access outside `[0, len)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of frames actually stored.
        len: usize,
    },
    /// A caller-supplied argument was rejected; prior state is unchanged.
    InvalidArgument(String),
    /// The point generator service could not be reached or answered badly.
    Fetch(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CloudscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidData(msg) => write!(f, "invalid frame data: {msg}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "frame index {index} out of range (0..{len})")
            }
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {msg}")
            }
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CloudscopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CloudscopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CloudscopeError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidData(e.to_string())
    }
}
