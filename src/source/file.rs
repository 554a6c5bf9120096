use std::path::PathBuf;

use super::{parse_frames, FrameSource};
use crate::error::CloudscopeError;
use crate::frame::Frame;

/// Reads a previously saved generator response from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading the JSON array at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Frame>, CloudscopeError> {
        let body = std::fs::read_to_string(&self.path)?;
        parse_frames(&body)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
