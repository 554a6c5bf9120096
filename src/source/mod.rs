//! Frame sequence data sources.
//!
//! The engine only ever sees "an ordered sequence of frames became
//! available" or "the load failed". Where the frames come from (the point
//! generator over HTTP, a JSON file on disk) is behind [`FrameSource`], and
//! [`FrameLoader`] runs a source off the main thread.

mod file;
#[cfg(feature = "fetch")]
mod http;
mod loader;

pub use file::JsonFileSource;
#[cfg(feature = "fetch")]
pub use http::HttpFrameSource;
pub use loader::{FrameLoader, LoadState};
use serde::{Deserialize, Serialize};

use crate::error::CloudscopeError;
use crate::frame::Frame;

/// Body of a generate call to the point generator service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Points per frame.
    pub num_points: u32,
    /// Spatial scale of the generated cloud.
    pub scale: f64,
    /// Number of frames.
    pub num_frames: u32,
}

/// Something that can produce the full frame sequence in one call.
///
/// Implementations block until the sequence is available. No retry or
/// backoff is expected; a failure is reported once and the caller decides
/// what to show.
pub trait FrameSource {
    /// Produce every frame, in order.
    ///
    /// # Errors
    ///
    /// Whatever prevented the frames from being produced.
    fn fetch(&self) -> Result<Vec<Frame>, CloudscopeError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Parse a generator response body: a JSON array of frame objects.
///
/// # Errors
///
/// [`CloudscopeError::InvalidData`] if the body is not such an array or the
/// array is empty.
pub fn parse_frames(body: &str) -> Result<Vec<Frame>, CloudscopeError> {
    let frames: Vec<Frame> = serde_json::from_str(body)?;
    if frames.is_empty() {
        return Err(CloudscopeError::InvalidData(
            "response contained no frames".into(),
        ));
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_generator_body() {
        let request = GenerateRequest {
            num_points: 50,
            scale: 2.0,
            num_frames: 10,
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"num_points": 50, "scale": 2.0, "num_frames": 10})
        );
    }

    #[test]
    fn parse_frames_requires_a_non_empty_array() {
        assert!(matches!(
            parse_frames("[]"),
            Err(CloudscopeError::InvalidData(_))
        ));
        assert!(parse_frames("null").is_err());
        assert!(parse_frames("{\"all_points\": []}").is_err());
        assert_eq!(parse_frames("[{}, {}]").unwrap().len(), 2);
    }
}
