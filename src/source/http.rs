use super::{parse_frames, FrameSource, GenerateRequest};
use crate::error::CloudscopeError;
use crate::frame::Frame;

/// POSTs a [`GenerateRequest`] to the point generator and parses the JSON
/// array of frames it answers with.
#[derive(Debug, Clone)]
pub struct HttpFrameSource {
    url: String,
    request: GenerateRequest,
}

impl HttpFrameSource {
    /// Source calling `url` with `request` as the JSON body.
    pub fn new(url: impl Into<String>, request: GenerateRequest) -> Self {
        Self {
            url: url.into(),
            request,
        }
    }
}

impl FrameSource for HttpFrameSource {
    fn fetch(&self) -> Result<Vec<Frame>, CloudscopeError> {
        let body = serde_json::to_string(&self.request)
            .map_err(|e| CloudscopeError::Fetch(e.to_string()))?;

        log::info!(
            "Requesting {} frames of {} points from {}",
            self.request.num_frames,
            self.request.num_points,
            self.url
        );

        let response = ureq::post(&self.url)
            .header("Content-Type", "application/json")
            .send(body.as_str())
            .map_err(|e| {
                CloudscopeError::Fetch(format!("request to {} failed: {e}", self.url))
            })?
            .into_body()
            .read_to_string()
            .map_err(|e| {
                CloudscopeError::Fetch(format!("failed to read response: {e}"))
            })?;

        parse_frames(&response)
    }

    fn describe(&self) -> String {
        format!("generator {}", self.url)
    }
}
