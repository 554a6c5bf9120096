use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::source::GenerateRequest;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Data Source", inline)]
#[serde(default)]
/// Where frames come from and what to ask the generator for.
pub struct SourceOptions {
    /// Endpoint of the point generator service.
    #[schemars(title = "Generator URL")]
    pub url: String,
    /// Points per frame.
    #[schemars(title = "Points", range(min = 4, max = 100_000))]
    pub num_points: u32,
    /// Spatial scale of the generated cloud.
    #[schemars(title = "Scale", range(min = 0.1, max = 100.0))]
    pub scale: f64,
    /// Number of frames to generate.
    #[schemars(title = "Frames", range(min = 1, max = 10_000))]
    pub num_frames: u32,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000/generate_points".into(),
            num_points: 100,
            scale: 1.0,
            num_frames: 100,
        }
    }
}

impl SourceOptions {
    /// Request body for the generator.
    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            num_points: self.num_points,
            scale: self.scale,
            num_frames: self.num_frames,
        }
    }
}
