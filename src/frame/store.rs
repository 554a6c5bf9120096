use super::data::Frame;
use crate::error::CloudscopeError;

/// Owns the ordered, immutable frame sequence for a session.
///
/// Populated once from the data source; frames are never mutated after
/// [`load`](Self::load). A store is never observed empty by the engine:
/// [`load`](Self::load) refuses an empty sequence, and the engine is only
/// constructed from a successful load.
#[derive(Debug, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    /// Empty store. Call [`load`](Self::load) before handing it to playback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored sequence wholesale.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidData`] if `frames` is empty; the previous
    /// contents are kept in that case.
    pub fn load(&mut self, frames: Vec<Frame>) -> Result<(), CloudscopeError> {
        if frames.is_empty() {
            return Err(CloudscopeError::InvalidData(
                "frame sequence is empty".into(),
            ));
        }

        let degenerate: usize =
            frames.iter().map(Frame::degenerate_face_count).sum();
        if degenerate > 0 {
            log::warn!("{degenerate} faces have fewer than 3 vertices");
        }

        log::info!(
            "Loaded {} frames ({} points in first frame)",
            frames.len(),
            frames[0].point_count()
        );
        self.frames = frames;
        Ok(())
    }

    /// Parse a JSON array of frames and [`load`](Self::load) it.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidData`] if the text is not a JSON array of
    /// frame objects, or the array is empty.
    pub fn load_json(&mut self, json: &str) -> Result<(), CloudscopeError> {
        let frames: Vec<Frame> = serde_json::from_str(json)?;
        self.load(frames)
    }

    /// Frame at `index`.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::IndexOutOfRange`] if `index` is not in `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&Frame, CloudscopeError> {
        self.frames.get(index).ok_or(CloudscopeError::IndexOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The whole sequence in frame order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
