//! Progress-bar state and click-to-seek conversion.

use serde::Serialize;

/// Where playback is within the sequence, as shown on the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressInfo {
    /// Zero-based frame being shown.
    pub current: usize,
    /// Number of frames.
    pub total: usize,
}

impl ProgressInfo {
    /// Progress at frame `current` of `total`.
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Filled width of the bar in percent. The last frame fills it.
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f32 / self.total as f32 * 100.0
    }

    /// Text overlaid on the bar, e.g. `"Frame: 3 / 10"`.
    pub fn label(&self) -> String {
        format!("Frame: {} / {}", self.current + 1, self.total)
    }
}

/// Frame for a seek at `fraction` (0.0 = start, 1.0 = end) along a linear
/// control: `floor(fraction * total)`, clamped to `[0, total)`.
///
/// Returns 0 when `total` is 0. Non-finite fractions land on frame 0.
pub fn seek_index_for_fraction(fraction: f32, total: usize) -> usize {
    if total == 0 || !fraction.is_finite() || fraction <= 0.0 {
        return 0;
    }
    let index = (f64::from(fraction) * total as f64).floor() as usize;
    index.min(total - 1)
}
