//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a click
//! in the 3D view, a progress-bar click, a slider or a programmatic call,
//! is represented as a `Command`. Consumers construct commands and pass
//! them to [`VisualizerEngine::execute`](super::VisualizerEngine::execute).

use crate::frame::Point3D;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(Command::TogglePlayback)?;
/// engine.execute(Command::SeekFraction { fraction: 0.45 })?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    // ── Playback ────────────────────────────────────────────────────
    /// Start advancing frames.
    Play,

    /// Stop advancing frames.
    Pause,

    /// Play if paused, pause if playing.
    TogglePlayback,

    /// Change the playback speed multiplier.
    SetSpeed {
        /// New multiplier, must be `> 0`.
        multiplier: f32,
    },

    /// Jump to a frame (clamped into range).
    Seek {
        /// Target frame.
        index: usize,
    },

    /// Jump to a position along the progress bar.
    SeekFraction {
        /// 0.0 = first frame, 1.0 = past the last frame.
        fraction: f32,
    },

    /// Show the neighbouring frame, wrapping at either end.
    Step {
        /// `true` for the next frame, `false` for the previous one.
        forward: bool,
    },

    // ── Selection ───────────────────────────────────────────────────
    /// Resolve a click in the 3D view to a logical point.
    Pick {
        /// World-space hit on the rendered geometry, `None` for a miss.
        hit: Option<Point3D>,
    },

    /// Select a logical point directly (point selector).
    SelectPoint {
        /// Point to select, `None` to clear.
        index: Option<usize>,
    },

    /// Clear the current selection.
    ClearSelection,

    // ── Hover ───────────────────────────────────────────────────────
    /// Update the coordinate tooltip.
    Hover {
        /// World-space hit under the cursor, `None` when over background.
        hit: Option<Point3D>,
        /// Cursor position in physical pixels.
        screen: (f32, f32),
    },
}
