use crate::frame::Point3D;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`Command`](crate::engine::Command) values. Hit
/// coordinates are already resolved to world space by the host's raycaster.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(InputEvent::Click {
///     hit: raycast_hit,
/// }) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary click in the 3D view.
    Click {
        /// World-space point on the intersected geometry, if any.
        hit: Option<Point3D>,
    },
    /// The geometry under the cursor changed.
    Hover {
        /// World-space point on the hovered geometry, if any.
        hit: Option<Point3D>,
    },
    /// Click on the progress bar.
    ProgressBarClick {
        /// Click position relative to the bar's left edge, in pixels.
        x: f32,
        /// Width of the bar in pixels.
        width: f32,
    },
    /// The speed slider moved.
    SpeedChanged {
        /// Raw slider value.
        value: f32,
    },
    /// An entry of the point selector was chosen.
    PointChosen {
        /// Chosen logical point, `None` for the placeholder entry.
        index: Option<usize>,
    },
}
