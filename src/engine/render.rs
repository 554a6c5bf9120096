//! Requests from the engine to the external renderer.
//!
//! The engine never draws. It queues these requests whenever the displayed
//! frame or the selection changes, and the host drains and applies them.

use crate::frame::Point3D;
use crate::picking::HoverLabel;
use crate::util::progress::ProgressInfo;

/// Something the renderer should do.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    /// Rebuild the scene from frame `index`.
    RedrawFrame {
        /// Frame to draw.
        index: usize,
    },
    /// Update the progress bar.
    Progress(ProgressInfo),
    /// Highlight the picked point.
    HighlightPoint {
        /// Logical point index.
        index: usize,
        /// Where it sits in the reference frame.
        position: Point3D,
    },
    /// Remove the pick highlight.
    ClearHighlight,
    /// Draw the X-shaped selection marker.
    ShowMarker {
        /// Where the selected point sits in the displayed frame.
        position: Point3D,
    },
    /// Remove the selection marker.
    ClearMarker,
    /// Show the coordinate tooltip.
    ShowLabel(HoverLabel),
    /// Hide the coordinate tooltip.
    HideLabel,
}
