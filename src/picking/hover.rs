use serde::Serialize;

use crate::frame::Point3D;

/// Coordinate tooltip shown next to the cursor while hovering a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    /// Cursor position in physical pixels.
    pub screen: (f32, f32),
    /// World-space position of the hovered geometry.
    pub position: Point3D,
    /// Number of decimals shown per axis.
    pub precision: usize,
}

impl HoverLabel {
    /// Label for a hovered point at cursor `screen`.
    pub fn new(screen: (f32, f32), position: Point3D, precision: usize) -> Self {
        Self {
            screen,
            position,
            precision,
        }
    }

    /// One line per axis, e.g. `"x: 1.23\ny: -0.50\nz: 2.00"`.
    pub fn text(&self) -> String {
        let p = self.precision;
        format!(
            "x: {:.p$}\ny: {:.p$}\nz: {:.p$}",
            self.position.x, self.position.y, self.position.z
        )
    }
}
