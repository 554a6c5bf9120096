//! Point-cloud frames and the store that owns the fetched sequence.
//!
//! A [`Frame`] is one timestep's snapshot as delivered by the point
//! generator. Frames carry no per-point identifiers: "point `i`" is simply
//! `all_points[i]`, and that positional index is what the rest of the crate
//! tracks across time.

mod data;
mod store;

pub use data::{point_choices, Frame, Point3D, Polygon};
pub use store::FrameStore;
