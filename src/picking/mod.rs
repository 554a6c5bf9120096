//! Resolving pre-resolved world-space hit points to logical point indices.
//!
//! The renderer's raycast reports *where* geometry was hit; this module
//! decides *which* logical point that was by matching the coordinate against
//! a frame's `all_points` with a per-axis tolerance.

mod hover;
mod proximity;

pub use hover::HoverLabel;
pub use proximity::{
    find_closest_index, within_threshold, EXACT_THRESHOLD, PICK_THRESHOLD,
};
