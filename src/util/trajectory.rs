//! Cross-frame trajectory extraction for a single logical point.
//!
//! Walks the whole frame sequence, reading `all_points[index]` from each
//! frame, and correlates the point with the frame's anomaly list by exact
//! coordinate match. Missing entries stay in place as `None` so that entry
//! `n` always belongs to frame `n`.

use serde::Serialize;

use crate::frame::{Frame, Point3D};
use crate::picking::{find_closest_index, EXACT_THRESHOLD};

/// A world axis, used to split a trajectory into per-axis series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All three axes in chart order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component of `p` along this axis.
    #[inline]
    pub fn component(self, p: Point3D) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
            Self::Z => p.z,
        }
    }

    /// Upper-case axis letter.
    pub fn letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

/// Per-frame positions of one logical point plus its anomaly markers.
///
/// Both vectors have one entry per frame, in frame order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrajectoryResult {
    /// `all_points[index]` of each frame, `None` where the frame is too short.
    pub positions: Vec<Option<Point3D>>,
    /// Matching anomaly point of each frame, `None` where there is none.
    pub anomaly_markers: Vec<Option<Point3D>>,
}

impl TrajectoryResult {
    /// Number of frames covered.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the trajectory covers no frames.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// One axis of the positions, gaps preserved.
    pub fn axis(&self, axis: Axis) -> Vec<Option<f64>> {
        self.positions
            .iter()
            .map(|p| p.map(|p| axis.component(p)))
            .collect()
    }

    /// Frames in which the point was flagged as anomalous.
    pub fn anomalous_frames(&self) -> impl Iterator<Item = usize> + '_ {
        self.anomaly_markers
            .iter()
            .enumerate()
            .filter_map(|(frame, m)| m.map(|_| frame))
    }
}

/// Extracts [`TrajectoryResult`]s from a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryExtractor {
    /// Per-axis tolerance for matching anomaly points to the tracked point.
    pub anomaly_threshold: f64,
}

impl Default for TrajectoryExtractor {
    fn default() -> Self {
        Self {
            anomaly_threshold: EXACT_THRESHOLD,
        }
    }
}

impl TrajectoryExtractor {
    /// Extractor with a custom anomaly tolerance.
    pub fn with_anomaly_threshold(anomaly_threshold: f64) -> Self {
        Self { anomaly_threshold }
    }

    /// Trajectory of logical point `point_index` across `frames`.
    pub fn extract(
        &self,
        point_index: usize,
        frames: &[Frame],
    ) -> TrajectoryResult {
        let (positions, anomaly_markers) = frames
            .iter()
            .map(|frame| {
                let position = frame.point(point_index);
                let marker = position
                    .and_then(|p| self.anomaly_marker(p, &frame.anomaly_points));
                (position, marker)
            })
            .unzip();

        let result = TrajectoryResult {
            positions,
            anomaly_markers,
        };
        log::debug!(
            "Extracted trajectory of point {point_index}: {} frames, {} anomalous",
            result.len(),
            result.anomalous_frames().count()
        );
        result
    }

    /// First anomaly point matching `position`; later matches are ignored.
    fn anomaly_marker(
        &self,
        position: Point3D,
        anomalies: &[Point3D],
    ) -> Option<Point3D> {
        find_closest_index(position, anomalies, self.anomaly_threshold)
            .map(|i| anomalies[i])
    }
}
