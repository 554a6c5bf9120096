//! Trajectory extraction and the hand-off to the detail window.

use super::VisualizerEngine;
use crate::frame::Point3D;
use crate::util::chart::ChartData;
use crate::util::trajectory::TrajectoryResult;

/// Receiver of trajectory data, typically a chart window.
///
/// Both slices have one entry per frame; `None` marks a frame where the
/// point is missing (positions) or not anomalous (markers).
pub trait TrajectorySink {
    /// Replace whatever the sink is showing with this trajectory.
    fn set_trajectory_data(
        &mut self,
        point_index: usize,
        positions: &[Option<Point3D>],
        anomaly_markers: &[Option<Point3D>],
    );
}

/// Sink that keeps the last trajectory as [`ChartData`].
#[derive(Debug, Default)]
pub struct ChartBuffer {
    /// Chart data from the last hand-off, if any.
    pub chart: Option<ChartData>,
}

impl TrajectorySink for ChartBuffer {
    fn set_trajectory_data(
        &mut self,
        point_index: usize,
        positions: &[Option<Point3D>],
        anomaly_markers: &[Option<Point3D>],
    ) {
        let trajectory = TrajectoryResult {
            positions: positions.to_vec(),
            anomaly_markers: anomaly_markers.to_vec(),
        };
        self.chart = Some(ChartData::from_trajectory(point_index, &trajectory));
    }
}

impl VisualizerEngine {
    /// Positions and anomaly markers of `point_index` across every frame.
    #[must_use]
    pub fn trajectory(&self, point_index: usize) -> TrajectoryResult {
        self.extractor.extract(point_index, self.store.frames())
    }

    /// Trajectory of the selected point, if one is selected.
    #[must_use]
    pub fn selected_trajectory(&self) -> Option<TrajectoryResult> {
        self.selection
            .selected_point()
            .map(|index| self.trajectory(index))
    }

    /// Push the selected point's trajectory to `sink`.
    ///
    /// Returns `false` (and leaves the sink alone) when nothing is
    /// selected.
    pub fn open_detail(&self, sink: &mut impl TrajectorySink) -> bool {
        let Some(index) = self.selection.selected_point() else {
            log::debug!("No point selected, detail view not opened");
            return false;
        };
        let trajectory = self.trajectory(index);
        sink.set_trajectory_data(
            index,
            &trajectory.positions,
            &trajectory.anomaly_markers,
        );
        log::info!("Opened detail view for point {index}");
        true
    }
}
