//! Chart-ready view of a trajectory for the detail window.
//!
//! One line series per axis, x = frame number, y = coordinate on that axis.
//! Frames where the point is missing keep a `null` y value so the chart can
//! break the line instead of shifting later frames left.

use serde::Serialize;

use super::trajectory::{Axis, TrajectoryResult};
use crate::frame::Point3D;

/// One sample of an axis series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Frame number.
    pub x: usize,
    /// Coordinate, `None` where the frame lacks the point.
    pub y: Option<f64>,
}

/// Line series for one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSeries {
    /// Which axis this series plots.
    pub axis: Axis,
    /// Legend label, e.g. `"X Axis"`.
    pub label: String,
    /// Line colour as a CSS hex string.
    pub color: &'static str,
    /// Y-axis title.
    pub y_title: String,
    /// One sample per frame.
    pub points: Vec<ChartPoint>,
}

impl AxisSeries {
    fn new(axis: Axis, trajectory: &TrajectoryResult) -> Self {
        let letter = axis.letter();
        Self {
            axis,
            label: format!("{letter} Axis"),
            color: axis_color(axis),
            y_title: format!("Position of Selected Point in {letter} Axis"),
            points: trajectory
                .axis(axis)
                .into_iter()
                .enumerate()
                .map(|(x, y)| ChartPoint { x, y })
                .collect(),
        }
    }
}

fn axis_color(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "#a83232",
        Axis::Y => "#32a832",
        Axis::Z => "#3232a8",
    }
}

/// Shared time axis of the three charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    /// Axis title.
    pub title: &'static str,
    /// First frame number shown.
    pub min: usize,
    /// Last frame number shown.
    pub max: usize,
    /// One label per frame, see [`ChartData::tick_label`].
    pub tick_labels: Vec<String>,
}

impl TimeAxis {
    fn new(frame_count: usize) -> Self {
        Self {
            title: "Time",
            min: 0,
            max: frame_count.saturating_sub(1),
            tick_labels: (0..frame_count).map(ChartData::tick_label).collect(),
        }
    }
}

/// Everything the detail window needs to draw the three trajectory charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Logical point the trajectory belongs to.
    pub point_index: usize,
    /// Number of frames on the x axis.
    pub frame_count: usize,
    /// X axis shared by every series.
    pub time_axis: TimeAxis,
    /// X, Y and Z series in that order.
    pub series: Vec<AxisSeries>,
    /// Per-frame anomaly markers, aligned with the series samples.
    pub anomaly_markers: Vec<Option<Point3D>>,
}

impl ChartData {
    /// Build the three axis series for `trajectory`.
    pub fn from_trajectory(
        point_index: usize,
        trajectory: &TrajectoryResult,
    ) -> Self {
        Self {
            point_index,
            frame_count: trajectory.len(),
            time_axis: TimeAxis::new(trajectory.len()),
            series: Axis::ALL
                .iter()
                .map(|&axis| AxisSeries::new(axis, trajectory))
                .collect(),
            anomaly_markers: trajectory.anomaly_markers.clone(),
        }
    }

    /// Tick label for frame `frame` on the time axis (1-based).
    #[must_use]
    pub fn tick_label(frame: usize) -> String {
        format!("{}. Frame", frame + 1)
    }

    /// Pretty-printed JSON for handing across the window boundary.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn trajectory() -> TrajectoryResult {
        TrajectoryResult {
            positions: vec![Some(DVec3::new(1.0, 2.0, 3.0)), None],
            anomaly_markers: vec![None, None],
        }
    }

    #[test]
    fn one_series_per_axis_with_gaps() {
        let chart = ChartData::from_trajectory(4, &trajectory());
        assert_eq!(chart.frame_count, 2);
        assert_eq!(chart.series.len(), 3);

        let z = &chart.series[2];
        assert_eq!(z.label, "Z Axis");
        assert_eq!(z.color, "#3232a8");
        assert_eq!(z.y_title, "Position of Selected Point in Z Axis");
        assert_eq!(
            z.points,
            vec![ChartPoint { x: 0, y: Some(3.0) }, ChartPoint { x: 1, y: None }]
        );
    }

    #[test]
    fn json_keeps_missing_samples_as_null() {
        let json = ChartData::from_trajectory(0, &trajectory()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["series"][0]["points"][1]["y"].is_null());
        assert_eq!(value["series"][1]["points"][0]["y"], 2.0);
    }

    #[test]
    fn tick_labels_are_one_based() {
        assert_eq!(ChartData::tick_label(0), "1. Frame");
        assert_eq!(ChartData::tick_label(9), "10. Frame");
    }

    #[test]
    fn json_carries_time_axis() {
        let json = ChartData::from_trajectory(0, &trajectory()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let axis = &value["time_axis"];
        assert_eq!(axis["title"], "Time");
        assert_eq!(axis["min"], 0);
        assert_eq!(axis["max"], 1);
        assert_eq!(axis["tick_labels"], serde_json::json!(["1. Frame", "2. Frame"]));
    }

    #[test]
    fn empty_trajectory_has_degenerate_axis() {
        let empty = TrajectoryResult {
            positions: Vec::new(),
            anomaly_markers: Vec::new(),
        };
        let chart = ChartData::from_trajectory(0, &empty);
        assert_eq!(chart.time_axis.max, 0);
        assert!(chart.time_axis.tick_labels.is_empty());
    }
}
