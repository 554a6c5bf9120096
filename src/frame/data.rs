use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A point in world space. Serialized as a `[x, y, z]` array.
pub type Point3D = DVec3;

/// Planar mesh facet: an ordered ring of at least three vertices.
///
/// Faces are inert payload for the renderer; nothing in the playback or
/// identity-tracking path looks inside them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(pub Vec<Point3D>);

impl Polygon {
    /// Vertices in winding order.
    pub fn vertices(&self) -> &[Point3D] {
        &self.0
    }

    /// Whether the ring has enough vertices to describe a facet.
    pub fn is_facet(&self) -> bool {
        self.0.len() >= 3
    }
}

/// One timestep of the point cloud.
///
/// Every collection defaults to empty so a frame missing a key still loads;
/// lookups against it then resolve to `None` rather than failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Points strictly inside the hull.
    pub inner_points: Vec<Point3D>,
    /// Hull vertices.
    pub outermost_points: Vec<Point3D>,
    /// Points flagged by the generator's anomaly detector.
    pub anomaly_points: Vec<Point3D>,
    /// Every point of the frame. `all_points[i]` is logical point `i`.
    pub all_points: Vec<Point3D>,
    /// Simplified hull facets.
    pub faces: Vec<Polygon>,
}

impl Frame {
    /// Position of logical point `index`, if this frame has that many points.
    #[inline]
    pub fn point(&self, index: usize) -> Option<Point3D> {
        self.all_points.get(index).copied()
    }

    /// Number of logical points in this frame.
    pub fn point_count(&self) -> usize {
        self.all_points.len()
    }

    /// Number of facets with fewer than three vertices.
    pub fn degenerate_face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.is_facet()).count()
    }
}

/// Entries for the point selector: a "nothing selected" placeholder
/// followed by one `Point {i}` entry per logical point of `frame`.
pub fn point_choices(frame: &Frame) -> Vec<(Option<usize>, String)> {
    std::iter::once((None, "Select a point".to_owned()))
        .chain((0..frame.point_count()).map(|i| (Some(i), format!("Point {i}"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format() {
        let json = r#"{
            "all_points": [[0, 0, 0], [1, 2, 3]],
            "inner_points": [[0, 0, 0]],
            "outermost_points": [[1, 2, 3]],
            "anomaly_points": [[1, 2, 3]],
            "faces": [[[0, 0, 0], [1, 0, 0], [0, 1, 0]]]
        }"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.point_count(), 2);
        assert_eq!(frame.point(1), Some(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(frame.anomaly_points, vec![DVec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(frame.faces.len(), 1);
        assert!(frame.faces[0].is_facet());
        assert_eq!(frame.degenerate_face_count(), 0);
    }

    #[test]
    fn coordinates_keep_f64_precision() {
        let frame: Frame =
            serde_json::from_str(r#"{"all_points": [[0.1, 1234567.891, -1e-9]]}"#)
                .unwrap();
        assert_eq!(frame.all_points[0], DVec3::new(0.1, 1_234_567.891, -1e-9));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let frame: Frame =
            serde_json::from_str(r#"{"all_points": [[1, 1, 1]]}"#).unwrap();
        assert!(frame.anomaly_points.is_empty());
        assert!(frame.faces.is_empty());
        assert_eq!(frame.point(0), Some(DVec3::ONE));
        assert_eq!(frame.point(1), None);
    }

    #[test]
    fn rejects_points_without_three_coordinates() {
        let result: Result<Frame, _> =
            serde_json::from_str(r#"{"all_points": [[1, 2]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn point_choices_start_with_placeholder() {
        let frame = Frame {
            all_points: vec![DVec3::ZERO, DVec3::X],
            ..Frame::default()
        };
        let choices = point_choices(&frame);
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0], (None, "Select a point".to_owned()));
        assert_eq!(choices[2], (Some(1), "Point 1".to_owned()));
    }
}
