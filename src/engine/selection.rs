//! Pick, select and hover methods for VisualizerEngine

use super::render::RenderRequest;
use super::VisualizerEngine;
use crate::error::CloudscopeError;
use crate::frame::Point3D;
use crate::picking::{find_closest_index, HoverLabel};

impl VisualizerEngine {
    /// Resolve a raycast hit to a point of the reference frame and select
    /// it.
    ///
    /// `None` (ray missed everything) and hits with no point within the
    /// pick tolerance are pick-misses: the selection is cleared.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::IndexOutOfRange`] if the reference frame is not
    /// in the store.
    pub fn pick(
        &mut self,
        hit: Option<Point3D>,
    ) -> Result<Option<usize>, CloudscopeError> {
        let reference = self.selection.reference_frame();
        let frame = self.store.get(reference)?;
        let resolved = hit.and_then(|target| {
            find_closest_index(
                target,
                &frame.all_points,
                self.options.picking.pick_threshold,
            )
            .and_then(|index| frame.point(index).map(|p| (index, p)))
        });

        self.selection
            .record_pick(resolved.map(|(index, _)| index), reference);
        self.requests.push(match resolved {
            Some((index, position)) => {
                RenderRequest::HighlightPoint { index, position }
            }
            None => RenderRequest::ClearHighlight,
        });
        self.queue_marker(self.displayed);
        Ok(resolved.map(|(index, _)| index))
    }

    /// Select a point by index, as from the point dropdown. `None` is the
    /// placeholder entry and clears the selection.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidArgument`] if `index` is not a point of
    /// the reference frame.
    pub fn select_point(
        &mut self,
        index: Option<usize>,
    ) -> Result<(), CloudscopeError> {
        let Some(index) = index else {
            self.clear_selection();
            return Ok(());
        };
        let reference = self.selection.reference_frame();
        let position = self.store.get(reference)?.point(index).ok_or_else(|| {
            CloudscopeError::InvalidArgument(format!(
                "point {index} does not exist in frame {reference}"
            ))
        })?;

        self.selection.record_pick(Some(index), reference);
        self.requests
            .push(RenderRequest::HighlightPoint { index, position });
        self.queue_marker(self.displayed);
        Ok(())
    }

    /// Drop the selection and its highlight.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.requests.push(RenderRequest::ClearHighlight);
        self.requests.push(RenderRequest::ClearMarker);
    }

    /// Show or hide the coordinate label. Never touches the selection.
    pub fn hover(&mut self, hit: Option<Point3D>, screen: (f32, f32)) {
        self.requests.push(match hit {
            Some(position) => RenderRequest::ShowLabel(HoverLabel::new(
                screen,
                position,
                self.options.picking.label_precision,
            )),
            None => RenderRequest::HideLabel,
        });
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::super::test_support::{engine, grid_frames};
    use super::*;
    use crate::engine::Command;
    use crate::frame::Frame;

    #[test]
    fn pick_resolves_against_reference_frame() {
        let (mut engine, _) = engine(grid_frames(3, 4));
        let picked = engine.pick(Some(DVec3::new(2.005, 0.0, 0.0))).unwrap();
        assert_eq!(picked, Some(2));
        assert_eq!(engine.selection_state().selected_point, Some(2));
        assert_eq!(
            engine.drain_render_requests(),
            vec![
                RenderRequest::HighlightPoint {
                    index: 2,
                    position: DVec3::new(2.0, 0.0, 0.0),
                },
                RenderRequest::ShowMarker {
                    position: DVec3::new(2.0, 0.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn pick_miss_clears_selection() {
        let (mut engine, _) = engine(grid_frames(2, 3));
        let _ = engine.pick(Some(DVec3::new(1.0, 0.0, 0.0))).unwrap();
        assert_eq!(engine.pick(Some(DVec3::splat(50.0))).unwrap(), None);
        assert_eq!(engine.selection_state().selected_point, None);

        let _ = engine.pick(Some(DVec3::new(1.0, 0.0, 0.0))).unwrap();
        engine.execute(Command::Pick { hit: None }).unwrap();
        assert_eq!(engine.selection_state().selected_point, None);
        assert_eq!(
            engine.drain_render_requests().last(),
            Some(&RenderRequest::ClearMarker)
        );
    }

    #[test]
    fn marker_follows_selection_into_later_frames() {
        let (mut engine, _) = engine(grid_frames(3, 2));
        engine.execute(Command::SelectPoint { index: Some(1) }).unwrap();
        let _ = engine.drain_render_requests();

        let _ = engine.seek(2);
        assert_eq!(
            engine.drain_render_requests().last(),
            Some(&RenderRequest::ShowMarker {
                position: DVec3::new(1.0, 2.0, 0.0),
            })
        );
    }

    #[test]
    fn marker_cleared_when_frame_lacks_the_point() {
        let mut frames = grid_frames(2, 3);
        frames[1] = Frame {
            all_points: vec![DVec3::ZERO],
            ..Frame::default()
        };
        let (mut engine, _) = engine(frames);
        engine.select_point(Some(2)).unwrap();
        let _ = engine.seek(1);
        assert_eq!(
            engine.drain_render_requests().last(),
            Some(&RenderRequest::ClearMarker)
        );
        assert_eq!(engine.selection_state().selected_point, Some(2));
    }

    #[test]
    fn select_point_rejects_unknown_index() {
        let (mut engine, _) = engine(grid_frames(2, 3));
        assert!(matches!(
            engine.select_point(Some(3)),
            Err(CloudscopeError::InvalidArgument(_))
        ));
        assert_eq!(engine.selection_state().selected_point, None);
        assert!(engine.drain_render_requests().is_empty());
    }

    #[test]
    fn placeholder_choice_clears() {
        let (mut engine, _) = engine(grid_frames(2, 3));
        engine.select_point(Some(0)).unwrap();
        engine.select_point(None).unwrap();
        assert_eq!(engine.selection_state().selected_point, None);
    }

    #[test]
    fn hover_shows_formatted_label() {
        let (mut engine, _) = engine(grid_frames(1, 1));
        engine.hover(Some(DVec3::new(1.234, 4.5, -7.891)), (10.0, 20.0));
        engine.hover(None, (0.0, 0.0));
        let requests = engine.drain_render_requests();
        let RenderRequest::ShowLabel(label) = &requests[0] else {
            panic!("expected a label, got {:?}", requests[0]);
        };
        assert_eq!(label.text(), "x: 1.23\ny: 4.50\nz: -7.89");
        assert_eq!(label.screen, (10.0, 20.0));
        assert_eq!(requests[1], RenderRequest::HideLabel);
        assert_eq!(engine.selection_state().selected_point, None);
    }
}
