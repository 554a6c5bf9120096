//! Selected-point bookkeeping.
//!
//! A selection is a positional index into `all_points`. There is no stable
//! per-point ID in the data, so "the same point" in another frame is simply
//! the entry at the same index there. The reference frame records which
//! frame the index was resolved against and follows playback forward.

/// What is selected and which frame it is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Selected logical point, or `None` when nothing is selected.
    pub selected_point: Option<usize>,
    /// Frame that picks are resolved against.
    pub reference_frame: usize,
}

/// Holds the current selection across frame advances.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    state: SelectionState,
}

impl SelectionTracker {
    /// Nothing selected, reference frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved pick. `None` is a pick-miss and clears the
    /// selection.
    pub fn record_pick(
        &mut self,
        point_index: Option<usize>,
        reference_frame: usize,
    ) {
        match point_index {
            Some(index) => {
                log::debug!("Selected point {index} in frame {reference_frame}")
            }
            None if self.state.selected_point.is_some() => {
                log::debug!("Pick missed, selection cleared");
            }
            None => {}
        }
        self.state = SelectionState {
            selected_point: point_index,
            reference_frame,
        };
    }

    /// Current selection.
    pub fn current_selection(&self) -> SelectionState {
        self.state
    }

    /// Selected logical point, if any.
    pub fn selected_point(&self) -> Option<usize> {
        self.state.selected_point
    }

    /// Frame picks are resolved against.
    pub fn reference_frame(&self) -> usize {
        self.state.reference_frame
    }

    /// Drop the selection. The reference frame is kept.
    pub fn clear(&mut self) {
        self.state.selected_point = None;
    }

    /// Move the reference frame after a playback advance. The selected
    /// index is untouched.
    pub fn on_reference_frame_advance(&mut self, new_reference: usize) {
        self.state.reference_frame = new_reference;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_on_frame_zero() {
        let tracker = SelectionTracker::new();
        assert_eq!(tracker.current_selection(), SelectionState::default());
        assert_eq!(tracker.selected_point(), None);
        assert_eq!(tracker.reference_frame(), 0);
    }

    #[test]
    fn selection_survives_reference_advance() {
        let mut tracker = SelectionTracker::new();
        tracker.record_pick(Some(7), 2);
        tracker.on_reference_frame_advance(3);
        assert_eq!(
            tracker.current_selection(),
            SelectionState {
                selected_point: Some(7),
                reference_frame: 3,
            }
        );
    }

    #[test]
    fn pick_miss_clears_selection() {
        let mut tracker = SelectionTracker::new();
        tracker.record_pick(Some(1), 0);
        tracker.record_pick(None, 4);
        assert_eq!(tracker.selected_point(), None);
        assert_eq!(tracker.reference_frame(), 4);
    }

    #[test]
    fn clear_keeps_reference_frame() {
        let mut tracker = SelectionTracker::new();
        tracker.record_pick(Some(1), 3);
        tracker.clear();
        assert_eq!(tracker.selected_point(), None);
        assert_eq!(tracker.reference_frame(), 3);
    }
}
