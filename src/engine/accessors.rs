//! Read-only query methods for [`VisualizerEngine`].

use super::VisualizerEngine;
use crate::animation::PlaybackState;
use crate::error::CloudscopeError;
use crate::frame::{point_choices, Frame, FrameStore};
use crate::options::Options;
use crate::selection::SelectionState;
use crate::util::progress::ProgressInfo;

// ── Playback ──

impl VisualizerEngine {
    /// Snapshot of the playback clock.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.clock.state()
    }

    /// Progress-bar state for the frame being shown.
    #[must_use]
    pub fn progress(&self) -> ProgressInfo {
        ProgressInfo::new(self.displayed, self.store.len())
    }

    /// Index of the frame on screen.
    ///
    /// During playback this trails
    /// [`PlaybackState::current_frame`] by one.
    #[must_use]
    pub fn displayed_frame(&self) -> usize {
        self.displayed
    }
}

// ── Frames ──

impl VisualizerEngine {
    /// The loaded frame sequence.
    #[must_use]
    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    /// The frame currently shown.
    ///
    /// # Errors
    ///
    /// Never in practice: the displayed index is always within the store.
    pub fn current_frame(&self) -> Result<&Frame, CloudscopeError> {
        self.store.get(self.displayed)
    }

    /// Dropdown entries for the points of the reference frame.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::IndexOutOfRange`] if the reference frame is not
    /// in the store.
    pub fn point_choices(
        &self,
    ) -> Result<Vec<(Option<usize>, String)>, CloudscopeError> {
        Ok(point_choices(
            self.store.get(self.selection.reference_frame())?,
        ))
    }
}

// ── Selection ──

impl VisualizerEngine {
    /// Current selection and reference frame.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.current_selection()
    }

    /// Session options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
