//! Playback methods for VisualizerEngine

use web_time::Instant;

use super::render::RenderRequest;
use super::VisualizerEngine;
use crate::animation::AdvanceResult;
use crate::error::CloudscopeError;
use crate::util::progress::{seek_index_for_fraction, ProgressInfo};

impl VisualizerEngine {
    /// Advance playback if due and queue the redraw.
    ///
    /// The redraw shows the frame the clock is leaving, which is also the
    /// frame picks resolve against afterwards, except on the step onto the
    /// last frame (see
    /// [`reference_after_advance`](crate::animation::reference_after_advance)).
    pub fn tick(&mut self, now: Instant) -> AdvanceResult {
        let result = self.clock.tick(now);
        if let AdvanceResult::Advanced {
            index,
            displayed,
            reference,
        } = result
        {
            self.selection.on_reference_frame_advance(reference);
            self.queue_redraw(displayed);
            log::debug!(
                "Showing frame {displayed}, next {index} (reference {reference})"
            );
        }
        result
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.clock.play();
        self.log_playback_state();
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.clock.pause();
        self.log_playback_state();
    }

    /// Toggle between playing and paused.
    pub fn toggle_playback(&mut self) {
        if self.clock.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Change the speed multiplier.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidArgument`] if `multiplier` is not positive.
    pub fn set_speed(&mut self, multiplier: f32) -> Result<(), CloudscopeError> {
        self.clock.set_speed(multiplier)
    }

    /// Show frame `index` (clamped). Returns the frame landed on.
    ///
    /// Seeking does not move the reference frame; only playback advances
    /// and picks do.
    pub fn seek(&mut self, index: usize) -> usize {
        let landed = self.clock.seek(index);
        log::debug!("Seek to frame {landed} (requested {index})");
        self.queue_redraw(landed);
        landed
    }

    /// Seek to `fraction` of the way along the progress bar.
    pub fn seek_fraction(&mut self, fraction: f32) -> usize {
        self.seek(seek_index_for_fraction(fraction, self.store.len()))
    }

    /// Show the frame after (or before) the one on screen, wrapping at
    /// either end.
    pub fn step(&mut self, forward: bool) -> usize {
        let len = self.store.len();
        let current = self.displayed;
        let target = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.seek(target)
    }

    /// Queue everything the renderer needs to show frame `index`.
    pub(super) fn queue_redraw(&mut self, index: usize) {
        self.displayed = index;
        self.requests.push(RenderRequest::RedrawFrame { index });
        self.requests.push(RenderRequest::Progress(ProgressInfo::new(
            index,
            self.store.len(),
        )));
        self.queue_marker(index);
    }

    /// Place the selection marker on the selected point of frame `index`,
    /// or remove it when nothing is selected or the frame is too short.
    pub(super) fn queue_marker(&mut self, index: usize) {
        let position = self.selection.selected_point().and_then(|point| {
            self.store.get(index).ok().and_then(|frame| frame.point(point))
        });
        self.requests.push(match position {
            Some(position) => RenderRequest::ShowMarker { position },
            None => RenderRequest::ClearMarker,
        });
    }

    fn log_playback_state(&self) {
        let state = if self.clock.is_playing() {
            "playing"
        } else {
            "paused"
        };
        log::info!(
            "Playback {state} (frame {}/{})",
            self.displayed + 1,
            self.store.len()
        );
    }
}
