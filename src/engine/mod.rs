//! The session controller tying frames, playback and selection together.
//!
//! [`VisualizerEngine`] owns every piece of mutable session state (the
//! frame store, the playback clock and the selection) and is driven by
//! plain method calls: [`tick`](VisualizerEngine::tick) once per display
//! refresh and [`execute`](VisualizerEngine::execute) for user commands.
//! Its output is a queue of [`RenderRequest`]s for the host to apply.

mod accessors;
mod animation;
pub mod command;
mod detail;
pub mod render;
mod selection;

pub use command::Command;
pub use detail::{ChartBuffer, TrajectorySink};
pub use render::RenderRequest;
use web_time::Instant;

use crate::animation::PlaybackClock;
use crate::error::CloudscopeError;
use crate::frame::{Frame, FrameStore};
use crate::options::Options;
use crate::selection::SelectionTracker;
use crate::util::trajectory::TrajectoryExtractor;

/// One visualizer session over a loaded frame sequence.
///
/// Construct it only after the frame fetch has succeeded; an empty
/// sequence is refused.
pub struct VisualizerEngine {
    store: FrameStore,
    clock: PlaybackClock,
    selection: SelectionTracker,
    extractor: TrajectoryExtractor,
    options: Options,
    requests: Vec<RenderRequest>,
    /// Frame of the last queued redraw.
    displayed: usize,
}

impl VisualizerEngine {
    /// Start a session on `frames`, showing frame 0.
    ///
    /// `now` seeds the playback clock. Starts playing right away when
    /// `options.playback.autoplay` is set.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidData`] for an empty sequence, or
    /// [`CloudscopeError::InvalidArgument`] for unusable options.
    pub fn new(
        frames: Vec<Frame>,
        options: Options,
        now: Instant,
    ) -> Result<Self, CloudscopeError> {
        options.validate()?;

        let mut store = FrameStore::new();
        store.load(frames)?;

        let clock = PlaybackClock::new(
            store.len(),
            options.playback.frame_duration(),
            options.playback.speed,
            now,
        )?;
        let extractor = TrajectoryExtractor::with_anomaly_threshold(
            options.picking.anomaly_threshold,
        );

        let mut engine = Self {
            store,
            clock,
            selection: SelectionTracker::new(),
            extractor,
            options,
            requests: Vec::new(),
            displayed: 0,
        };
        engine.queue_redraw(0);
        if engine.options.playback.autoplay {
            engine.clock.play();
        }
        Ok(engine)
    }

    /// Apply a user command.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidArgument`] for a rejected speed or an
    /// out-of-range point selection. State is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<(), CloudscopeError> {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::TogglePlayback => self.toggle_playback(),
            Command::SetSpeed { multiplier } => self.set_speed(multiplier)?,
            Command::Seek { index } => {
                let _ = self.seek(index);
            }
            Command::SeekFraction { fraction } => {
                let _ = self.seek_fraction(fraction);
            }
            Command::Step { forward } => {
                let _ = self.step(forward);
            }
            Command::Pick { hit } => {
                let _ = self.pick(hit)?;
            }
            Command::SelectPoint { index } => self.select_point(index)?,
            Command::ClearSelection => self.clear_selection(),
            Command::Hover { hit, screen } => self.hover(hit, screen),
        }
        Ok(())
    }

    /// Take every render request queued since the last drain.
    pub fn drain_render_requests(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.requests)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use glam::DVec3;

    use super::*;

    /// `frame_count` frames where point `i` of frame `f` sits at `(i, f, 0)`.
    pub fn grid_frames(frame_count: usize, points: usize) -> Vec<Frame> {
        (0..frame_count)
            .map(|f| Frame {
                all_points: (0..points)
                    .map(|i| DVec3::new(i as f64, f as f64, 0.0))
                    .collect(),
                ..Frame::default()
            })
            .collect()
    }

    pub fn engine(frames: Vec<Frame>) -> (VisualizerEngine, Instant) {
        let now = Instant::now();
        let mut engine =
            VisualizerEngine::new(frames, Options::default(), now).unwrap();
        let _ = engine.drain_render_requests();
        (engine, now)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{engine, grid_frames};
    use super::*;
    use crate::util::progress::ProgressInfo;

    #[test]
    fn new_session_draws_first_frame() {
        let mut engine = VisualizerEngine::new(
            grid_frames(3, 2),
            Options::default(),
            Instant::now(),
        )
        .unwrap();
        assert_eq!(
            engine.drain_render_requests(),
            vec![
                RenderRequest::RedrawFrame { index: 0 },
                RenderRequest::Progress(ProgressInfo::new(0, 3)),
                RenderRequest::ClearMarker,
            ]
        );
        assert!(engine.drain_render_requests().is_empty());
        assert!(!engine.playback_state().is_playing());
    }

    #[test]
    fn empty_sequence_cannot_start() {
        assert!(matches!(
            VisualizerEngine::new(Vec::new(), Options::default(), Instant::now()),
            Err(CloudscopeError::InvalidData(_))
        ));
    }

    #[test]
    fn autoplay_starts_playing() {
        let mut options = Options::default();
        options.playback.autoplay = true;
        let engine =
            VisualizerEngine::new(grid_frames(2, 1), options, Instant::now())
                .unwrap();
        assert!(engine.playback_state().is_playing());
    }

    #[test]
    fn rejected_speed_leaves_state_alone() {
        let (mut engine, _) = engine(grid_frames(2, 1));
        assert!(matches!(
            engine.execute(Command::SetSpeed { multiplier: -2.0 }),
            Err(CloudscopeError::InvalidArgument(_))
        ));
        assert_eq!(engine.playback_state().speed, 1.0);
        engine.execute(Command::SetSpeed { multiplier: 2.0 }).unwrap();
        assert_eq!(engine.playback_state().speed, 2.0);
    }
}
