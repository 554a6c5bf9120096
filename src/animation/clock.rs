//! Playback clock for a fixed-length frame sequence.

use web_time::{Duration, Instant};

use crate::error::CloudscopeError;

/// Time each frame stays on screen at speed 1.0.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000);

/// Whether the clock advances on [`PlaybackClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    /// Ticks are ignored.
    #[default]
    Stopped,
    /// Ticks advance once the frame period has elapsed.
    Playing,
}

/// Snapshot of the clock's mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Frame the animation is on.
    pub current_frame: usize,
    /// Whether the clock is playing.
    pub state: ClockState,
    /// Playback speed multiplier, always `> 0`.
    pub speed: f32,
    /// Time of the last advance (or of clock creation).
    pub last_tick: Instant,
}

impl PlaybackState {
    /// Whether the clock is in [`ClockState::Playing`].
    pub fn is_playing(&self) -> bool {
        self.state == ClockState::Playing
    }
}

/// Outcome of a single [`PlaybackClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// Nothing changed: stopped, or the frame period has not elapsed.
    Unchanged,
    /// The clock moved to a new frame.
    ///
    /// Each advance shows the frame being left and then moves on, so
    /// `displayed` trails `index` by one. A seek to `k` therefore shows `k`
    /// twice: once on the seek and again on the next advance.
    Advanced {
        /// New `current_frame`, the next frame an advance will show.
        index: usize,
        /// Frame to draw for this advance.
        displayed: usize,
        /// Frame picks should now be resolved against.
        reference: usize,
    },
}

/// Reference frame after advancing away from `previous` in a sequence of
/// `len` frames.
///
/// The reference normally lags the animation by one: it becomes the frame
/// being left. The one exception is the step onto the last frame
/// (`len - 2 -> len - 1`), where the reference snaps to `len - 1` itself.
pub fn reference_after_advance(previous: usize, len: usize) -> usize {
    if len >= 2 && previous == len - 2 {
        len - 1
    } else {
        previous
    }
}

/// Advances a frame index through `[0, frame_count)` at a configurable rate,
/// wrapping at the end.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    frame_count: usize,
    frame_duration: Duration,
    current_frame: usize,
    state: ClockState,
    speed: f32,
    last_tick: Instant,
}

impl PlaybackClock {
    /// Stopped clock on frame 0 over `frame_count` frames.
    ///
    /// `now` seeds the last-tick timestamp.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidData`] if `frame_count` is zero, or
    /// [`CloudscopeError::InvalidArgument`] if `speed` is not a positive
    /// finite number.
    pub fn new(
        frame_count: usize,
        frame_duration: Duration,
        speed: f32,
        now: Instant,
    ) -> Result<Self, CloudscopeError> {
        if frame_count == 0 {
            return Err(CloudscopeError::InvalidData(
                "cannot play an empty frame sequence".into(),
            ));
        }
        validate_speed(speed)?;
        Ok(Self {
            frame_count,
            frame_duration,
            current_frame: 0,
            state: ClockState::Stopped,
            speed,
            last_tick: now,
        })
    }

    /// Start playing. No-op if already playing.
    pub fn play(&mut self) {
        if self.state == ClockState::Stopped {
            log::debug!("Playback started at frame {}", self.current_frame);
        }
        self.state = ClockState::Playing;
    }

    /// Stop playing. No-op if already stopped.
    pub fn pause(&mut self) {
        if self.state == ClockState::Playing {
            log::debug!("Playback paused at frame {}", self.current_frame);
        }
        self.state = ClockState::Stopped;
    }

    /// Advance one frame if playing and more than one frame period has
    /// elapsed since the last advance.
    pub fn tick(&mut self, now: Instant) -> AdvanceResult {
        if self.state != ClockState::Playing {
            return AdvanceResult::Unchanged;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed <= self.period() {
            return AdvanceResult::Unchanged;
        }

        let previous = self.current_frame;
        self.current_frame = (previous + 1) % self.frame_count;
        self.last_tick = now;

        AdvanceResult::Advanced {
            index: self.current_frame,
            displayed: previous,
            reference: reference_after_advance(previous, self.frame_count),
        }
    }

    /// Change the speed multiplier. Takes effect on the next tick's elapsed
    /// time comparison; the last-tick timestamp is left alone.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidArgument`] if `multiplier` is not a positive
    /// finite number. The previous speed is kept.
    pub fn set_speed(&mut self, multiplier: f32) -> Result<(), CloudscopeError> {
        validate_speed(multiplier)?;
        self.speed = multiplier;
        log::debug!("Playback speed set to {multiplier}x");
        Ok(())
    }

    /// Jump to `index`, clamped into `[0, frame_count)`. Works in either
    /// state and does not reset the last-tick timestamp.
    ///
    /// Returns the frame actually landed on.
    pub fn seek(&mut self, index: usize) -> usize {
        self.current_frame = index.min(self.frame_count - 1);
        self.current_frame
    }

    /// Time between advances at the current speed.
    pub fn period(&self) -> Duration {
        Duration::try_from_secs_f64(
            self.frame_duration.as_secs_f64() / f64::from(self.speed),
        )
        .unwrap_or(Duration::MAX)
    }

    /// Snapshot of the mutable state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_frame: self.current_frame,
            state: self.state,
            speed: self.speed,
            last_tick: self.last_tick,
        }
    }

    /// Frame the animation is on.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Number of frames being cycled through.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Whether the clock is playing.
    pub fn is_playing(&self) -> bool {
        self.state == ClockState::Playing
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

fn validate_speed(multiplier: f32) -> Result<(), CloudscopeError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(CloudscopeError::InvalidArgument(format!(
            "speed multiplier must be positive, got {multiplier}"
        )))
    }
}
