//! Timer-driven frame playback.
//!
//! The clock never schedules itself: the host calls
//! [`PlaybackClock::tick`] once per display refresh with the current time,
//! and the clock decides whether enough time has passed to advance.

mod clock;

pub use clock::{
    reference_after_advance, AdvanceResult, ClockState, PlaybackClock,
    PlaybackState, DEFAULT_FRAME_DURATION,
};
