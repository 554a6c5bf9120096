use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Frame timing and speed-control parameters.
pub struct PlaybackOptions {
    /// Time each frame stays on screen at speed 1.0, in milliseconds.
    #[schemars(title = "Frame Duration (ms)", range(min = 1))]
    pub frame_duration_ms: u64,
    /// Initial speed multiplier.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Lower bound of the speed slider.
    #[schemars(skip)]
    pub min_speed: f32,
    /// Upper bound of the speed slider.
    #[schemars(skip)]
    pub max_speed: f32,
    /// Start playing as soon as frames are loaded.
    #[schemars(title = "Autoplay")]
    pub autoplay: bool,
    /// Host render cadence the clock is ticked at.
    #[schemars(title = "Tick Rate (Hz)", range(min = 1, max = 240))]
    pub tick_rate_hz: u32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            frame_duration_ms: 1000,
            speed: 1.0,
            min_speed: 0.1,
            max_speed: 10.0,
            autoplay: false,
            tick_rate_hz: 60,
        }
    }
}

impl PlaybackOptions {
    /// Frame duration at speed 1.0.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_duration_ms)
    }

    /// Interval between host ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }

    /// Clamp a raw slider value into `[min_speed, max_speed]`.
    pub fn clamp_speed(&self, value: f32) -> f32 {
        value.clamp(self.min_speed, self.max_speed)
    }
}
