//! Converts raw host events into engine commands.
//!
//! The `InputProcessor` owns the transient input state (cursor position),
//! the key-binding map and the speed-slider bounds. It is the only thing
//! that sits between host UI events and the engine's
//! [`execute`](crate::engine::VisualizerEngine::execute) method.

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::engine::Command;
use crate::options::{KeybindingOptions, PlaybackOptions};

impl KeyAction {
    /// Convert to the corresponding parameterless [`Command`].
    fn to_command(self) -> Command {
        match self {
            Self::TogglePlayback => Command::TogglePlayback,
            Self::Restart => Command::Seek { index: 0 },
            Self::StepForward => Command::Step { forward: true },
            Self::StepBack => Command::Step { forward: false },
            Self::Cancel => Command::ClearSelection,
        }
    }
}

/// Converts raw host events into [`Command`]s.
///
/// # Usage
///
/// ```ignore
/// // In the host's event handler:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd)?;
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Space") {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: (f32, f32),
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Speed-slider bounds.
    playback: PlaybackOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings and slider bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor from configured bindings and playback options.
    #[must_use]
    pub fn with_options(
        key_bindings: KeybindingOptions,
        playback: PlaybackOptions,
    ) -> Self {
        Self {
            key_bindings,
            playback,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.mouse_pos
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<Command> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.mouse_pos = (x, y);
                None
            }
            InputEvent::Click { hit } => Some(Command::Pick { hit }),
            InputEvent::Hover { hit } => Some(Command::Hover {
                hit,
                screen: self.mouse_pos,
            }),
            InputEvent::ProgressBarClick { x, width } => {
                Self::progress_bar_click(x, width)
            }
            InputEvent::SpeedChanged { value } => {
                if value.is_nan() {
                    log::warn!("Ignoring NaN speed slider value");
                    return None;
                }
                Some(Command::SetSpeed {
                    multiplier: self.playback.clamp_speed(value),
                })
            }
            InputEvent::PointChosen { index } => {
                Some(Command::SelectPoint { index })
            }
        }
    }

    /// Progress-bar click → seek by fraction of the bar width.
    fn progress_bar_click(x: f32, width: f32) -> Option<Command> {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("Ignoring progress bar click on a {width}px wide bar");
            return None;
        }
        Some(Command::SeekFraction {
            fraction: x / width,
        })
    }
}
