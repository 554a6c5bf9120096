use serde::{Deserialize, Serialize};

/// Playback actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_playback = "Space"
/// cancel = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Play if paused, pause if playing.
    TogglePlayback,
    /// Jump back to the first frame.
    Restart,
    /// Show the next frame.
    StepForward,
    /// Show the previous frame.
    StepBack,
    /// Clear the selection.
    Cancel,
}
