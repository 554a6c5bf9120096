//! Input handling: event types and the input processor that converts raw
//! host events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable playback actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
