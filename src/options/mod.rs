//! Centralized playback/picking/data-source options with TOML preset
//! support.
//!
//! All tweakable settings are consolidated here. Options serialize to/from
//! TOML so a session can be reproduced from a preset file.

mod keybindings;
mod picking;
mod playback;
mod source;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use picking::PickingOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use source::SourceOptions;

use crate::error::CloudscopeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Frame timing and speed control.
    pub playback: PlaybackOptions,
    /// Pick and anomaly tolerances.
    pub picking: PickingOptions,
    /// Point generator endpoint and request parameters.
    pub source: SourceOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O and TOML errors, or any [`validate`](Self::validate) failure.
    pub fn load(path: &Path) -> Result<Self, CloudscopeError> {
        let content =
            std::fs::read_to_string(path).map_err(CloudscopeError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| CloudscopeError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::debug!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), CloudscopeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CloudscopeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CloudscopeError::Io)?;
        }
        std::fs::write(path, content).map_err(CloudscopeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// [`CloudscopeError::InvalidArgument`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CloudscopeError> {
        let playback = &self.playback;
        let picking = &self.picking;
        let invalid = |msg: &str| Err(CloudscopeError::InvalidArgument(msg.to_owned()));

        if !(playback.speed.is_finite() && playback.speed > 0.0) {
            return invalid("playback.speed must be positive");
        }
        if !(playback.min_speed > 0.0 && playback.min_speed <= playback.max_speed)
        {
            return invalid("playback speed bounds must satisfy 0 < min <= max");
        }
        if playback.frame_duration_ms == 0 {
            return invalid("playback.frame_duration_ms must be at least 1");
        }
        if playback.tick_rate_hz == 0 {
            return invalid("playback.tick_rate_hz must be at least 1");
        }
        if !(picking.pick_threshold >= 0.0 && picking.anomaly_threshold >= 0.0) {
            return invalid("picking thresholds must be non-negative");
        }
        if self.source.num_frames == 0 {
            return invalid("source.num_frames must be at least 1");
        }
        if let Some(key) = self.keybindings.duplicate_key() {
            return Err(CloudscopeError::InvalidArgument(format!(
                "key {key:?} is bound to more than one action"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[playback]
speed = 2.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.playback.speed, 2.5);
        // Everything else should be default
        assert_eq!(opts.playback.frame_duration_ms, 1000);
        assert_eq!(opts.picking.pick_threshold, 0.01);
        assert_eq!(opts.source.num_frames, 100);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.playback.speed = 0.0;
        assert!(matches!(
            opts.validate(),
            Err(CloudscopeError::InvalidArgument(_))
        ));

        let mut opts = Options::default();
        opts.picking.pick_threshold = -0.1;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.playback.min_speed = 5.0;
        opts.playback.max_speed = 1.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::TogglePlayback)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Cancel));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn duplicate_key_binding_is_rejected() {
        let toml_str = r#"
[keybindings.bindings]
toggle_playback = "Space"
restart = "Space"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.duplicate_key(), Some("Space"));
        assert!(matches!(
            opts.validate(),
            Err(CloudscopeError::InvalidArgument(msg)) if msg.contains("Space")
        ));
        assert_eq!(Options::default().keybindings.duplicate_key(), None);
    }

    #[test]
    fn saved_preset_loads_and_is_listed() {
        let dir = std::env::temp_dir()
            .join(format!("cloudscope-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.playback.speed = 3.0;
        opts.source.num_frames = 12;
        opts.save(&dir.join("fast.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);
        assert_eq!(Options::load(&dir.join("fast.toml")).unwrap(), opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_invalid_preset() {
        let dir = std::env::temp_dir()
            .join(format!("cloudscope-bad-preset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[playback]\nspeed = -1.0\n").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(CloudscopeError::InvalidArgument(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn clamp_speed_respects_slider_bounds() {
        let playback = PlaybackOptions::default();
        assert_eq!(playback.clamp_speed(0.0), 0.1);
        assert_eq!(playback.clamp_speed(50.0), 10.0);
        assert_eq!(playback.clamp_speed(2.0), 2.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("playback"));
        assert!(props.contains_key("picking"));
        assert!(props.contains_key("source"));
        assert!(!props.contains_key("keybindings"));

        let playback = &props["playback"]["properties"];
        assert!(playback.get("speed").is_some());
        assert!(playback.get("min_speed").is_none());
    }
}
