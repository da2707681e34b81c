//! Centralized control options with TOML preset support.
//!
//! All tweakable settings (per-mode speeds and bounds, loading distances,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! host can ship presets per deployment.

mod free_fly;
mod keybindings;
mod loading;
mod rts;
mod sky_pan;
mod walk;

use std::path::Path;

pub use free_fly::FreeFlyOptions;
pub use keybindings::KeybindingOptions;
pub use loading::LoadingOptions;
pub use rts::RtsOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sky_pan::SkyPanOptions;
pub use walk::WalkOptions;

use crate::error::ControlsError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rts]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// First-person walk mode.
    pub walk: WalkOptions,
    /// Pointer-lock free-fly mode.
    pub free_fly: FreeFlyOptions,
    /// Top-down key-pan mode.
    pub sky_pan: SkyPanOptions,
    /// Top-down edge-pan mode.
    pub rts: RtsOptions,
    /// Loader request distances.
    pub loading: LoadingOptions,
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

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ControlsError> {
        toml::from_str(content)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ControlsError> {
        let content =
            std::fs::read_to_string(path).map_err(ControlsError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ControlsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ControlsError::Io)?;
        }
        std::fs::write(path, content).map_err(ControlsError::Io)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[free_fly]
body_speed = 4.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.free_fly.body_speed, 4.0);
        // Everything else should be default
        assert_eq!(opts.free_fly.yaw_speed, 0.005);
        assert_eq!(opts.sky_pan.zoom_by_delta, 25.0);
        assert_eq!(opts.rts.max_z, 500.0);
    }

    #[test]
    fn keybindings_parse_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
forward = ["KeyI"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyI"), Some(MoveAction::Forward));
        // A present table replaces the default map wholesale.
        assert_eq!(opts.keybindings.lookup("ArrowUp"), None);
    }

    #[test]
    fn sky_pan_keys_are_separate_from_movement_keys() {
        let opts = Options::default();
        assert_eq!(opts.sky_pan.keys.lookup("KeyW"), None);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(MoveAction::Forward));

        let toml_str = r#"
[sky_pan.keys.bindings]
left = ["KeyJ"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.sky_pan.keys.lookup("KeyJ"), Some(MoveAction::Left));
        assert_eq!(opts.sky_pan.pan_step, 50.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[rts\nspeed = ").unwrap_err();
        assert!(matches!(err, ControlsError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = std::env::temp_dir()
            .join(format!("city-controls-presets-{}", std::process::id()));
        let path = dir.join("slow.toml");

        let mut opts = Options::default();
        opts.rts.speed = 0.5;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("walk"));
        assert!(props.contains_key("free_fly"));
        assert!(props.contains_key("sky_pan"));
        assert!(props.contains_key("rts"));
        assert!(props.contains_key("loading"));
        assert!(!props.contains_key("keybindings"));

        let rts = &props["rts"]["properties"];
        assert!(rts.get("edge_margin_px").is_some());
        assert!(rts.get("altitude_divisor").is_none());
    }
}
