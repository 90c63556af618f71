//! Centralized demo options with TOML preset support.
//!
//! All tweakable settings (window, camera, demo scene, lighting,
//! keybindings) are consolidated here. Options serialize to/from TOML;
//! [`Options::list_presets`] scans whatever directory the caller keeps
//! preset files in.

mod camera;
mod demo;
mod keybindings;
mod lighting;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use demo::DemoOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::LumenError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Window and frame pacing.
    pub window: WindowOptions,
    /// Camera placement and controls.
    pub camera: CameraOptions,
    /// Scene selection and animation.
    pub demo: DemoOptions,
    /// Lighting demo parameters.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-facing options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LumenError> {
        let content = std::fs::read_to_string(path).map_err(LumenError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| LumenError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LumenError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LumenError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LumenError::Io)?;
        }
        std::fs::write(path, content).map_err(LumenError::Io)
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
    use crate::input::KeyAction;
    use crate::scene::DemoKind;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
movement_speed = 7.5

[demo]
kind = "lighting"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 7.5);
        assert_eq!(opts.demo.kind, DemoKind::Lighting);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert!(opts.camera.constrain_pitch);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.window.max_frame_delta, 0.0);
        assert_eq!(opts.lighting.shininess, 32.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
ArrowUp = "move_forward"
KeyQ = "exit"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Exit));
        // A table replaces the defaults rather than merging into them
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn keybinding_tables_map_keys_to_actions() {
        let toml_str = r#"
[keybindings.bindings]
KeyW = "move_forward"
Escape = "exit"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));

        // Action-keyed tables are rejected: "KeyW" is not an action name
        let reversed = "[keybindings.bindings]\nmove_forward = \"KeyW\"\n";
        assert!(toml::from_str::<Options>(reversed).is_err());
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("lumen-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.demo.kind = DemoKind::Lighting;
        opts.keybindings.bind("KeyQ", KeyAction::Exit);
        assert_eq!(opts.keybindings.unbind("Tab"), Some(KeyAction::CycleDemo));

        opts.save(&dir.join("night.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("night.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["night".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("lumen-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera\nmovement_speed = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, LumenError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("window"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("demo"));
        assert!(props.contains_key("lighting"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("movement_speed").is_some());
        assert!(camera.get("start_position").is_none());
    }
}
