//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (layout, morph tuning, camera, wish service) are
//! consolidated here. Options serialize to/from TOML for scene presets;
//! partial files work because every section uses `#[serde(default)]`.

mod camera;
mod layout;
mod morph;
mod wish;

use std::path::Path;

pub use camera::CameraOptions;
pub use layout::{
    FoliageOptions, LayerSpec, LayoutOptions, Placement, TopperOptions,
    TreeDims,
};
pub use morph::MorphOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use wish::WishOptions;

use crate::error::ArborError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Scene layout: tree dimensions, layers, foliage, topper.
    pub layout: LayoutOptions,
    /// Morph engine tuning.
    pub morph: MorphOptions,
    /// Camera rig parameters.
    pub camera: CameraOptions,
    /// Wish service endpoint configuration.
    #[schemars(skip)]
    pub wish: WishOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ArborError> {
        let content = std::fs::read_to_string(path).map_err(ArborError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ArborError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArborError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArborError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArborError::Io)?;
        }
        std::fs::write(path, content).map_err(ArborError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
[morph]
smoothing = 0.05
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.morph.smoothing, 0.05);
        // Everything else should be default
        assert_eq!(opts.morph.drift_scale, 9.0);
        assert_eq!(opts.layout.foliage.count, 9500);
        assert_eq!(opts.camera.fov_degrees, 45.0);
    }

    #[test]
    fn default_scene_layer_set() {
        let opts = Options::default();
        assert_eq!(opts.layout.layers.len(), 9);
        assert_eq!(opts.layout.instance_count(), 1770);
        assert!(opts
            .layout
            .layers
            .iter()
            .any(|l| l.name == "gifts" && !l.oriented));
    }

    #[test]
    fn placement_tags_round_trip() {
        let toml_str = r#"
[[layout.layers]]
name = "extra"
count = 10
weight = 0.5
scale = 0.1
drift_radius = 12.0

[layout.layers.placement]
kind = "ground_ring"
inner_radius = 1.0
spread = 2.0
floor = -5.0
band_height = 1.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.layout.layers.len(), 1);
        let layer = &opts.layout.layers[0];
        // Unspecified oriented defaults to true
        assert!(layer.oriented);
        assert!(matches!(
            layer.placement,
            Placement::GroundRing { inner_radius, .. } if inner_radius == 1.0
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("morph"));
        assert!(props.contains_key("camera"));

        // The wish endpoint is not a UI concern
        assert!(!props.contains_key("wish"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = toml::from_str::<Options>("morph = 3").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
