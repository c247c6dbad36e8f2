//! Scene layout options: tree dimensions, layer specs, foliage, topper.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cone silhouette dimensions shared by every placement strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct TreeDims {
    /// Cone radius at the ground.
    pub base_radius: f32,
    /// Total cone height.
    pub height: f32,
    /// Downward shift so the trunk sits below the world origin.
    pub y_offset: f32,
}

impl Default for TreeDims {
    fn default() -> Self {
        Self {
            base_radius: 5.2,
            height: 15.0,
            y_offset: 6.0,
        }
    }
}

/// Where a layer's formed positions land. See the layout module for the
/// sampling math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Spiral winding up the cone; used by the foliage point cloud.
    Spiral {
        /// Total winding angle in radians over the full height.
        turns: f32,
    },
    /// Random angle on the cone surface, pushed slightly outward so
    /// elements sit on top of the foliage.
    Surface {
        /// Extra cone radius beyond the foliage silhouette.
        radius_offset: f32,
    },
    /// Flat ring on the ground around the trunk.
    GroundRing {
        /// Inner ring radius (clearance around the trunk).
        inner_radius: f32,
        /// Radial spread beyond the inner radius.
        spread: f32,
        /// Lowest placement height.
        floor: f32,
        /// Vertical band above the floor.
        band_height: f32,
    },
}

/// One instanced layer's generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct LayerSpec {
    /// Unique layer name, used for buffer lookups.
    pub name: String,
    /// Element count, fixed for the scene lifetime.
    pub count: usize,
    /// Drift amplitude and spin rate factor.
    pub weight: f32,
    /// Base uniform scale.
    pub scale: f32,
    /// When set, scale is drawn uniformly from `[scale, scale_max]`
    /// instead of the standard 0.9x-1.2x jitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<f32>,
    /// Radius of the scattered-position sphere.
    pub drift_radius: f32,
    /// Whether elements carry a base orientation and tumble while unformed.
    #[serde(default = "default_oriented")]
    pub oriented: bool,
    /// Formed-position strategy.
    pub placement: Placement,
}

fn default_oriented() -> bool {
    true
}

/// Foliage point-cloud options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FoliageOptions {
    /// Point count.
    pub count: usize,
    /// Radius of the scattered-position sphere.
    pub scatter_radius: f32,
    /// Formed-position strategy.
    pub placement: Placement,
}

impl Default for FoliageOptions {
    fn default() -> Self {
        Self {
            count: 9500,
            scatter_radius: 16.0,
            placement: Placement::Spiral { turns: 120.0 },
        }
    }
}

/// Topper (star) options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct TopperOptions {
    /// Height while fully scattered (morph 0).
    pub scattered_height: f32,
    /// Height once fully formed (morph 1).
    pub formed_height: f32,
    /// Continuous spin rate about +Z, radians per second of elapsed time.
    pub spin_rate: f32,
}

impl Default for TopperOptions {
    fn default() -> Self {
        Self {
            scattered_height: 22.0,
            formed_height: 9.5,
            spin_rate: 0.5,
        }
    }
}

/// Complete layout configuration. The default reproduces the standard
/// ten-layer scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct LayoutOptions {
    /// Cone silhouette dimensions.
    pub tree: TreeDims,
    /// Foliage point cloud.
    pub foliage: FoliageOptions,
    /// Topper element.
    pub topper: TopperOptions,
    /// Instanced layers, generated in order.
    pub layers: Vec<LayerSpec>,
}

/// Surface layer shorthand for the default scene.
fn surface(
    name: &str,
    count: usize,
    weight: f32,
    scale: f32,
    drift_radius: f32,
) -> LayerSpec {
    LayerSpec {
        name: name.to_owned(),
        count,
        weight,
        scale,
        scale_max: None,
        drift_radius,
        oriented: true,
        placement: Placement::Surface {
            radius_offset: 0.15,
        },
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let layers = vec![
            surface("gold_ornaments", 250, 0.6, 0.1, 18.0),
            surface("ruby_ornaments", 220, 0.7, 0.12, 20.0),
            surface("snow", 450, 1.4, 0.08, 25.0),
            surface("chocolates", 150, 0.4, 0.15, 14.0),
            surface("deer", 50, 1.1, 0.25, 22.0),
            surface("lights", 200, 1.6, 0.06, 28.0),
            surface("crystals", 250, 0.9, 0.15, 19.0),
            surface("polaroids", 80, 0.5, 0.4, 16.0),
            LayerSpec {
                name: "gifts".to_owned(),
                count: 120,
                weight: 0.2,
                scale: 0.4,
                scale_max: Some(0.8),
                drift_radius: 10.0,
                oriented: false,
                placement: Placement::GroundRing {
                    inner_radius: 1.5,
                    spread: 5.0,
                    floor: -5.8,
                    band_height: 2.0,
                },
            },
        ];
        Self {
            tree: TreeDims::default(),
            foliage: FoliageOptions::default(),
            topper: TopperOptions::default(),
            layers,
        }
    }
}

impl LayoutOptions {
    /// Total instanced element count across all layers (foliage excluded).
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.layers.iter().map(|l| l.count).sum()
    }
}
