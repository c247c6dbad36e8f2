//! Authoritative scene: generated layers, the foliage cloud, the topper,
//! and their per-frame output buffers.
//!
//! A scene is generated once from [`LayoutOptions`]; element counts are
//! fixed afterward. [`Scene::write_frame`] rewrites every output buffer
//! in full — no diffing, no partial updates — which is the right shape
//! for small fixed counts feeding contiguous GPU uploads.

mod foliage;
mod layer;
mod topper;

pub use foliage::FoliageCloud;
pub use layer::{InstanceTransform, Layer};
use rand::Rng;
use rustc_hash::FxHashMap;
pub use topper::Topper;

use crate::options::{LayoutOptions, MorphOptions};

/// The scene: named instanced layers plus the foliage cloud and topper.
pub struct Scene {
    layers: Vec<Layer>,
    index: FxHashMap<String, usize>,
    foliage: FoliageCloud,
    topper: Topper,
}

impl Scene {
    /// Generate all layers from the layout options. Duplicate layer names
    /// keep their first occurrence in the lookup index.
    pub fn generate(opts: &LayoutOptions, rng: &mut impl Rng) -> Self {
        let mut layers = Vec::with_capacity(opts.layers.len());
        let mut index = FxHashMap::default();
        for spec in &opts.layers {
            let layer = Layer::generate(spec, &opts.tree, rng);
            let _ = index
                .entry(layer.name().to_owned())
                .or_insert(layers.len());
            layers.push(layer);
        }
        log::debug!(
            "scene generated: {} layers, {} instances, {} foliage points",
            layers.len(),
            layers.iter().map(Layer::len).sum::<usize>(),
            opts.foliage.count,
        );
        Self {
            layers,
            index,
            foliage: FoliageCloud::generate(&opts.foliage, &opts.tree, rng),
            topper: Topper::new(opts.topper),
        }
    }

    /// All layers in generation order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Look up a layer by name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.index.get(name).map(|&i| &self.layers[i])
    }

    /// The foliage point cloud.
    #[must_use]
    pub fn foliage(&self) -> &FoliageCloud {
        &self.foliage
    }

    /// The topper element.
    #[must_use]
    pub fn topper(&self) -> &Topper {
        &self.topper
    }

    /// Total instanced element count (foliage excluded).
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Rewrite every output buffer for this frame: all instanced layers,
    /// the foliage positions, and the topper transform.
    pub fn write_frame(
        &mut self,
        current: f32,
        t: f32,
        opts: &MorphOptions,
    ) {
        for layer in &mut self.layers {
            layer.write_frame(current, t, opts);
        }
        self.foliage.write_frame(current, t, opts.foliage_sway);
        self.topper.write_frame(current, t);
    }
}
