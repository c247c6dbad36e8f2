//! Layout generation: per-element formed/scattered positions and static
//! visual attributes.
//!
//! Layouts are generated once at scene start; every [`Element`] is immutable
//! afterward. Generators take `&mut impl Rng` so tests can seed them.

mod sampling;
mod strategy;

use glam::{Quat, Vec3};
use rand::Rng;
pub use sampling::{jittered_scale, random_orientation, sample_in_sphere};
pub use strategy::sample_formed;

use crate::options::{FoliageOptions, LayerSpec, TreeDims};

/// One visual instance. All fields are fixed at generation time; the morph
/// engine blends between `formed` and `scattered` every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Position on the assembled tree silhouette.
    pub formed: Vec3,
    /// Position in the scattered cloud.
    pub scattered: Vec3,
    /// Drift amplitude and spin rate factor.
    pub weight: f32,
    /// Uniform scale multiplier.
    pub scale: f32,
    /// Base orientation for non-spherical elements; `None` means the
    /// element never tumbles.
    pub base_rotation: Option<Quat>,
}

/// Generate exactly `spec.count` elements for one instanced layer.
pub fn generate_layer(
    spec: &LayerSpec,
    dims: &TreeDims,
    rng: &mut impl Rng,
) -> Vec<Element> {
    let mut elements = Vec::with_capacity(spec.count);
    for _ in 0..spec.count {
        let formed = strategy::sample_formed(&spec.placement, dims, rng);
        let scattered = sampling::sample_in_sphere(rng, spec.drift_radius);
        let scale = match spec.scale_max {
            Some(max) => {
                spec.scale + rng.random::<f32>() * (max - spec.scale)
            }
            None => sampling::jittered_scale(rng, spec.scale),
        };
        let base_rotation = if spec.oriented {
            Some(sampling::random_orientation(rng))
        } else {
            None
        };
        elements.push(Element {
            formed,
            scattered,
            weight: spec.weight,
            scale,
            base_rotation,
        });
    }
    elements
}

/// Generate the foliage point cloud's formed and scattered positions.
pub fn generate_foliage(
    opts: &FoliageOptions,
    dims: &TreeDims,
    rng: &mut impl Rng,
) -> (Vec<Vec3>, Vec<Vec3>) {
    let mut formed = Vec::with_capacity(opts.count);
    let mut scattered = Vec::with_capacity(opts.count);
    for _ in 0..opts.count {
        formed.push(strategy::sample_formed(&opts.placement, dims, rng));
        scattered.push(sampling::sample_in_sphere(rng, opts.scatter_radius));
    }
    (formed, scattered)
}
