//! Instanced layers and their GPU-ready transform buffers.

use glam::{Mat4, Quat, Vec3};
use rand::Rng;

use crate::layout::{generate_layer, Element};
use crate::morph;
use crate::options::{LayerSpec, MorphOptions, TreeDims};

/// One instance's transform, laid out for direct GPU upload.
///
/// Rotation is a quaternion in xyzw order; scale is uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransform {
    /// World-space position.
    pub position: [f32; 3],
    /// Uniform scale.
    pub scale: f32,
    /// Rotation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
}

impl InstanceTransform {
    /// Identity transform: origin, unit scale, no rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: [0.0; 3],
            scale: 1.0,
            rotation: Quat::IDENTITY.to_array(),
        }
    }

    /// Expand to a 4x4 model matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_array(self.rotation),
            Vec3::from_array(self.position),
        )
    }
}

/// A named set of same-styled elements sharing generation and update
/// logic. Element count is fixed at construction; the transform buffer is
/// fully rewritten every frame.
pub struct Layer {
    name: String,
    elements: Vec<Element>,
    transforms: Vec<InstanceTransform>,
}

impl Layer {
    /// Generate a layer from its spec. Allocates the output buffer once.
    pub fn generate(
        spec: &LayerSpec,
        dims: &TreeDims,
        rng: &mut impl Rng,
    ) -> Self {
        let elements = generate_layer(spec, dims, rng);
        let transforms = vec![InstanceTransform::identity(); elements.len()];
        Self {
            name: spec.name.clone(),
            elements,
            transforms,
        }
    }

    /// Layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements (fixed for the scene lifetime).
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the layer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Static element data.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The frame-output buffer, valid after the last
    /// [`write_frame`](Self::write_frame).
    #[must_use]
    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }

    /// Rewrite the whole transform buffer for this frame.
    ///
    /// Position is the scattered→formed blend plus drift; oriented
    /// elements tumble about +Y until the morph passes the spin cutoff,
    /// then snap to their base orientation.
    pub fn write_frame(
        &mut self,
        current: f32,
        t: f32,
        opts: &MorphOptions,
    ) {
        let inv_m = 1.0 - current;
        for (i, e) in self.elements.iter().enumerate() {
            let position = morph::blend(e.scattered, e.formed, current)
                + morph::instance_drift(
                    t,
                    i,
                    e.weight,
                    inv_m,
                    opts.drift_scale,
                );
            let rotation = match e.base_rotation {
                Some(base) if current < opts.spin_cutoff => {
                    base * Quat::from_rotation_y(morph::spin_angle(
                        t,
                        e.weight,
                        opts.spin_rate,
                    ))
                }
                Some(base) => base,
                None => Quat::IDENTITY,
            };
            self.transforms[i] = InstanceTransform {
                position: position.to_array(),
                scale: e.scale,
                rotation: rotation.to_array(),
            };
        }
    }
}
