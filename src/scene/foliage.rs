//! The foliage point cloud and its flat position buffer.

use glam::Vec3;
use rand::Rng;

use crate::layout::generate_foliage;
use crate::morph;
use crate::options::{FoliageOptions, TreeDims};

/// Dense point cloud forming the tree body. Unlike instanced layers the
/// output is a flat `[x, y, z]` float array sized `count * 3`, matching
/// what point-cloud renderers upload directly.
pub struct FoliageCloud {
    formed: Vec<Vec3>,
    scattered: Vec<Vec3>,
    positions: Vec<f32>,
}

impl FoliageCloud {
    /// Generate the cloud. Allocates the output buffer once.
    pub fn generate(
        opts: &FoliageOptions,
        dims: &TreeDims,
        rng: &mut impl Rng,
    ) -> Self {
        let (formed, scattered) = generate_foliage(opts, dims, rng);
        let positions = vec![0.0; formed.len() * 3];
        Self {
            formed,
            scattered,
            positions,
        }
    }

    /// Point count (fixed for the scene lifetime).
    #[must_use]
    pub fn len(&self) -> usize {
        self.formed.len()
    }

    /// Whether the cloud holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formed.is_empty()
    }

    /// Formed positions (static).
    #[must_use]
    pub fn formed(&self) -> &[Vec3] {
        &self.formed
    }

    /// Scattered positions (static).
    #[must_use]
    pub fn scattered(&self) -> &[Vec3] {
        &self.scattered
    }

    /// The flat position buffer, valid after the last
    /// [`write_frame`](Self::write_frame).
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Rewrite the whole position buffer for this frame. `sway` is the
    /// always-on ambient amplitude that survives a fully formed tree.
    pub fn write_frame(&mut self, current: f32, t: f32, sway: f32) {
        let inv_m = 1.0 - current;
        for i in 0..self.formed.len() {
            let p = morph::blend(self.scattered[i], self.formed[i], current)
                + morph::foliage_drift(t, i, inv_m, sway);
            self.positions[i * 3] = p.x;
            self.positions[i * 3 + 1] = p.y;
            self.positions[i * 3 + 2] = p.z;
        }
    }
}
