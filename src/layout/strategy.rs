//! Formed-position placement strategies.
//!
//! Each layer picks one [`Placement`]; the generator maps it to a point on
//! (or around) the tree silhouette. The cone parameterization is shared:
//! a uniform `t ∈ [0,1)` maps to radius `(1 − t)·base_radius` and height
//! `t·height − y_offset`, so the cone narrows as it rises.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::options::{Placement, TreeDims};

/// Sample a single formed position for the given placement.
pub fn sample_formed(
    placement: &Placement,
    dims: &TreeDims,
    rng: &mut impl Rng,
) -> Vec3 {
    match *placement {
        Placement::Spiral { turns } => {
            let t: f32 = rng.random();
            let r = (1.0 - t) * dims.base_radius;
            let angle = t * turns;
            Vec3::new(
                angle.cos() * r,
                t * dims.height - dims.y_offset,
                angle.sin() * r,
            )
        }
        Placement::Surface { radius_offset } => {
            let t: f32 = rng.random();
            let angle = rng.random::<f32>() * TAU;
            let r = (1.0 - t) * (dims.base_radius + radius_offset);
            Vec3::new(
                angle.cos() * r,
                t * dims.height - dims.y_offset,
                angle.sin() * r,
            )
        }
        Placement::GroundRing {
            inner_radius,
            spread,
            floor,
            band_height,
        } => {
            let angle = rng.random::<f32>() * TAU;
            let r = inner_radius + rng.random::<f32>() * spread;
            Vec3::new(
                angle.cos() * r,
                floor + rng.random::<f32>() * band_height,
                angle.sin() * r,
            )
        }
    }
}
