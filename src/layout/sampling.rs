//! Random sampling primitives for layout generation.

use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

/// Sample a point uniformly *by volume* inside a sphere of the given radius.
///
/// Draws `theta = 2π·u`, `phi = acos(2v − 1)` for a uniform direction, then
/// `r = R·cbrt(w)`. The cube root counteracts the r² growth of shell volume;
/// a naive `r = R·w` clumps samples toward the center.
pub fn sample_in_sphere(rng: &mut impl Rng, radius: f32) -> Vec3 {
    let u: f32 = rng.random();
    let v: f32 = rng.random();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();
    let r = radius * rng.random::<f32>().cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Jitter a base scale by the layer-standard spread (0.9x to 1.2x).
pub fn jittered_scale(rng: &mut impl Rng, base: f32) -> f32 {
    base * (0.9 + rng.random::<f32>() * 0.3)
}

/// Random base orientation for oriented elements: a slight forward tilt and
/// a free yaw, no roll.
pub fn random_orientation(rng: &mut impl Rng) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.random::<f32>() * 0.4,
        rng.random::<f32>() * PI,
        0.0,
    )
}
