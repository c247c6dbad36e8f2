//! Oscillatory drift and tumble math.
//!
//! Drift is a continuous displacement added on top of the blended
//! position. Each axis uses a distinct frequency and trig function so
//! neighboring elements never move in lockstep, and the per-element index
//! acts as a phase offset. Amplitude scales with `1 − morph`, so drift
//! vanishes as the tree assembles.

use glam::Vec3;

/// Foliage axis frequencies (x, y, z), cycles of elapsed time.
const FOLIAGE_FREQ: [f32; 3] = [0.5, 0.4, 0.6];
/// Foliage axis amplitudes at full scatter.
const FOLIAGE_AMP: [f32; 3] = [4.0, 3.0, 4.0];

/// Per-axis frequency offsets for instanced layers; added to the element
/// weight so heavier elements oscillate faster.
const INSTANCE_FREQ_OFFSET: [f32; 3] = [0.4, 0.3, 0.5];

/// Blend between scattered and formed positions.
///
/// Uses the two-product form `scattered·(1−t) + formed·t`, which is exact
/// at both endpoints: morph 0 returns `scattered` bit-for-bit, morph 1
/// returns `formed`. The one-product lerp form does not guarantee that.
#[inline]
pub fn blend(scattered: Vec3, formed: Vec3, current: f32) -> Vec3 {
    scattered * (1.0 - current) + formed * current
}

/// Drift displacement for one instanced element.
///
/// `inv_morph` is `1 − current`; at 0 (fully formed) the result is exactly
/// `Vec3::ZERO`.
#[inline]
pub fn instance_drift(
    t: f32,
    index: usize,
    weight: f32,
    inv_morph: f32,
    drift_scale: f32,
) -> Vec3 {
    let amp = weight * inv_morph * drift_scale;
    let phase = index as f32;
    Vec3::new(
        (t * (INSTANCE_FREQ_OFFSET[0] + weight) + phase).sin() * amp,
        (t * (INSTANCE_FREQ_OFFSET[1] + weight) + phase).cos() * amp,
        (t * (INSTANCE_FREQ_OFFSET[2] + weight) + phase).sin() * amp,
    )
}

/// Drift displacement for one foliage point.
///
/// Unlike instanced layers, foliage keeps a small always-on `sway`
/// amplitude, so a fully formed tree still breathes. This is the sole
/// exception to drift vanishing at morph 1.
#[inline]
pub fn foliage_drift(t: f32, index: usize, inv_morph: f32, sway: f32) -> Vec3 {
    let phase = index as f32;
    Vec3::new(
        (t * FOLIAGE_FREQ[0] + phase).sin()
            * (inv_morph * FOLIAGE_AMP[0] + sway),
        (t * FOLIAGE_FREQ[1] + phase).cos()
            * (inv_morph * FOLIAGE_AMP[1] + sway),
        (t * FOLIAGE_FREQ[2] + phase).sin()
            * (inv_morph * FOLIAGE_AMP[2] + sway),
    )
}

/// Tumble angle about +Y for an oriented element that is not yet formed.
#[inline]
pub fn spin_angle(t: f32, weight: f32, spin_rate: f32) -> f32 {
    t * weight * spin_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_is_exact_at_endpoints() {
        let scattered = Vec3::new(13.7, -4.2, 9.9);
        let formed = Vec3::new(0.1, 7.3, -0.4);
        assert_eq!(blend(scattered, formed, 0.0), scattered);
        assert_eq!(blend(scattered, formed, 1.0), formed);
        let mid = blend(scattered, formed, 0.5);
        assert!((mid - (scattered + formed) * 0.5).length() < 1e-5);
    }

    #[test]
    fn instance_drift_vanishes_when_formed() {
        for i in 0..50 {
            let d = instance_drift(123.4, i, 1.6, 0.0, 9.0);
            assert_eq!(d, Vec3::ZERO);
        }
    }

    #[test]
    fn instance_drift_bounded_by_amplitude() {
        let weight = 0.7;
        let scale = 9.0;
        for i in 0..100 {
            let t = i as f32 * 0.37;
            let d = instance_drift(t, i, weight, 1.0, scale);
            let max = weight * scale;
            assert!(d.x.abs() <= max && d.y.abs() <= max && d.z.abs() <= max);
        }
    }

    #[test]
    fn foliage_keeps_ambient_sway_when_formed() {
        let sway = 0.12;
        // Sample many phases; the sway amplitude bounds the displacement
        // and at least some samples must actually move.
        let mut moved = false;
        for i in 0..100 {
            let d = foliage_drift(i as f32 * 0.51, i, 0.0, sway);
            assert!(d.length() <= sway * 3.0f32.sqrt() + 1e-6);
            if d.length() > 1e-4 {
                moved = true;
            }
        }
        assert!(moved, "formed foliage should still sway");
    }

    #[test]
    fn foliage_drift_zero_without_sway() {
        let d = foliage_drift(42.0, 7, 0.0, 0.0);
        assert_eq!(d, Vec3::ZERO);
    }

    #[test]
    fn phase_offset_desynchronizes_elements() {
        let a = instance_drift(10.0, 0, 0.6, 1.0, 9.0);
        let b = instance_drift(10.0, 1, 0.6, 1.0, 9.0);
        assert!((a - b).length() > 1e-3);
    }

    #[test]
    fn spin_angle_scales_with_weight_and_time() {
        assert_eq!(spin_angle(10.0, 0.5, 0.6), 3.0);
        assert_eq!(spin_angle(0.0, 0.5, 0.6), 0.0);
    }
}
