//! Orbit rig: spherical camera motion with clamps, auto-rotation, and the
//! hand-offset nudge.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::options::CameraOptions;

/// Highest allowed pitch, just short of straight up.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;

/// Orbit camera rig around a fixed focus point.
///
/// Yaw rotates freely (and auto-rotates slowly while the tree is formed);
/// pitch is capped by the configured maximum polar angle; distance is
/// clamped to the configured range. The gesture adapter's normalized hand
/// center nudges the eye sideways without affecting the orbit itself.
pub struct OrbitRig {
    opts: CameraOptions,
    yaw: f32,
    pitch: f32,
    distance: f32,
    focus: Vec3,
    hand_offset: Vec2,
}

impl OrbitRig {
    /// Create the rig at its default framing.
    #[must_use]
    pub fn new(opts: CameraOptions) -> Self {
        let pitch = (opts.base_height / opts.distance).atan();
        let distance = opts.distance;
        Self {
            opts,
            yaw: 0.0,
            pitch,
            distance,
            focus: Vec3::ZERO,
            hand_offset: Vec2::ZERO,
        }
    }

    /// Lowest allowed pitch, derived from the maximum polar angle
    /// (measured from straight up).
    fn min_pitch(&self) -> f32 {
        FRAC_PI_2 - self.opts.max_polar_angle
    }

    /// Apply an orbit delta in radians (yaw, pitch).
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch)
            .clamp(self.min_pitch(), MAX_PITCH);
    }

    /// Zoom by a wheel delta (positive = zoom in), respecting the
    /// distance clamps.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta)
            .clamp(self.opts.min_distance, self.opts.max_distance);
    }

    /// Advance the slow auto-rotation; call once per frame with the frame
    /// delta while the tree is formed.
    pub fn auto_rotate(&mut self, dt: f32) {
        self.yaw += self.opts.auto_rotate_speed * dt;
    }

    /// Set the normalized hand center ([-1, 1] per axis) from the gesture
    /// adapter. The configured scale maps it to a world-space eye nudge.
    pub fn set_hand_offset(&mut self, center: Vec2) {
        self.hand_offset = Vec2::new(
            center.x * self.opts.hand_offset_scale[0],
            center.y * self.opts.hand_offset_scale[1],
        );
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Build the camera for the given viewport aspect ratio.
    #[must_use]
    pub fn camera(&self, aspect: f32) -> Camera {
        let dir = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        let eye = self.focus
            + dir * self.distance
            + Vec3::new(self.hand_offset.x, self.hand_offset.y, 0.0);
        Camera {
            eye,
            target: self.focus,
            up: Vec3::Y,
            aspect,
            fovy: self.opts.fov_degrees,
            znear: self.opts.znear,
            zfar: self.opts.zfar,
        }
    }
}
