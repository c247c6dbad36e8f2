//! Camera rig options.

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Orbit camera parameters. Defaults match the standard framing: eye at
/// (0, 3, 22) looking at the origin, fov 45°.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Initial eye height above the focus point.
    pub base_height: f32,
    /// Initial orbit distance.
    pub distance: f32,
    /// Closest allowed orbit distance.
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    pub max_distance: f32,
    /// Maximum polar angle from straight up, radians. Caps how far the
    /// camera can dip below the horizon.
    pub max_polar_angle: f32,
    /// Auto-rotation yaw rate while the tree is formed, radians per second.
    pub auto_rotate_speed: f32,
    /// Hand-offset multipliers applied to the normalized hand center
    /// (x right, y up; the y factor is negative to mirror the camera).
    pub hand_offset_scale: [f32; 2],
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            base_height: 3.0,
            distance: 22.0,
            min_distance: 12.0,
            max_distance: 35.0,
            max_polar_angle: PI / 1.75,
            auto_rotate_speed: 0.3,
            hand_offset_scale: [5.0, -3.0],
            znear: 0.1,
            zfar: 200.0,
        }
    }
}
