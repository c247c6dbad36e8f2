//! Morph engine tuning parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Morph engine parameters.
///
/// `smoothing` is applied once per step, not scaled by wall-clock delta:
/// convergence speed therefore tracks the step rate. The default 0.035 was
/// tuned against ~60 steps per second; halving the step rate roughly
/// doubles the transition time. Kept per-step deliberately — see DESIGN.md.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MorphOptions {
    /// One-pole smoothing factor applied each step, in (0, 1].
    pub smoothing: f32,
    /// Global drift amplitude multiplier for instanced layers.
    pub drift_scale: f32,
    /// Tumble rate multiplier for oriented elements.
    pub spin_rate: f32,
    /// Morph value above which tumbling stops and elements snap to their
    /// base orientation.
    pub spin_cutoff: f32,
    /// Always-on sway amplitude for the foliage point cloud. This is the
    /// sole motion that survives a fully formed tree; every instanced
    /// layer comes to rest exactly on its formed position.
    pub foliage_sway: f32,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            smoothing: 0.035,
            drift_scale: 9.0,
            spin_rate: 0.6,
            spin_cutoff: 0.95,
            foliage_sway: 0.12,
        }
    }
}
