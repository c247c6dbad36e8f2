//! The morph engine core: scalar state and drift math.
//!
//! Every frame the engine advances a single morph value toward its target
//! with a one-pole exponential filter, then each scene layer blends its
//! elements between scattered and formed positions and layers drift on
//! top. The buffer rewrites themselves live with the scene types; this
//! module owns the math they share.

mod drift;
mod state;

pub use drift::{blend, foliage_drift, instance_drift, spin_angle};
pub use state::{MorphState, TreeState};
