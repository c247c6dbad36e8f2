//! The distinguished topper element.

use glam::Quat;

use crate::options::TopperOptions;
use crate::scene::InstanceTransform;

/// The topper (star) crowning the tree. Unlike layer elements it scales
/// with the morph value directly — invisible while scattered, full size
/// once formed — and spins continuously regardless of morph state.
pub struct Topper {
    opts: TopperOptions,
    transform: InstanceTransform,
}

impl Topper {
    /// Create the topper from its options.
    #[must_use]
    pub fn new(opts: TopperOptions) -> Self {
        Self {
            opts,
            transform: InstanceTransform {
                scale: 0.0,
                ..InstanceTransform::identity()
            },
        }
    }

    /// The frame-output transform, valid after the last
    /// [`write_frame`](Self::write_frame).
    #[must_use]
    pub fn transform(&self) -> InstanceTransform {
        self.transform
    }

    /// Rewrite the transform for this frame.
    pub fn write_frame(&mut self, current: f32, t: f32) {
        let height = self.opts.scattered_height
            + (self.opts.formed_height - self.opts.scattered_height)
                * current;
        self.transform = InstanceTransform {
            position: [0.0, height, 0.0],
            scale: current,
            rotation: Quat::from_rotation_z(t * self.opts.spin_rate)
                .to_array(),
        };
    }
}
