//! The engine facade: owns the scene, morph state, and camera rig, and
//! advances them once per frame.

use rand::Rng;

use crate::camera::{CameraUniform, OrbitRig};
use crate::gesture::HandPose;
use crate::morph::{MorphState, TreeState};
use crate::options::Options;
use crate::scene::{InstanceTransform, Scene};

/// The morphing particle-tree engine.
///
/// # Construction
///
/// [`ArborEngine::new`] generates the scene from options with a
/// system-seeded rng; [`ArborEngine::with_rng`] takes an explicit rng for
/// reproducible scenes.
///
/// # Frame loop
///
/// Feed input through [`set_target`](Self::set_target) (or the input
/// boundary in [`crate::input`]), then call [`step`](Self::step) once per
/// frame with the elapsed time in seconds. The step is synchronous and
/// rewrites every output buffer before returning; consumers read the
/// buffers afterward.
pub struct ArborEngine {
    options: Options,
    scene: Scene,
    morph: MorphState,
    rig: OrbitRig,
    last_t: Option<f32>,
}

impl ArborEngine {
    /// Build an engine with a system-seeded rng. The scene starts
    /// scattered and assembles toward the formed state.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_rng(options, &mut rand::rng())
    }

    /// Build an engine with an explicit rng for reproducible layouts.
    pub fn with_rng(options: Options, rng: &mut impl Rng) -> Self {
        let scene = Scene::generate(&options.layout, rng);
        let rig = OrbitRig::new(options.camera);
        Self {
            options,
            scene,
            morph: MorphState::new(TreeState::Formed),
            rig,
            last_t: None,
        }
    }

    /// Set the morph target: `true` assembles the tree, `false` scatters
    /// it. The sole external mutator of morph state.
    pub fn set_target(&mut self, formed: bool) {
        self.morph.set_target(formed);
    }

    /// Flip the current target.
    pub fn toggle_target(&mut self) {
        let formed = self.morph.target_state() == TreeState::Formed;
        self.set_target(!formed);
        log::info!("morph target now {:?}", self.morph.target_state());
    }

    /// Route a classified hand pose: open palm scatters, closed fist
    /// forms, and the hand center nudges the camera.
    pub fn set_hand_pose(&mut self, pose: HandPose) {
        self.set_target(!pose.is_open);
        self.rig.set_hand_offset(pose.center);
    }

    /// The semantic state currently targeted.
    #[must_use]
    pub fn tree_state(&self) -> TreeState {
        self.morph.target_state()
    }

    /// The morph state.
    #[must_use]
    pub fn morph(&self) -> &MorphState {
        &self.morph
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The generated scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera rig, for direct orbit/zoom input.
    pub fn rig_mut(&mut self) -> &mut OrbitRig {
        &mut self.rig
    }

    /// Advance one frame. `elapsed_seconds` is monotonically increasing
    /// time since scene start; calling with a repeated value is valid and
    /// simply re-renders the same instant after one more smoothing step.
    pub fn step(&mut self, elapsed_seconds: f32) {
        let dt = self
            .last_t
            .map_or(0.0, |prev| (elapsed_seconds - prev).max(0.0));
        self.last_t = Some(elapsed_seconds);

        let current = self.morph.advance(self.options.morph.smoothing);
        self.scene
            .write_frame(current, elapsed_seconds, &self.options.morph);

        if self.morph.target_state() == TreeState::Formed {
            self.rig.auto_rotate(dt);
        }
    }

    /// Transform buffer for a named layer, valid after the last step.
    #[must_use]
    pub fn layer_transforms(
        &self,
        name: &str,
    ) -> Option<&[InstanceTransform]> {
        self.scene.layer(name).map(crate::scene::Layer::transforms)
    }

    /// Flat foliage position buffer, valid after the last step.
    #[must_use]
    pub fn foliage_positions(&self) -> &[f32] {
        self.scene.foliage().positions()
    }

    /// Topper transform, valid after the last step.
    #[must_use]
    pub fn topper_transform(&self) -> InstanceTransform {
        self.scene.topper().transform()
    }

    /// Camera uniform for the given viewport aspect ratio.
    #[must_use]
    pub fn camera_uniform(&self, aspect: f32) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.rig.camera(aspect));
        uniform
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::options::{MorphOptions, Placement};

    /// Small scene with drift disabled, so convergence is observable.
    fn still_options() -> Options {
        let mut opts = Options::default();
        opts.layout.foliage.count = 300;
        opts.layout.layers.truncate(3);
        for layer in &mut opts.layout.layers {
            layer.count = 40;
        }
        opts.morph = MorphOptions {
            drift_scale: 0.0,
            foliage_sway: 0.0,
            ..MorphOptions::default()
        };
        opts
    }

    fn engine_with(opts: Options) -> ArborEngine {
        let mut rng = StdRng::seed_from_u64(99);
        ArborEngine::with_rng(opts, &mut rng)
    }

    fn run_steps(engine: &mut ArborEngine, start: u32, count: u32) -> f32 {
        let mut t = 0.0;
        for frame in start..start + count {
            t = frame as f32 / 60.0;
            engine.step(t);
        }
        t
    }

    #[test]
    fn scatter_then_form_end_to_end() {
        let mut engine = engine_with(still_options());

        engine.set_target(false);
        let _ = run_steps(&mut engine, 0, 500);
        assert!(engine.morph().current() < 1e-3);
        for layer in engine.scene().layers() {
            for (e, tr) in layer.elements().iter().zip(layer.transforms()) {
                let p = Vec3::from_array(tr.position);
                assert!(
                    (p - e.scattered).length() < 1e-2,
                    "element strayed from scattered position"
                );
            }
        }

        engine.set_target(true);
        let _ = run_steps(&mut engine, 500, 500);
        assert!(1.0 - engine.morph().current() < 1e-3);
        for layer in engine.scene().layers() {
            for (e, tr) in layer.elements().iter().zip(layer.transforms()) {
                let p = Vec3::from_array(tr.position);
                assert!(
                    (p - e.formed).length() < 1e-2,
                    "element strayed from formed position"
                );
            }
        }
    }

    #[test]
    fn morph_stays_bounded_under_chaotic_input() {
        let mut engine = engine_with(still_options());
        for frame in 0..600 {
            engine.set_target(frame % 3 == 0);
            engine.step(frame as f32 / 60.0);
            let current = engine.morph().current();
            assert!((0.0..=1.0).contains(&current));
        }
    }

    #[test]
    fn zero_elapsed_time_between_steps_is_tolerated() {
        let mut engine = engine_with(still_options());
        for _ in 0..10 {
            engine.step(1.0);
        }
        // Morph still advances per step even with frozen time.
        assert!(engine.morph().current() > 0.0);
    }

    #[test]
    fn topper_scales_in_with_morph() {
        let mut engine = engine_with(still_options());
        engine.step(0.0);
        let early = engine.topper_transform().scale;
        let _ = run_steps(&mut engine, 1, 400);
        let late = engine.topper_transform().scale;
        assert!(early < 0.1);
        assert!(late > 0.99);
        let y = engine.topper_transform().position[1];
        assert!((y - 9.5).abs() < 0.1);
    }

    #[test]
    fn hand_pose_routes_to_target_and_camera() {
        use glam::Vec2;
        let mut engine = engine_with(still_options());
        engine.set_hand_pose(HandPose {
            is_open: true,
            center: Vec2::new(0.4, -0.2),
        });
        assert_eq!(engine.tree_state(), TreeState::Scattered);

        engine.set_hand_pose(HandPose {
            is_open: false,
            center: Vec2::ZERO,
        });
        assert_eq!(engine.tree_state(), TreeState::Formed);
    }

    #[test]
    fn auto_rotate_only_while_formed() {
        let mut engine = engine_with(still_options());

        engine.set_target(false);
        let _ = run_steps(&mut engine, 0, 10);
        let scattered_eye = engine.camera_uniform(1.0).position;
        let _ = run_steps(&mut engine, 10, 10);
        assert_eq!(scattered_eye, engine.camera_uniform(1.0).position);

        engine.set_target(true);
        let _ = run_steps(&mut engine, 20, 10);
        assert_ne!(scattered_eye, engine.camera_uniform(1.0).position);
    }

    #[test]
    fn layer_lookup_through_the_engine() {
        let mut engine = engine_with(still_options());
        engine.step(0.0);
        assert!(engine.layer_transforms("gold_ornaments").is_some());
        assert!(engine.layer_transforms("missing").is_none());
        assert_eq!(engine.foliage_positions().len(), 300 * 3);
    }

    #[test]
    fn drift_spreads_elements_while_scattered() {
        let mut opts = still_options();
        opts.morph = MorphOptions::default();
        opts.layout.layers.push(crate::options::LayerSpec {
            name: "drifting".to_owned(),
            count: 20,
            weight: 0.6,
            scale: 0.1,
            scale_max: None,
            drift_radius: 18.0,
            oriented: true,
            placement: Placement::Surface {
                radius_offset: 0.15,
            },
        });
        let mut engine = engine_with(opts);
        engine.set_target(false);
        let _ = run_steps(&mut engine, 0, 300);

        // With morph ~0, drift displaces elements but stays bounded by
        // weight * drift_scale per axis.
        let layer = engine.scene().layer("drifting").unwrap();
        let max = 0.6 * 9.0 * 3.0f32.sqrt() + 1e-3;
        let mut any_moved = false;
        for (e, tr) in layer.elements().iter().zip(layer.transforms()) {
            let offset =
                (Vec3::from_array(tr.position) - e.scattered).length();
            assert!(offset <= max + 1e-2);
            if offset > 1e-3 {
                any_moved = true;
            }
        }
        assert!(any_moved, "scattered elements should drift");
    }
}
