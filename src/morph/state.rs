//! Scalar morph state: a single value easing between scattered and formed.

/// The two semantic states of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeState {
    /// Elements dispersed into the surrounding cloud (morph target 0).
    Scattered,
    /// Elements assembled into the tree silhouette (morph target 1).
    #[default]
    Formed,
}

impl TreeState {
    /// The morph target value this state corresponds to.
    #[must_use]
    pub fn target(self) -> f32 {
        match self {
            Self::Scattered => 0.0,
            Self::Formed => 1.0,
        }
    }
}

/// Mutable morph state owned by the engine: a target of 0 or 1 and a
/// current value eased toward it once per step.
///
/// The engine is always mid-transition except at rest. Re-targeting
/// mid-flight redirects the exponential approach smoothly; there is no
/// separate "in progress" state to cancel.
#[derive(Debug, Clone, Copy)]
pub struct MorphState {
    current: f32,
    target: f32,
}

impl MorphState {
    /// Start fully scattered, easing toward `target`. A scene created
    /// with [`TreeState::Formed`] therefore assembles itself on startup.
    #[must_use]
    pub fn new(target: TreeState) -> Self {
        Self {
            current: 0.0,
            target: target.target(),
        }
    }

    /// Start at rest in the given state (no intro transition).
    #[must_use]
    pub fn settled(state: TreeState) -> Self {
        Self {
            current: state.target(),
            target: state.target(),
        }
    }

    /// Set the morph target. The sole external mutator.
    pub fn set_target(&mut self, formed: bool) {
        self.target = if formed { 1.0 } else { 0.0 };
    }

    /// The semantic state currently targeted.
    #[must_use]
    pub fn target_state(&self) -> TreeState {
        if self.target >= 0.5 {
            TreeState::Formed
        } else {
            TreeState::Scattered
        }
    }

    /// Current morph value in `[0, 1]`.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Advance one step of the one-pole filter:
    /// `current += (target − current) · smoothing`.
    ///
    /// With target pinned to 0 or 1 and smoothing in `(0, 1]` this is a
    /// convex combination, so `current` never leaves `[0, 1]` and never
    /// overshoots. The clamp only guards degenerate smoothing inputs.
    /// Returns the updated value.
    pub fn advance(&mut self, smoothing: f32) -> f32 {
        self.current += (self.target - self.current) * smoothing;
        self.current = self.current.clamp(0.0, 1.0);
        self.current
    }

    /// Whether the current value is within `tolerance` of the target.
    #[must_use]
    pub fn is_settled(&self, tolerance: f32) -> bool {
        (self.target - self.current).abs() < tolerance
    }
}

impl Default for MorphState {
    fn default() -> Self {
        Self::new(TreeState::Formed)
    }
}
