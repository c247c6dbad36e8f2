//! Platform-agnostic control events.
//!
//! Everything that can mutate the engine from outside funnels through
//! [`ControlEvent`]: UI buttons, the gesture adapter, and the wish
//! service's pending/complete cues. Hosts translate their native input
//! into these events and hand them to an [`InputProcessor`].

use crate::engine::ArborEngine;
use crate::gesture::HandPose;

/// A single control input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Directly set the morph target (`true` = formed).
    SetFormed(bool),
    /// Flip the current morph target.
    ToggleForm,
    /// A classified hand pose from the gesture adapter.
    HandPose(HandPose),
    /// Wish submission lifecycle: `true` while a request is in flight.
    /// Pending scatters the tree as a loading cue; completion re-forms it,
    /// success and failure alike.
    WishPending(bool),
}

/// Applies control events to the engine.
///
/// Duplicate-submission suppression for the wish service is the caller's
/// responsibility; the processor applies whatever it is handed.
#[derive(Debug, Default)]
pub struct InputProcessor;

impl InputProcessor {
    /// Create a processor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply one event to the engine.
    pub fn handle_event(
        &mut self,
        engine: &mut ArborEngine,
        event: ControlEvent,
    ) {
        match event {
            ControlEvent::SetFormed(formed) => engine.set_target(formed),
            ControlEvent::ToggleForm => engine.toggle_target(),
            ControlEvent::HandPose(pose) => engine.set_hand_pose(pose),
            ControlEvent::WishPending(pending) => {
                engine.set_target(!pending);
            }
        }
    }
}
