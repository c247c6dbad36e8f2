//! Hand-gesture classification and the tracking boundary.
//!
//! Classification is a fixed heuristic over 21 normalized 2D hand
//! landmarks: count fingertips farther than a threshold from the palm
//! base; three or more away means an open hand. The landmark *source*
//! (camera + tracking library) stays external behind [`LandmarkSource`];
//! a source that is unavailable degrades the tracker to inactive and is
//! retried on a fixed interval, never surfaced as an error.

use glam::Vec2;
use web_time::{Duration, Instant};

/// Number of landmarks in one hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// Fingertip landmark indices (index, middle, ring, pinky).
const FINGERTIPS: [usize; 4] = [8, 12, 16, 20];
/// Wrist/palm-base landmark index.
const PALM_BASE: usize = 0;
/// Middle-finger knuckle; a stable proxy for the hand center.
const HAND_CENTER: usize = 9;
/// Fingertip-to-palm distance beyond which a finger counts as extended.
const OPEN_DISTANCE: f32 = 0.15;
/// Extended fingertips required to call the hand open.
const OPEN_FINGER_MIN: usize = 3;

/// How long to wait before re-checking an unready source.
const RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// One frame of hand landmarks in normalized [0, 1] image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks(pub [Vec2; LANDMARK_COUNT]);

/// Classifier output: the open/closed bit plus a normalized hand center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPose {
    /// `true` for an open palm, `false` for a closed fist.
    pub is_open: bool,
    /// Hand center remapped from [0, 1] image space to [-1, 1] per axis.
    pub center: Vec2,
}

/// Classify one landmark frame.
#[must_use]
pub fn classify(landmarks: &HandLandmarks) -> HandPose {
    let palm = landmarks.0[PALM_BASE];
    let open_count = FINGERTIPS
        .iter()
        .filter(|&&tip| landmarks.0[tip].distance(palm) > OPEN_DISTANCE)
        .count();
    let center = (landmarks.0[HAND_CENTER] - Vec2::splat(0.5)) * 2.0;
    HandPose {
        is_open: open_count >= OPEN_FINGER_MIN,
        center,
    }
}

/// The pluggable external tracking backend.
///
/// Implementations wrap whatever camera/tracking stack the host embeds.
/// `ready` reports whether the backend has finished initializing; `poll`
/// yields the most recent landmark frame, if any hand is visible.
pub trait LandmarkSource {
    /// Whether the backend is initialized and producing frames.
    fn ready(&self) -> bool {
        true
    }

    /// The latest landmark frame, or `None` when no hand is visible.
    fn poll(&mut self) -> Option<HandLandmarks>;
}

/// Wraps a [`LandmarkSource`], classifying frames and tracking liveness.
///
/// An unready source keeps the tracker inactive; readiness is re-checked
/// on a fixed interval so a backend that loads late still comes up,
/// without the host ever seeing an error.
pub struct GestureTracker {
    source: Box<dyn LandmarkSource>,
    active: bool,
    next_retry: Instant,
    retry_interval: Duration,
}

impl GestureTracker {
    /// Wrap a landmark source with the default retry interval.
    #[must_use]
    pub fn new(source: Box<dyn LandmarkSource>) -> Self {
        Self::with_retry_interval(source, RETRY_INTERVAL)
    }

    /// Wrap a landmark source with a custom retry interval.
    #[must_use]
    pub fn with_retry_interval(
        source: Box<dyn LandmarkSource>,
        retry_interval: Duration,
    ) -> Self {
        Self {
            source,
            active: false,
            next_retry: Instant::now(),
            retry_interval,
        }
    }

    /// Whether the source has come up.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Poll the source for a classified hand pose.
    ///
    /// Returns `None` while the source is down or no hand is visible.
    pub fn poll(&mut self) -> Option<HandPose> {
        if !self.active {
            let now = Instant::now();
            if now < self.next_retry {
                return None;
            }
            if !self.source.ready() {
                log::debug!("gesture source not ready, retrying");
                self.next_retry = now + self.retry_interval;
                return None;
            }
            self.active = true;
            log::info!("gesture tracking active");
        }
        self.source.poll().map(|frame| classify(&frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Landmarks with every point at the palm (a fist), then fingertips
    /// optionally extended.
    fn fist_at(palm: Vec2) -> HandLandmarks {
        HandLandmarks([palm; LANDMARK_COUNT])
    }

    fn open_hand_at(palm: Vec2) -> HandLandmarks {
        let mut lm = fist_at(palm);
        for (i, &tip) in FINGERTIPS.iter().enumerate() {
            lm.0[tip] = palm + Vec2::new(0.2, 0.05 * i as f32);
        }
        lm
    }

    #[test]
    fn open_hand_classifies_open() {
        let pose = classify(&open_hand_at(Vec2::new(0.5, 0.5)));
        assert!(pose.is_open);
    }

    #[test]
    fn fist_classifies_closed() {
        let pose = classify(&fist_at(Vec2::new(0.5, 0.5)));
        assert!(!pose.is_open);
    }

    #[test]
    fn two_extended_fingers_is_still_closed() {
        let palm = Vec2::new(0.5, 0.5);
        let mut lm = fist_at(palm);
        lm.0[FINGERTIPS[0]] = palm + Vec2::new(0.2, 0.0);
        lm.0[FINGERTIPS[1]] = palm + Vec2::new(0.0, 0.2);
        assert!(!classify(&lm).is_open);
    }

    #[test]
    fn center_is_remapped_to_signed_range() {
        let mut lm = fist_at(Vec2::new(0.5, 0.5));
        lm.0[HAND_CENTER] = Vec2::new(0.75, 0.25);
        let pose = classify(&lm);
        assert!((pose.center - Vec2::new(0.5, -0.5)).length() < 1e-6);
    }

    struct FakeSource {
        ready: bool,
        frame: Option<HandLandmarks>,
    }

    impl LandmarkSource for FakeSource {
        fn ready(&self) -> bool {
            self.ready
        }
        fn poll(&mut self) -> Option<HandLandmarks> {
            self.frame
        }
    }

    #[test]
    fn unready_source_keeps_tracker_inactive() {
        let source = FakeSource {
            ready: false,
            frame: Some(open_hand_at(Vec2::new(0.5, 0.5))),
        };
        let mut tracker = GestureTracker::with_retry_interval(
            Box::new(source),
            Duration::ZERO,
        );
        for _ in 0..5 {
            assert!(tracker.poll().is_none());
            assert!(!tracker.active());
        }
    }

    #[test]
    fn ready_source_activates_and_classifies() {
        let source = FakeSource {
            ready: true,
            frame: Some(open_hand_at(Vec2::new(0.5, 0.5))),
        };
        let mut tracker = GestureTracker::with_retry_interval(
            Box::new(source),
            Duration::ZERO,
        );
        let pose = tracker.poll().unwrap();
        assert!(pose.is_open);
        assert!(tracker.active());
    }

    #[test]
    fn no_hand_visible_yields_none_but_stays_active() {
        let source = FakeSource {
            ready: true,
            frame: None,
        };
        let mut tracker = GestureTracker::with_retry_interval(
            Box::new(source),
            Duration::ZERO,
        );
        assert!(tracker.poll().is_none());
        assert!(tracker.active());
    }
}
