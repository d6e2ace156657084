//! Angle classification against a configured acceptable band
//!
//! One rule for every limb: closed-interval membership. Left and right
//! limbs wanting different bands get different `AngleRange` values, never
//! different comparison logic.

use super::angle::joint_angle;
use super::keypoint::JointTriple;

/// Inclusive acceptable band for one limb, in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    pub low: f32,
    pub high: f32,
}

impl AngleRange {
    /// An inverted range is a caller bug, caught here in debug builds.
    pub fn new(low: f32, high: f32) -> Self {
        debug_assert!(low <= high, "inverted angle range: {low} > {high}");
        Self { low, high }
    }

    /// Closed-interval membership: both bounds count as in range.
    pub fn contains(&self, degrees: f32) -> bool {
        degrees >= self.low && degrees <= self.high
    }
}

/// Result of evaluating one limb for one frame
///
/// Derived and recomputed every call; carries no identity and no history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleVerdict {
    /// Interior angle at the triple's vertex, 0-180
    pub angle_degrees: f32,
    /// Whether the angle sits inside the configured band
    pub in_range: bool,
}

/// Evaluate one limb for one frame
///
/// Returns `None` when any keypoint in the triple scores below
/// `score_threshold`: the limb is not reliably in view, and the caller
/// should skip rendering feedback for it this frame rather than treat
/// this as an error. Keypoints without a score count as fully confident.
///
/// Pure and stateless; safe to call every frame from any call site.
pub fn classify(
    triple: &JointTriple,
    range: &AngleRange,
    score_threshold: f32,
) -> Option<AngleVerdict> {
    let confident = [triple.proximal, triple.vertex, triple.distal]
        .iter()
        .all(|kp| kp.confidence() >= score_threshold);
    if !confident {
        return None;
    }

    let angle_degrees = joint_angle(&triple.proximal, &triple.vertex, &triple.distal);
    Some(AngleVerdict {
        angle_degrees,
        in_range: range.contains(angle_degrees),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::keypoint::Keypoint;

    fn right_angle_triple(scores: [f32; 3]) -> JointTriple {
        JointTriple::new(
            Keypoint::with_score(0.0, -1.0, scores[0]),
            Keypoint::with_score(0.0, 0.0, scores[1]),
            Keypoint::with_score(1.0, 0.0, scores[2]),
        )
    }

    #[test]
    fn low_vertex_score_gives_no_verdict() {
        let triple = right_angle_triple([0.9, 0.3, 0.9]);
        let range = AngleRange::new(0.0, 180.0);
        assert_eq!(classify(&triple, &range, 0.5), None);
    }

    #[test]
    fn unscored_keypoints_pass_any_threshold_up_to_one() {
        let triple = JointTriple::new(
            Keypoint::new(0.0, -1.0),
            Keypoint::new(0.0, 0.0),
            Keypoint::new(1.0, 0.0),
        );
        let verdict = classify(&triple, &AngleRange::new(80.0, 100.0), 1.0).unwrap();
        assert!((verdict.angle_degrees - 90.0).abs() < 1e-3);
        assert!(verdict.in_range);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let triple = right_angle_triple([1.0, 1.0, 1.0]);

        let at_low = classify(&triple, &AngleRange::new(90.0, 170.0), 0.0).unwrap();
        assert!(at_low.in_range);

        let at_high = classify(&triple, &AngleRange::new(10.0, 90.0), 0.0).unwrap();
        assert!(at_high.in_range);

        let outside = classify(&triple, &AngleRange::new(91.0, 170.0), 0.0).unwrap();
        assert!(!outside.in_range);
    }

    #[test]
    fn classify_is_idempotent() {
        let triple = right_angle_triple([0.8, 0.8, 0.8]);
        let range = AngleRange::new(15.0, 100.0);
        let first = classify(&triple, &range, 0.5);
        let second = classify(&triple, &range, 0.5);
        assert_eq!(first, second);
    }

    #[test]
    fn geometry_is_ignored_when_confidence_fails() {
        // Degenerate geometry plus a low score: still just "no verdict"
        let triple = JointTriple::new(
            Keypoint::with_score(0.0, 0.0, 0.1),
            Keypoint::with_score(0.0, 0.0, 0.1),
            Keypoint::with_score(0.0, 0.0, 0.1),
        );
        assert_eq!(classify(&triple, &AngleRange::new(0.0, 180.0), 0.5), None);
    }
}
