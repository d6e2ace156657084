//! Limb feedback integration - per-arm ranges and frame evaluation
//!
//! Holds the acceptable band configured from JS for each arm, reads the
//! current frame's keypoints, and exports verdicts, stroke colors, and
//! the angle readout text for the renderer.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::keypoints::{
    self, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::feedback::{classify, AngleRange, AngleVerdict, JointTriple, Keypoint, LimbStyle};

/// Default acceptable elbow band, degrees
const DEFAULT_ARM_RANGE: AngleRange = AngleRange {
    low: 15.0,
    high: 100.0,
};

/// Per-arm configuration; both arms share one membership rule and one
/// color vocabulary, differing only in their configured band.
struct ArmConfig {
    range: AngleRange,
    style: LimbStyle,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_ARM_RANGE,
            style: LimbStyle::default(),
        }
    }
}

struct FeedbackState {
    left_arm: ArmConfig,
    right_arm: ArmConfig,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self {
            left_arm: ArmConfig::default(),
            right_arm: ArmConfig::default(),
        }
    }
}

thread_local! {
    static FEEDBACK: RefCell<FeedbackState> = RefCell::new(FeedbackState::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Configure the acceptable band for one arm (inclusive degree bounds)
#[wasm_bindgen]
pub fn set_arm_range(right_arm: bool, low: f32, high: f32) {
    if low > high {
        web_sys::console::warn_1(&format!("Ignoring inverted arm range: {low}..{high}").into());
        return;
    }
    FEEDBACK.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let arm = if right_arm {
            &mut state.right_arm
        } else {
            &mut state.left_arm
        };
        arm.range = AngleRange::new(low, high);
    });
}

/// Evaluate both arms against the current frame
///
/// Returns flat [valid, angle, in_range] per arm, left then right.
/// `valid` is 0.0 when that arm has no verdict this frame (no keypoint
/// data yet, or a keypoint below the score threshold); the other two
/// slots are zero then and must be ignored.
#[wasm_bindgen]
pub fn evaluate_arms() -> Vec<f32> {
    let mut out = Vec::with_capacity(6);
    for right_arm in [false, true] {
        match evaluate_arm(right_arm) {
            Some(verdict) => out.extend([
                1.0,
                verdict.angle_degrees,
                if verdict.in_range { 1.0 } else { 0.0 },
            ]),
            None => out.extend([0.0; 3]),
        }
    }
    out
}

/// Stroke color for one arm's skeleton lines this frame, or `None` when
/// the arm has no verdict and should keep the plain skeleton color.
#[wasm_bindgen]
pub fn arm_stroke_color(right_arm: bool) -> Option<String> {
    let verdict = evaluate_arm(right_arm)?;
    FEEDBACK.with(|state_cell| {
        let state = state_cell.borrow();
        let arm = if right_arm {
            &state.right_arm
        } else {
            &state.left_arm
        };
        Some(arm.style.style_for(&verdict).color.to_string())
    })
}

/// Formatted angle readout for one arm, e.g. "Angle left arm: 43.75
/// degrees", or `None` when the arm has no verdict this frame.
#[wasm_bindgen]
pub fn arm_angle_text(right_arm: bool) -> Option<String> {
    let verdict = evaluate_arm(right_arm)?;
    let side = if right_arm { "right" } else { "left" };
    Some(format!(
        "Angle {side} arm: {:.2} degrees",
        verdict.angle_degrees
    ))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn arm_triple(frame: &[Keypoint; keypoints::KEYPOINT_COUNT], right_arm: bool) -> JointTriple {
    let (shoulder, elbow, wrist) = if right_arm {
        (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)
    } else {
        (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)
    };
    JointTriple::new(frame[shoulder], frame[elbow], frame[wrist])
}

fn evaluate_arm(right_arm: bool) -> Option<AngleVerdict> {
    let frame = keypoints::get_all_keypoints()?;
    let threshold = keypoints::score_threshold();
    FEEDBACK.with(|state_cell| {
        let state = state_cell.borrow();
        let arm = if right_arm {
            &state.right_arm
        } else {
            &state.left_arm
        };
        classify(&arm_triple(&frame, right_arm), &arm.range, threshold)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::keypoints::{update_keypoints, KEYPOINT_COUNT};

    /// Frame with both elbows at right angles: shoulder above the elbow,
    /// wrist out to the side.
    fn right_angle_frame(score: f32) -> Vec<f32> {
        let mut data = vec![0.0; KEYPOINT_COUNT * 3];
        for i in 0..KEYPOINT_COUNT {
            data[i * 3 + 2] = score;
        }
        for (shoulder, elbow, wrist, x0) in [
            (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, 100.0_f32),
            (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, 200.0),
        ] {
            data[shoulder * 3] = x0;
            data[shoulder * 3 + 1] = 50.0;
            data[elbow * 3] = x0;
            data[elbow * 3 + 1] = 80.0;
            data[wrist * 3] = x0 + 30.0;
            data[wrist * 3 + 1] = 80.0;
        }
        data
    }

    #[test]
    fn both_arms_get_verdicts() {
        update_keypoints(&right_angle_frame(0.9));
        let out = evaluate_arms();
        assert_eq!(out.len(), 6);
        // left: valid, ~90 degrees, inside the default 15..100 band
        assert_eq!(out[0], 1.0);
        assert!((out[1] - 90.0).abs() < 1e-3);
        assert_eq!(out[2], 1.0);
        // right arm mirrors it
        assert_eq!(out[3], 1.0);
        assert!((out[4] - 90.0).abs() < 1e-3);
        assert_eq!(out[5], 1.0);
    }

    #[test]
    fn low_scores_suppress_verdicts() {
        update_keypoints(&right_angle_frame(0.3));
        keypoints::set_score_threshold(0.5);
        assert_eq!(evaluate_arms(), vec![0.0; 6]);
        assert_eq!(arm_angle_text(false), None);
        assert_eq!(arm_stroke_color(true), None);
    }

    #[test]
    fn per_arm_ranges_are_independent() {
        update_keypoints(&right_angle_frame(0.9));
        set_arm_range(false, 85.0, 95.0);
        set_arm_range(true, 120.0, 180.0);
        let out = evaluate_arms();
        assert_eq!(out[2], 1.0, "left arm should be in range");
        assert_eq!(out[5], 0.0, "right arm should be out of range");
        assert_eq!(arm_stroke_color(false).as_deref(), Some("Green"));
        assert_eq!(arm_stroke_color(true).as_deref(), Some("Red"));
    }

    #[test]
    fn angle_text_has_two_decimals() {
        update_keypoints(&right_angle_frame(0.9));
        let text = arm_angle_text(false).unwrap();
        assert_eq!(text, "Angle left arm: 90.00 degrees");
    }
}
