//! Keypoint types shared by geometry, policy, and the JS bridge

/// A single detected keypoint in image space
///
/// Some models score every keypoint, some score none; a missing score is
/// treated as full confidence everywhere in this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detection confidence, 0-1
    pub score: Option<f32>,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, score: None }
    }

    pub fn with_score(x: f32, y: f32, score: f32) -> Self {
        Self {
            x,
            y,
            score: Some(score),
        }
    }

    /// Effective confidence: the model's score, or 1.0 when it gave none
    pub fn confidence(&self) -> f32 {
        self.score.unwrap_or(1.0)
    }

    /// Whether this keypoint clears the draw threshold (inclusive)
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.confidence() >= threshold
    }
}

/// Three keypoints defining a limb angle, measured at `vertex`
///
/// For an arm this is (shoulder, elbow, wrist). The evaluator never
/// mutates or retains a triple; the caller builds a fresh one per frame
/// from the model's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointTriple {
    pub proximal: Keypoint,
    pub vertex: Keypoint,
    pub distal: Keypoint,
}

impl JointTriple {
    pub fn new(proximal: Keypoint, vertex: Keypoint, distal: Keypoint) -> Self {
        Self {
            proximal,
            vertex,
            distal,
        }
    }
}

/// Whether a bone segment is drawable: both endpoints must clear the
/// threshold.
pub fn segment_visible(a: &Keypoint, b: &Keypoint, threshold: f32) -> bool {
    a.is_visible(threshold) && b.is_visible(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_score_counts_as_full_confidence() {
        let kp = Keypoint::new(10.0, 20.0);
        assert_eq!(kp.confidence(), 1.0);
        assert!(kp.is_visible(1.0));
    }

    #[test]
    fn visibility_threshold_is_inclusive() {
        let kp = Keypoint::with_score(0.0, 0.0, 0.5);
        assert!(kp.is_visible(0.5));
        assert!(!kp.is_visible(0.51));
    }

    #[test]
    fn segment_hidden_when_either_endpoint_is_low() {
        let good = Keypoint::with_score(0.0, 0.0, 0.9);
        let bad = Keypoint::with_score(1.0, 1.0, 0.2);
        assert!(segment_visible(&good, &good, 0.5));
        assert!(!segment_visible(&good, &bad, 0.5));
        assert!(!segment_visible(&bad, &good, 0.5));
    }
}
