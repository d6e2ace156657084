//! Joint angle calculation from three keypoints
//!
//! Measures the interior angle at the middle keypoint from the atan2
//! difference of the two rays, folded into [0, 180] so the result does
//! not depend on the winding order of the triple.

use nalgebra::Vector2;

use super::keypoint::Keypoint;

fn ray(from: &Keypoint, to: &Keypoint) -> Vector2<f32> {
    Vector2::new(to.x - from.x, to.y - from.y)
}

/// Interior angle at `vertex` in degrees, always in [0, 180]
///
/// Keypoint ordering from the model is not consistent across poses or
/// mirrored frames, so the raw atan2 difference is normalized into
/// [0, 360) and anything past 180 folded back, making the measure
/// insensitive to winding. A zero-length ray (keypoint coincident with
/// the vertex) contributes atan2(0, 0) = 0: the result is defined but
/// not physically meaningful.
pub fn joint_angle(proximal: &Keypoint, vertex: &Keypoint, distal: &Keypoint) -> f32 {
    let toward_proximal = ray(vertex, proximal);
    let toward_distal = ray(vertex, distal);

    let radians =
        toward_distal.y.atan2(toward_distal.x) - toward_proximal.y.atan2(toward_proximal.x);
    let mut degrees = (radians.to_degrees() + 360.0) % 360.0;

    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }

    degrees
}
