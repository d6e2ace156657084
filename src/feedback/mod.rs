//! Feedback module - joint-angle geometry and classification policy
//!
//! Re-exports only. All logic in submodules. No wasm types in here, so
//! the whole module runs under native `cargo test`.

mod angle;
mod evaluator;
mod keypoint;
mod style;

pub use angle::joint_angle;
pub use evaluator::{classify, AngleRange, AngleVerdict};
pub use keypoint::{segment_visible, JointTriple, Keypoint};
pub use style::{
    pose_color, LimbStyle, StrokeStyle, COLOR_PALETTE, DEFAULT_LINE_WIDTH, DEFAULT_RADIUS,
    DEFAULT_SKELETON_COLOR,
};
