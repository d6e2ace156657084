//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod keypoints;
mod limb_feedback;

pub use keypoints::{
    default_line_width, default_radius, keypoint_fill_color, set_score_threshold, skeleton_color,
    update_keypoints, visible_keypoints, visible_segments,
};

pub use limb_feedback::{arm_angle_text, arm_stroke_color, evaluate_arms, set_arm_range};
