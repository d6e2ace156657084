//! Pose Feedback Web - joint-angle feedback for live pose estimation
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen re-exports that delegate to submodules
//!
//! The pose model and the canvas renderer both live in JavaScript; this
//! module receives keypoints each frame and hands back angle verdicts,
//! stroke colors, and visibility data for the renderer to apply.

mod bridge;
pub mod feedback;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    update_keypoints,
    set_score_threshold,
    set_arm_range,
    evaluate_arms,
    arm_angle_text,
    arm_stroke_color,
    visible_keypoints,
    visible_segments,
    keypoint_fill_color,
    skeleton_color,
    default_line_width,
    default_radius,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
