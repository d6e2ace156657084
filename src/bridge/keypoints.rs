//! Keypoint storage and JS bridge
//!
//! Receives COCO-format keypoints from the JavaScript pose model each
//! frame and stores them for the feedback and visibility queries to read.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::feedback::{
    pose_color, segment_visible, Keypoint, DEFAULT_LINE_WIDTH, DEFAULT_RADIUS,
};

// ============================================================================
// KEYPOINT INDICES (COCO - 17 total)
// ============================================================================

pub const KEYPOINT_COUNT: usize = 17;

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

/// Skeleton connections (pairs of keypoint indices) the renderer draws
pub const SKELETON_PAIRS: [(usize, usize); 16] = [
    (NOSE, LEFT_EYE),
    (NOSE, RIGHT_EYE),
    (LEFT_EYE, LEFT_EAR),
    (RIGHT_EYE, RIGHT_EAR),
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
];

/// Which side of the body a COCO keypoint belongs to
///
/// COCO interleaves sides: the nose is index 0, left-side keypoints are
/// odd, right-side even.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypointSide {
    Middle,
    Left,
    Right,
}

impl KeypointSide {
    /// Fill color the renderer uses for this side's keypoint dots
    pub fn fill_color(&self) -> &'static str {
        match self {
            KeypointSide::Middle => "White",
            KeypointSide::Left => "Green",
            KeypointSide::Right => "Red",
        }
    }
}

pub fn side_of(index: usize) -> KeypointSide {
    match index {
        0 => KeypointSide::Middle,
        i if i % 2 == 1 => KeypointSide::Left,
        _ => KeypointSide::Right,
    }
}

// ============================================================================
// KEYPOINT STORAGE
// ============================================================================

/// Current frame's keypoints plus the draw/classify confidence threshold
struct KeypointStore {
    keypoints: [Keypoint; KEYPOINT_COUNT],
    has_data: bool,
    score_threshold: f32,
}

impl Default for KeypointStore {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); KEYPOINT_COUNT],
            has_data: false,
            score_threshold: 0.0,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static KEYPOINTS: RefCell<KeypointStore> = RefCell::new(KeypointStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 51 values
/// (17 keypoints x 3: x, y, score). A non-finite score marks a keypoint
/// the model did not score.
#[wasm_bindgen]
pub fn update_keypoints(data: &[f32]) {
    if data.len() != KEYPOINT_COUNT * 3 {
        web_sys::console::warn_1(
            &format!(
                "Invalid keypoint data length: {} (expected {})",
                data.len(),
                KEYPOINT_COUNT * 3
            )
            .into(),
        );
        return;
    }

    KEYPOINTS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();

        for i in 0..KEYPOINT_COUNT {
            let score = data[i * 3 + 2];
            store.keypoints[i] = Keypoint {
                x: data[i * 3],
                y: data[i * 3 + 1],
                score: score.is_finite().then_some(score),
            };
        }
        store.has_data = true;
    });
}

/// Minimum confidence for a keypoint to be drawn or classified
#[wasm_bindgen]
pub fn set_score_threshold(threshold: f32) {
    KEYPOINTS.with(|store_cell| {
        store_cell.borrow_mut().score_threshold = threshold;
    });
}

/// Indices of this frame's keypoints that clear the score threshold
#[wasm_bindgen]
pub fn visible_keypoints() -> Vec<u32> {
    KEYPOINTS.with(|store_cell| {
        let store = store_cell.borrow();
        if !store.has_data {
            return Vec::new();
        }
        (0..KEYPOINT_COUNT)
            .filter(|&i| store.keypoints[i].is_visible(store.score_threshold))
            .map(|i| i as u32)
            .collect()
    })
}

/// Drawable skeleton segments this frame, as flat index pairs
/// [i0, j0, i1, j1, ...]. A segment is drawable when both endpoints
/// clear the score threshold.
#[wasm_bindgen]
pub fn visible_segments() -> Vec<u32> {
    KEYPOINTS.with(|store_cell| {
        let store = store_cell.borrow();
        if !store.has_data {
            return Vec::new();
        }
        let mut pairs = Vec::new();
        for (i, j) in SKELETON_PAIRS.iter() {
            let visible = segment_visible(
                &store.keypoints[*i],
                &store.keypoints[*j],
                store.score_threshold,
            );
            if visible {
                pairs.push(*i as u32);
                pairs.push(*j as u32);
            }
        }
        pairs
    })
}

/// Dot fill color for one keypoint index (by body side)
#[wasm_bindgen]
pub fn keypoint_fill_color(index: usize) -> String {
    side_of(index).fill_color().to_string()
}

/// Skeleton stroke color for one pose. With tracking enabled each pose id
/// maps to a palette entry; otherwise every pose uses the default color.
#[wasm_bindgen]
pub fn skeleton_color(tracking_enabled: bool, pose_id: Option<u32>) -> String {
    pose_color(pose_id, tracking_enabled).to_string()
}

/// Line width the renderer should use for skeleton strokes
#[wasm_bindgen]
pub fn default_line_width() -> f32 {
    DEFAULT_LINE_WIDTH
}

/// Radius the renderer should use for keypoint dots
#[wasm_bindgen]
pub fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Get all current keypoints (for the feedback bridge)
pub fn get_all_keypoints() -> Option<[Keypoint; KEYPOINT_COUNT]> {
    KEYPOINTS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.keypoints)
        } else {
            None
        }
    })
}

/// Current score threshold
pub fn score_threshold() -> f32 {
    KEYPOINTS.with(|store_cell| store_cell.borrow().score_threshold)
}
