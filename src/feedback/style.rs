//! Stroke styles and the pose color palette
//!
//! Styles are plain values handed to the renderer next to each verdict,
//! so the renderer never sequences shared canvas-context color state.
//! Colors are CSS color strings because the consumer is a 2D canvas.

use super::evaluator::AngleVerdict;

/// Line width the renderer uses for skeleton strokes
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Radius of the keypoint dots
pub const DEFAULT_RADIUS: f32 = 4.0;

/// Skeleton color when multi-pose tracking is off or the pose has no id
pub const DEFAULT_SKELETON_COLOR: &str = "Green";

/// One color per tracked pose id, reused modulo the palette size
pub const COLOR_PALETTE: [&str; 20] = [
    "#ffffff", "#800000", "#469990", "#e6194b", "#42d4f4", "#fabed4", "#aaffc3",
    "#9a6324", "#000075", "#f58231", "#4363d8", "#ffd8b1", "#dcbeff", "#808000",
    "#ffe119", "#911eb4", "#bfef45", "#f032e6", "#3cb44b", "#a9a9a9",
];

/// CSS color plus line width for one stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: &'static str, width: f32) -> Self {
        Self { color, width }
    }
}

/// Per-limb styling: one stroke inside the acceptable band, one outside
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimbStyle {
    pub in_range: StrokeStyle,
    pub out_of_range: StrokeStyle,
}

impl LimbStyle {
    pub const fn new(in_range: StrokeStyle, out_of_range: StrokeStyle) -> Self {
        Self {
            in_range,
            out_of_range,
        }
    }

    /// Pick the stroke for a verdict
    pub fn style_for(&self, verdict: &AngleVerdict) -> StrokeStyle {
        if verdict.in_range {
            self.in_range
        } else {
            self.out_of_range
        }
    }
}

impl Default for LimbStyle {
    fn default() -> Self {
        Self::new(
            StrokeStyle::new("Green", DEFAULT_LINE_WIDTH),
            StrokeStyle::new("Red", DEFAULT_LINE_WIDTH),
        )
    }
}

/// Skeleton color for one pose: a palette entry keyed by pose id when
/// tracking is enabled, the default color otherwise.
pub fn pose_color(pose_id: Option<u32>, tracking_enabled: bool) -> &'static str {
    match pose_id {
        Some(id) if tracking_enabled => COLOR_PALETTE[id as usize % COLOR_PALETTE.len()],
        _ => DEFAULT_SKELETON_COLOR,
    }
}
