// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, subplot placement, unit conversion).

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f32 = 8.0;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f32 = 6.0;
/// Default output resolution.
pub const DPI: f32 = 100.0;
/// Padding kept around content when cropping to the tight bounding box.
pub const PAD_INCHES: f32 = 0.1;

/// Convert typographic points (1/72 inch) to pixels at `dpi`.
#[inline]
pub fn points_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Canvas size in whole pixels for a figure of `width_in` x `height_in` inches.
pub fn canvas_px(width_in: f32, height_in: f32, dpi: f32) -> (i32, i32) {
    (
        (width_in * dpi).round().max(1.0) as i32,
        (height_in * dpi).round().max(1.0) as i32,
    )
}

/// Placement of the axes inside the figure, as fractions of the canvas.
/// Contract: `left < right` and `bottom < top`, all within `[0, 1]`.
/// Fractions are measured from the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl SubplotParams {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self::new(0.125, 0.9, 0.11, 0.88)
    }
}
