// File: crates/plot-core/src/theme.rs
// Summary: Colors used for figure background, spines, ticks and text.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    /// White figure with black frame and text.
    pub fn classic() -> Self {
        Self {
            background: skia::Color::WHITE,
            spine: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            title: skia::Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}
