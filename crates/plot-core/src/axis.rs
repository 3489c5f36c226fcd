// File: crates/plot-core/src/axis.rs
// Summary: Axis model with label, view range and data-to-pixel mapping.

use crate::grid::nice_ticks;

/// Upper bound on tick intervals across an axis.
pub const MAX_TICK_INTERVALS: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Fit the view range to `[lo, hi]` widened by `margin` (fraction of the span) on each side.
    /// A degenerate span is widened to one unit around `lo`.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        let (mut lo, mut hi) = (lo.min(hi), lo.max(hi));
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let pad = (hi - lo) * margin;
        self.min = lo - pad;
        self.max = hi + pad;
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, MAX_TICK_INTERVALS)
    }

    /// Map a data value onto `[start_px, end_px]`. `end_px` may be smaller than
    /// `start_px` (vertical axes grow upwards on a y-down canvas).
    #[inline]
    pub fn to_px(&self, v: f64, start_px: f32, end_px: f32) -> f32 {
        start_px + ((v - self.min) / self.span()) as f32 * (end_px - start_px)
    }
}
