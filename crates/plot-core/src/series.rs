// File: crates/plot-core/src/series.rs
// Summary: Line series model: XY points plus stroke color and width.

use skia_safe as skia;

/// Pure blue, the `'b'` shorthand color.
pub const BLUE: skia::Color = skia::Color::from_argb(255, 0, 0, 255);

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    /// Stroke width in points.
    pub line_width_pt: f32,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, color: BLUE, line_width_pt: 1.5 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_width(mut self, pt: f32) -> Self {
        self.line_width_pt = pt.max(0.0);
        self
    }

    /// `(x_min, x_max, y_min, y_max)` over all points, or `None` when empty.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter();
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xa, xb, ya, yb), &(x, y)| {
            (xa.min(x), xb.max(x), ya.min(y), yb.max(y))
        }))
    }
}
