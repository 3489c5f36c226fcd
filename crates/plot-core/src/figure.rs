// File: crates/plot-core/src/figure.rs
// Summary: Figure struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use log::debug;
use skia_safe as skia;

use crate::axis::Axis;
use crate::error::{PlotError, Result};
use crate::geometry::{RectF, RectI32};
use crate::grid::format_ticks;
use crate::series::Series;
use crate::surface::RasterSurface;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{canvas_px, points_to_px, SubplotParams, DPI, FIG_HEIGHT_IN, FIG_WIDTH_IN, PAD_INCHES};

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

// Sizes in points.
const SPINE_WIDTH_PT: f32 = 0.8;
const TICK_LENGTH_PT: f32 = 3.5;
const TICK_WIDTH_PT: f32 = 0.8;
const TICK_PAD_PT: f32 = 3.5;
const TICK_LABEL_SIZE_PT: f32 = 10.0;
const LABEL_SIZE_PT: f32 = 10.0;
const LABEL_PAD_PT: f32 = 4.0;
const TITLE_SIZE_PT: f32 = 12.0;
const TITLE_PAD_PT: f32 = 6.0;

/// How much of the canvas ends up in the output image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BBox {
    /// Whole canvas.
    Full,
    /// Drawn content plus `pad_inches` on every side.
    Tight,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub dpi: f32,
    pub bbox: BBox,
    pub pad_inches: f32,
    /// Skip every text element (title, labels, tick labels).
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DPI,
            bbox: BBox::Tight,
            pad_inches: PAD_INCHES,
            draw_labels: true,
            theme: Theme::classic(),
        }
    }
}

/// Visibility of the four borders of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Spines {
    /// Only the bottom and left spines remain.
    pub const fn open_frame() -> Self {
        Self { top: false, right: false, bottom: true, left: true }
    }
}

impl Default for Spines {
    fn default() -> Self {
        Self { top: true, right: true, bottom: true, left: true }
    }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub subplot: SubplotParams,
    pub title: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub spines: Spines,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            width_in,
            height_in,
            subplot: SubplotParams::default(),
            title: None,
            x_axis: Axis::new("", 0.0, 1.0),
            y_axis: Axis::new("", 0.0, 1.0),
            spines: Spines::default(),
            series: Vec::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the union of all series, widened by `margin`.
    /// Leaves the axes untouched when there is no data.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let ext = self
            .series
            .iter()
            .filter_map(Series::extents)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        if let Some((x_min, x_max, y_min, y_max)) = ext {
            self.x_axis.fit(x_min, x_max, margin);
            self.y_axis.fit(y_min, y_max, margin);
        }
    }

    /// Canvas size in pixels before any cropping.
    pub fn canvas_size(&self, dpi: f32) -> (i32, i32) {
        canvas_px(self.width_in, self.height_in, dpi)
    }

    /// Render into an in-memory PNG. The raster surface is released before returning.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (mut surface, crop) = self.rasterize(opts)?;
        let image = surface
            .image_snapshot_with_bounds(crop.to_skia())
            .ok_or(PlotError::Snapshot)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(PlotError::Encode)?;
        debug!("encoded {}x{} PNG ({} bytes)", crop.width(), crop.height(), data.as_bytes().len());
        Ok(data.as_bytes().to_vec())
    }

    /// Render and read back unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (mut surface, crop) = self.rasterize(opts)?;
        let (w, h) = (crop.width(), crop.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (crop.left, crop.top)) {
            return Err(PlotError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    /// Draw everything onto a fresh surface; returns it with the region to keep.
    fn rasterize(&self, opts: &RenderOptions) -> Result<(RasterSurface, RectI32)> {
        let (width, height) = self.canvas_size(opts.dpi);
        debug!("canvas {}x{} px ({}x{} in at {} dpi)", width, height, self.width_in, self.height_in, opts.dpi);
        let mut surface = RasterSurface::new(width, height)?;
        let frame = RectF::from_subplot(&self.subplot, width, height);
        let theme = &opts.theme;

        let canvas = surface.canvas();
        canvas.clear(theme.background);

        for s in &self.series {
            draw_line_series(canvas, &frame, &self.x_axis, &self.y_axis, s, opts.dpi);
        }
        draw_spines(canvas, &frame, &self.spines, theme.spine, points_to_px(SPINE_WIDTH_PT, opts.dpi));

        let x_ticks = self.x_axis.ticks();
        let y_ticks = self.y_axis.ticks();
        let tick_len = points_to_px(TICK_LENGTH_PT, opts.dpi);
        draw_ticks(canvas, &frame, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme.tick, tick_len, opts.dpi);

        let mut content = frame;
        if !x_ticks.is_empty() { content.bottom += tick_len; }
        if !y_ticks.is_empty() { content.left -= tick_len; }
        if opts.draw_labels {
            let shaper = TextShaper::new();
            let labels = draw_labels(canvas, &shaper, self, &frame, &x_ticks, &y_ticks, theme, opts.dpi);
            content = content.union(&labels);
        }

        let crop = match opts.bbox {
            BBox::Full => RectI32::from_wh(width, height),
            BBox::Tight => content
                .outset(opts.pad_inches * opts.dpi)
                .round_out_clamped(width, height),
        };
        debug!("output region {:?}", crop);
        Ok((surface, crop))
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(FIG_WIDTH_IN, FIG_HEIGHT_IN)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_line_series(
    canvas: &skia::Canvas,
    frame: &RectF,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    dpi: f32,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let sx = |x: f64| x_axis.to_px(x, frame.left, frame.right);
    let sy = |y: f64| y_axis.to_px(y, frame.bottom, frame.top);

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx(x0), sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(points_to_px(series.line_width_pt, dpi));
    stroke.set_stroke_cap(skia::paint::Cap::Square);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(series.color);

    canvas.save();
    canvas.clip_rect(frame.to_skia(), skia::ClipOp::Intersect, true);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

fn draw_spines(canvas: &skia::Canvas, frame: &RectF, spines: &Spines, color: skia::Color, width: f32) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Square);

    let (l, t, r, b) = (frame.left, frame.top, frame.right, frame.bottom);
    if spines.top { canvas.draw_line((l, t), (r, t), &paint); }
    if spines.right { canvas.draw_line((r, t), (r, b), &paint); }
    if spines.bottom { canvas.draw_line((l, b), (r, b), &paint); }
    if spines.left { canvas.draw_line((l, t), (l, b), &paint); }
}

#[allow(clippy::too_many_arguments)]
fn draw_ticks(
    canvas: &skia::Canvas,
    frame: &RectF,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
    tick_len: f32,
    dpi: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(points_to_px(TICK_WIDTH_PT, dpi));

    for &t in x_ticks {
        let x = x_axis.to_px(t, frame.left, frame.right);
        canvas.draw_line((x, frame.bottom), (x, frame.bottom + tick_len), &paint);
    }
    for &t in y_ticks {
        let y = y_axis.to_px(t, frame.bottom, frame.top);
        canvas.draw_line((frame.left - tick_len, y), (frame.left, y), &paint);
    }
}

/// Tick labels, axis labels and title. Returns the box covering all drawn text.
#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    fig: &Figure,
    frame: &RectF,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
    dpi: f32,
) -> RectF {
    let px = |pt: f32| points_to_px(pt, dpi);
    let mut covered = *frame;

    let tick_size = px(TICK_LABEL_SIZE_PT);
    let offset = px(TICK_LENGTH_PT) + px(TICK_PAD_PT);

    let mut below_ticks = frame.bottom + offset;
    for (&t, text) in x_ticks.iter().zip(format_ticks(x_ticks)) {
        let x = fig.x_axis.to_px(t, frame.left, frame.right);
        let (w, _) = shaper.measure(&text, tick_size);
        let r = shaper.draw_top_left(canvas, &text, x - w * 0.5, frame.bottom + offset, tick_size, theme.tick_label);
        below_ticks = below_ticks.max(r.bottom);
        covered = covered.union(&r);
    }

    let mut left_of_ticks = frame.left - offset;
    for (&t, text) in y_ticks.iter().zip(format_ticks(y_ticks)) {
        let y = fig.y_axis.to_px(t, frame.bottom, frame.top);
        let (w, h) = shaper.measure(&text, tick_size);
        let r = shaper.draw_top_left(canvas, &text, frame.left - offset - w, y - h * 0.5, tick_size, theme.tick_label);
        left_of_ticks = left_of_ticks.min(r.left);
        covered = covered.union(&r);
    }

    let label_size = px(LABEL_SIZE_PT);
    let label_pad = px(LABEL_PAD_PT);
    if !fig.x_axis.label.is_empty() {
        let label = &fig.x_axis.label;
        let (w, _) = shaper.measure(label, label_size);
        let r = shaper.draw_top_left(canvas, label, frame.center_x() - w * 0.5, below_ticks + label_pad, label_size, theme.axis_label);
        covered = covered.union(&r);
    }
    if !fig.y_axis.label.is_empty() {
        let label = &fig.y_axis.label;
        let (_, h) = shaper.measure(label, label_size);
        let cx = left_of_ticks - label_pad - h * 0.5;
        let r = shaper.draw_rotated_ccw(canvas, label, cx, frame.center_y(), label_size, theme.axis_label);
        covered = covered.union(&r);
    }

    if let Some(title) = fig.title.as_deref() {
        let size = px(TITLE_SIZE_PT);
        let (w, h) = shaper.measure(title, size);
        let top = frame.top - px(TITLE_PAD_PT) - h;
        let r = shaper.draw_top_left(canvas, title, frame.center_x() - w * 0.5, top, size, theme.title);
        covered = covered.union(&r);
    }

    covered
}
