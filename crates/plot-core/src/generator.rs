// File: crates/plot-core/src/generator.rs
// Summary: PlotGenerator: dataset + styling -> rendered PNG -> base64 JSON record.

use log::debug;
use skia_safe as skia;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::figure::{Figure, RenderOptions, Spines, AUTOSCALE_MARGIN};
use crate::record::OutputRecord;
use crate::series::{Series, BLUE};
use crate::types::{FIG_HEIGHT_IN, FIG_WIDTH_IN};

/// Figure styling. The default is the fixed "Simple Plot" look.
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width_in: f32,
    pub height_in: f32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub line_color: skia::Color,
    pub line_width_pt: f32,
    pub spines: Spines,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width_in: FIG_WIDTH_IN,
            height_in: FIG_HEIGHT_IN,
            title: "Simple Plot".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            line_color: BLUE,
            line_width_pt: 2.0,
            spines: Spines::open_frame(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PlotGenerator {
    pub dataset: Dataset,
    pub style: PlotStyle,
    pub render: RenderOptions,
}

impl PlotGenerator {
    pub fn new(dataset: Dataset, style: PlotStyle) -> Self {
        Self { dataset, style, render: RenderOptions::default() }
    }

    /// Build the figure: one line through every point, labelled and autoscaled.
    pub fn figure(&self) -> Figure {
        let mut fig = Figure::new(self.style.width_in, self.style.height_in);
        fig.add_series(
            Series::with_data(self.dataset.points())
                .with_color(self.style.line_color)
                .with_line_width(self.style.line_width_pt),
        );
        fig.set_title(self.style.title.clone());
        fig.x_axis.label = self.style.x_label.clone();
        fig.y_axis.label = self.style.y_label.clone();
        fig.spines = self.style.spines;
        fig.autoscale_axes(AUTOSCALE_MARGIN);
        fig
    }

    pub fn render_png(&self) -> Result<Vec<u8>> {
        self.figure().render_to_png_bytes(&self.render)
    }

    pub fn generate(&self) -> Result<OutputRecord> {
        let png = self.render_png()?;
        debug!("plot rendered, {} PNG bytes for {} points", png.len(), self.dataset.len());
        Ok(OutputRecord::new(&png, self.dataset.clone()))
    }

    pub fn to_json(&self) -> Result<String> {
        self.generate()?.to_json()
    }
}

/// Render the fixed five-point chart and return the JSON record text.
pub fn create_plot() -> Result<String> {
    PlotGenerator::default().to_json()
}
