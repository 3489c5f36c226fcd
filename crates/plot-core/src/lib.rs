// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the figure model, renderer and JSON plot generator.

pub mod axis;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod record;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use dataset::Dataset;
pub use error::PlotError;
pub use figure::{BBox, Figure, RenderOptions, Spines};
pub use generator::{create_plot, PlotGenerator, PlotStyle};
pub use record::OutputRecord;
pub use series::Series;
pub use surface::open_surfaces;
pub use text::TextShaper;
pub use theme::Theme;
