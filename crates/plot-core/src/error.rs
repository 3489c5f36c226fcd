// File: crates/plot-core/src/error.rs
// Summary: Error type shared by dataset validation, rendering and record serialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("failed to snapshot rendered surface")]
    Snapshot,

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read back RGBA pixels")]
    ReadPixels,

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("serialize plot record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
