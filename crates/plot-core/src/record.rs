// File: crates/plot-core/src/record.rs
// Summary: JSON output record: base64 PNG plus the raw data arrays.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;

/// `{"plot": "<base64 PNG>", "data": {"x": [...], "y": [...]}}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub plot: String,
    pub data: Dataset,
}

impl OutputRecord {
    pub fn new(png: &[u8], data: Dataset) -> Self {
        Self { plot: encode_base64(png), data }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Standard alphabet, padded.
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
