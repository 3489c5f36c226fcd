// File: crates/plot-core/src/dataset.rs
// Summary: The plotted XY dataset; integer valued so it serializes as plain JSON numbers.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// X values of the fixed dataset.
pub const DEFAULT_X: [i64; 5] = [1, 2, 3, 4, 5];
/// Y values of the fixed dataset.
pub const DEFAULT_Y: [i64; 5] = [2, 4, 5, 4, 5];

/// Two equal-length ordered sequences with at least two points.
/// Deserialization goes through [`Dataset::new`], so the same checks apply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    x: Vec<i64>,
    y: Vec<i64>,
}

#[derive(Deserialize)]
struct RawDataset {
    x: Vec<i64>,
    y: Vec<i64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = PlotError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.x, raw.y)
    }
}

impl Dataset {
    pub fn new(x: Vec<i64>, y: Vec<i64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PlotError::InvalidDataset(format!(
                "x has {} values but y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(PlotError::InvalidDataset(format!(
                "need at least 2 points, got {}",
                x.len()
            )));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[i64] { &self.x }
    pub fn y(&self) -> &[i64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Points as `(x, y)` pairs for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| (x as f64, y as f64)).collect()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self { x: DEFAULT_X.to_vec(), y: DEFAULT_Y.to_vec() }
    }
}
