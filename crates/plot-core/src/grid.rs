// File: crates/plot-core/src/grid.rs
// Summary: Tick layout helpers: "nice" tick locator and tick label formatting.

use log::trace;

/// Candidate tick steps, scaled by powers of ten.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Largest number of decimals tick labels are ever formatted with.
const MAX_DECIMALS: usize = 8;

/// Smallest step from `NICE_STEPS x 10^k` that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|&s| s >= norm - 1e-9)
        .unwrap_or(10.0);
    nice * mag
}

/// Tick positions inside `[min, max]` using at most `max_intervals` intervals
/// across the whole range. Returns an empty vec for an empty or non-finite range.
pub fn nice_ticks(min: f64, max: f64, max_intervals: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_intervals == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / max_intervals as f64);
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    let ticks: Vec<f64> = (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect();
    trace!("ticks for [{min}, {max}] step {step}: {ticks:?}");
    ticks
}

/// Format tick values with the fewest decimals that represent every tick exactly,
/// so a 0.5 step renders as `1.0, 1.5, 2.0` and a unit step as `1, 2, 3`.
pub fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let decimals = (0..=MAX_DECIMALS)
        .find(|&d| {
            let scale = 10f64.powi(d as i32);
            ticks
                .iter()
                .all(|&t| ((t * scale).round() / scale - t).abs() <= 1e-9 * t.abs().max(1.0))
        })
        .unwrap_or(MAX_DECIMALS);
    ticks.iter().map(|t| format!("{:.*}", decimals, t)).collect()
}
