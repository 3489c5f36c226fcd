// File: crates/plot-cli/src/main.rs
// Summary: Renders the fixed "Simple Plot" chart and prints its JSON record (base64 PNG + data) to stdout.

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON line.
    pretty_env_logger::formatted_timed_builder()
        .filter_module("plot_core", log::LevelFilter::Warn)
        .filter_module("simple_plot", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let json = plot_core::create_plot().context("failed to generate plot")?;
    info!("generated {} bytes of JSON", json.len());
    println!("{json}");
    Ok(())
}
