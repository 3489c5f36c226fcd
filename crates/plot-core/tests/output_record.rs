// File: crates/plot-core/tests/output_record.rs
// Purpose: JSON contract of the generated plot record: keys, data arrays, base64 PNG payload.

use base64::Engine as _;
use image::GenericImageView;
use plot_core::{create_plot, OutputRecord, PlotGenerator};
use serde_json::{json, Value};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn decode_plot(v: &Value) -> Vec<u8> {
    let b64 = v["plot"].as_str().expect("plot is a string");
    assert!(!b64.is_empty(), "plot should be non-empty");
    base64::engine::general_purpose::STANDARD
        .decode(b64)
        .expect("plot is valid base64")
}

#[test]
fn json_has_exactly_plot_and_data() {
    let text = create_plot().expect("create plot");
    let v: Value = serde_json::from_str(&text).expect("valid JSON");
    let obj = v.as_object().expect("top level object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["data", "plot"]);

    let data = v["data"].as_object().expect("data object");
    assert_eq!(data.len(), 2);
}

#[test]
fn data_arrays_are_plain_integers() {
    let text = create_plot().expect("create plot");
    let v: Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(v["data"], json!({ "x": [1, 2, 3, 4, 5], "y": [2, 4, 5, 4, 5] }));
    assert!(text.contains(r#""data":{"x":[1,2,3,4,5],"y":[2,4,5,4,5]}"#), "got: {}", &text[text.len().saturating_sub(80)..]);
}

#[test]
fn plot_is_base64_png() {
    let text = create_plot().expect("create plot");
    let v: Value = serde_json::from_str(&text).expect("valid JSON");
    let bytes = decode_plot(&v);
    assert!(bytes.starts_with(PNG_MAGIC), "should be PNG header");
}

#[test]
fn png_size_fits_tightly_cropped_8x6_figure() {
    let bytes = PlotGenerator::default().render_png().expect("render png");
    let img = image::load_from_memory(&bytes).expect("decode png");
    let (w, h) = img.dimensions();
    assert!(w > 0 && h > 0);
    // 8x6 in at 100 dpi is 800x600 before cropping; the tight box drops the empty margins.
    assert!((400..=800).contains(&w), "width {w}");
    assert!((300..=600).contains(&h), "height {h}");
}

#[test]
fn repeated_calls_are_structurally_identical() {
    let a: Value = serde_json::from_str(&create_plot().expect("first")).expect("json");
    let b: Value = serde_json::from_str(&create_plot().expect("second")).expect("json");
    assert_eq!(a["data"], b["data"]);
    assert!(decode_plot(&a).starts_with(PNG_MAGIC));
    assert!(decode_plot(&b).starts_with(PNG_MAGIC));
}

#[test]
fn record_round_trips_through_serde() {
    let record = PlotGenerator::default().generate().expect("generate");
    let text = record.to_json().expect("to json");
    let back: OutputRecord = serde_json::from_str(&text).expect("parse record");
    assert_eq!(back, record);
    assert_eq!(back.data.x(), &[1, 2, 3, 4, 5]);
    assert_eq!(back.data.y(), &[2, 4, 5, 4, 5]);
}
