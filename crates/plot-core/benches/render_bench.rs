// File: crates/plot-core/benches/render_bench.rs
// Summary: Criterion bench for the full generate path and for PNG rendering alone.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{create_plot, PlotGenerator, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_plot");

    group.bench_function("create_plot_json", |b| {
        b.iter(|| black_box(create_plot().expect("create plot")));
    });

    let fig = PlotGenerator::default().figure();
    for (name, draw_labels) in [("png_with_labels", true), ("png_no_labels", false)] {
        let opts = RenderOptions { draw_labels, ..RenderOptions::default() };
        group.bench_function(name, |b| {
            b.iter(|| black_box(fig.render_to_png_bytes(&opts).expect("render bytes")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
