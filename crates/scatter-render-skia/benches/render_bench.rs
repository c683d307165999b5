use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{ChartConfig, Dataset, Record, ScatterController, Viewport};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

fn build_scene(n: usize) -> scatter_core::Scene {
    let records = (0..n)
        .map(|i| {
            let t = i as f64;
            Record::new(
                format!("S{i}"),
                [
                    45_000.0 + (t * 0.31).sin() * 12_000.0,
                    19.0 + (t * 0.17).cos() * 5.0,
                    11.0 + (t * 0.07).sin() * 3.0,
                    14.0 + (t * 0.29).cos() * 4.0,
                    31.0 + (t * 0.05).sin() * 5.0,
                    38.0 + (t * 0.11).cos() * 3.0,
                ],
            )
        })
        .collect();
    let mut ctl = ScatterController::new(Dataset::new(records), ChartConfig::default());
    ctl.initial_render(Viewport::new(1000.0, 625.0)).clone()
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new();
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[51usize, 2_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let scene = build_scene(n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&scene, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
