// File: crates/scatter-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG of the initial chart.

use scatter_core::{ChartConfig, Dataset, Record, ScatterController, Viewport};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

fn controller() -> ScatterController {
    let ds = Dataset::new(vec![
        Record::new("AL", [42830.0, 21.1, 13.9, 19.3, 33.5, 38.6]),
        Record::new("AK", [71583.0, 19.9, 15.0, 11.2, 29.7, 33.3]),
        Record::new("AZ", [50068.0, 16.5, 14.4, 18.2, 28.9, 36.9]),
    ]);
    ScatterController::new(ds, ChartConfig::default())
}

#[test]
fn render_smoke_png() {
    let mut ctl = controller();
    let scene = ctl.initial_render(Viewport::new(800.0, 600.0)).clone();

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/scatter_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    renderer.render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = renderer.render_to_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn tooltip_scene_renders() {
    let mut ctl = controller();
    ctl.initial_render(Viewport::new(800.0, 600.0));
    let center = ctl.scene().map(|s| s.markers[1].center()).expect("marker");
    assert!(ctl.pointer_moved(center));

    let scene = ctl.scene().expect("rendered");
    let bytes = SkiaRenderer::new()
        .render_to_png_bytes(scene, &RenderOptions::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
