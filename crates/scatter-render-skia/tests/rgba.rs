// File: crates/scatter-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and a few pixels.

use scatter_core::{ChartConfig, Dataset, Record, Rgba, ScatterController, Theme, Viewport};
use scatter_render_skia::{RenderOptions, SkiaRenderer};

fn scene() -> scatter_core::Scene {
    // Shrink padding puts the maximum outside the plot; the first two land inside.
    let ds = Dataset::new(vec![
        Record::new("AA", [100.0, 100.0, 1.0, 1.0, 1.0, 1.0]),
        Record::new("BB", [200.0, 200.0, 2.0, 2.0, 2.0, 2.0]),
        Record::new("CC", [1000.0, 1000.0, 3.0, 3.0, 3.0, 3.0]),
    ]);
    let mut ctl = ScatterController::new(ds, ChartConfig::default());
    ctl.initial_render(Viewport::new(500.0, 400.0)).clone()
}

#[test]
fn render_rgba8_buffer() {
    let scene = scene();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&scene, &opts).expect("rgba render");
    assert_eq!((w, h), (400, 320));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left is background
    let bg = Theme::light().background;
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn marker_centres_carry_marker_fill() {
    let scene = scene();
    let theme = Theme::light();
    let opts = RenderOptions { draw_labels: false, theme };
    let (px, _w, _h, stride) = SkiaRenderer::new().render_to_rgba8(&scene, &opts).expect("rgba render");

    let Rgba { r, g, b, .. } = theme.marker_fill;
    let inside: Vec<_> = scene.markers.iter().filter(|m| scene.layout.plot.contains(m.center())).collect();
    assert_eq!(inside.len(), 2);
    for m in inside {
        let (x, y) = (m.cx.round() as usize, m.cy.round() as usize);
        let i = y * stride + x * 4;
        assert_eq!(&px[i..i + 3], &[r, g, b], "marker {} centre", m.abbr);
    }
}
