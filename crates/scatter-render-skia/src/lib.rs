// File: crates/scatter-render-skia/src/lib.rs
// Summary: Headless scene rasterisation using Skia CPU surfaces (PNG file, PNG bytes, RGBA8 buffer).

pub mod error;
pub mod text;

use std::path::Path;

use scatter_core::axis::{Axis, AxisView};
use scatter_core::{Rgba, Scene, Theme};
use skia_safe as skia;
use tracing::debug;

pub use error::RenderError;
pub use text::TextShaper;

const TICK_SIZE: f32 = 6.0;
const TICK_FONT_SIZE: f32 = 10.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw tick labels, marker abbreviations, axis labels and tooltip text.
    /// Tests turn this off to avoid font variance across platforms.
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, theme: Theme::default() }
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(scene, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.rasterize(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.rasterize(scene, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    fn rasterize(&self, scene: &Scene, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let (width, height) = surface_size(scene);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        self.draw(surface.canvas(), scene, opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(color(theme.background));

        self.draw_axis(canvas, scene, &scene.x_axis, opts);
        self.draw_axis(canvas, scene, &scene.y_axis, opts);
        self.draw_markers(canvas, scene, opts);
        if opts.draw_labels {
            self.draw_axis_labels(canvas, scene, theme);
            self.draw_tooltip(canvas, scene, theme);
        }
    }

    fn draw_axis(&self, canvas: &skia::Canvas, scene: &Scene, view: &AxisView, opts: &RenderOptions) {
        let plot = scene.layout.plot;
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        let mut paint = skia::Paint::default();
        paint.set_color(color(opts.theme.axis_line));
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        let tick_color = color(opts.theme.tick_label);
        match view.axis {
            Axis::X => {
                canvas.draw_line((l, b), (r, b), &paint);
                for tick in view.ticks.iter().filter(|tk| tk.pos.is_finite()) {
                    let x = tick.pos as f32;
                    canvas.draw_line((x, b), (x, b + TICK_SIZE), &paint);
                    if opts.draw_labels {
                        let y = b + TICK_SIZE + TICK_FONT_SIZE + 3.0;
                        self.shaper.draw_centered(canvas, &tick.label, x, y, TICK_FONT_SIZE, tick_color, false);
                    }
                }
            }
            Axis::Y => {
                canvas.draw_line((l, t), (l, b), &paint);
                for tick in view.ticks.iter().filter(|tk| tk.pos.is_finite()) {
                    let y = tick.pos as f32;
                    canvas.draw_line((l - TICK_SIZE, y), (l, y), &paint);
                    if opts.draw_labels {
                        let baseline = y + TICK_FONT_SIZE * 0.35;
                        self.shaper.draw_right(canvas, &tick.label, l - TICK_SIZE - 3.0, baseline, TICK_FONT_SIZE, tick_color);
                    }
                }
            }
        }
    }

    fn draw_markers(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(opts.theme.marker_fill));

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(color(opts.theme.marker_stroke));

        let visible = || scene.markers.iter().filter(|m| m.is_finite());
        for m in visible() {
            let c = (m.cx as f32, m.cy as f32);
            canvas.draw_circle(c, m.radius as f32, &fill);
            canvas.draw_circle(c, m.radius as f32, &stroke);
        }

        if opts.draw_labels {
            let size = scene.marker_font_size as f32;
            let text_color = color(opts.theme.marker_text);
            for m in visible() {
                let baseline = m.cy as f32 + size * 0.35;
                self.shaper.draw_centered(canvas, &m.abbr, m.cx as f32, baseline, size, text_color, true);
            }
        }
    }

    fn draw_axis_labels(&self, canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
        for label in &scene.labels {
            let c = color(theme.label_color(label.active));
            let size = label.font_size as f32;
            let (x, y) = (label.anchor.x as f32, label.anchor.y as f32);
            if label.rotated {
                canvas.save();
                canvas.translate((x, y));
                canvas.rotate(-90.0, None);
                self.shaper.draw_centered(canvas, label.text, 0.0, 0.0, size, c, label.active);
                canvas.restore();
            } else {
                self.shaper.draw_centered(canvas, label.text, x, y, size, c, label.active);
            }
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
        let Some(tip) = &scene.tooltip else { return };
        let w = self.shaper.measure_width(&tip.text, TOOLTIP_FONT_SIZE, false) + 12.0;
        let (x, y) = (tip.anchor.x as f32, tip.anchor.y as f32);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(color(theme.tooltip_background));
        let rect = skia::Rect::from_xywh(x, y - 15.0, w, 20.0);
        canvas.draw_round_rect(rect, 3.0, 3.0, &bg);
        self.shaper.draw_left(canvas, &tip.text, x + 6.0, y, TOOLTIP_FONT_SIZE, color(theme.tooltip_text));
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Integer surface size covering the scene; at least one pixel each way.
pub fn surface_size(scene: &Scene) -> (i32, i32) {
    let w = scene.width().ceil().max(1.0) as i32;
    let h = scene.height().ceil().max(1.0) as i32;
    (w, h)
}
