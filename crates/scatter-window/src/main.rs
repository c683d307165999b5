// File: crates/scatter-window/src/main.rs
// Summary: Windowed front-end that rasterises the scene on the CPU and blits it via winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use scatter_core::{load_dataset, ChartConfig, Point, Rgba, Scene, ScatterController, Viewport};
use scatter_render_skia::{RenderOptions, SkiaRenderer};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [CSV] [CONFIG.toml]
    let mut args = std::env::args().skip(1);
    let data_arg = args.next().map(PathBuf::from);
    let mut config = match args.next() {
        Some(path) => ChartConfig::load_from_file(std::path::Path::new(&path))
            .with_context(|| format!("failed to load config '{path}'"))?,
        None => ChartConfig::default(),
    };
    if let Some(data) = data_arg {
        config.data = data;
    }

    // Loading must succeed before a window exists.
    let dataset = load_dataset(&config.data)
        .with_context(|| format!("failed to load CSV '{}'", config.data.display()))?;
    info!(records = dataset.len(), "dataset ready");

    let opts = RenderOptions { draw_labels: true, theme: config.theme() };
    let initial = config.viewport();
    let mut ctl = ScatterController::new(dataset, config);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Scatter Explorer")
        .with_inner_size(PhysicalSize::new(initial.width, initial.height))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let renderer = SkiaRenderer::new();
    let mut size = window.inner_size();
    let mut cursor: Option<Point> = None;
    ctl.initial_render(viewport_of(size));

    event_loop.run(move |event, _, cf| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
            WindowEvent::Resized(new_size) => {
                size = new_size;
                ctl.resize(viewport_of(size));
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = Point::new(position.x, position.y);
                cursor = Some(p);
                if ctl.pointer_moved(p) {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorLeft { .. } => {
                cursor = None;
                if ctl.pointer_left() {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                let Some(p) = cursor else { return };
                match ctl.click_at(p, Instant::now()) {
                    Ok(Some(outcome)) => {
                        debug!(?outcome, "label clicked");
                        window.request_redraw();
                    }
                    Ok(None) => {}
                    Err(e) => warn!("click ignored: {e}"),
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            if ctl.is_animating() {
                window.request_redraw();
                *cf = ControlFlow::Poll;
            } else {
                *cf = ControlFlow::Wait;
            }
        }
        Event::RedrawRequested(_) => {
            ctl.advance(Instant::now());
            let Some(scene) = ctl.scene() else { return };
            if let Err(e) = present(&mut surface, &renderer, scene, &opts, size) {
                error!("present failed: {e:#}");
                *cf = ControlFlow::Exit;
            }
        }
        Event::LoopDestroyed => {
            // The surface borrows from the context; keep it alive until here.
            let _ = &context;
            info!("window closed");
        }
        _ => {}
    })
}

fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width.max(1) as f64, size.height.max(1) as f64)
}

fn present(
    surface: &mut softbuffer::Surface,
    renderer: &SkiaRenderer,
    scene: &Scene,
    opts: &RenderOptions,
    size: PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize buffer: {e}"))?;

    let (rgba, sw, sh, stride) = renderer.render_to_rgba8(scene, opts)?;
    let (w, h) = (w.get() as usize, h.get() as usize);
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;

    // Scene covers the top-left drawing area; the rest is background.
    frame.fill(pack(opts.theme.background));
    for y in 0..h.min(sh as usize) {
        let src = &rgba[y * stride..y * stride + sw as usize * 4];
        let dst = &mut frame[y * w..y * w + w.min(sw as usize)];
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *out = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

fn pack(c: Rgba) -> u32 {
    ((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32
}
