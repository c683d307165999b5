// File: crates/scatter-demo/src/main.rs
// Summary: Demo loads the state CSV, renders the initial chart, then one chart (plus optional frames) per click.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::svg::write_svg;
use scatter_core::{load_dataset, ChartConfig, ClickOutcome, Field, Scene, ScatterController};
use scatter_render_skia::{RenderOptions, SkiaRenderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the scatter explorer headlessly", long_about = None)]
struct Cli {
    /// CSV to load; defaults to the `data` key of the config.
    data: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR", default_value = "target/out")]
    out: PathBuf,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Field label to click, in order (e.g. `--click poverty --click obesity`).
    #[arg(long = "click", value_name = "FIELD")]
    clicks: Vec<Field>,

    /// Intermediate transition frames written per click.
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Also write an SVG next to every PNG.
    #[arg(long)]
    svg: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ChartConfig::load_from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.data = data.clone();
    }
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    config.validate()?;

    let dataset = load_dataset(&config.data)
        .with_context(|| format!("failed to load CSV '{}'", config.data.display()))?;
    println!("Loaded {} records from {}", dataset.len(), config.data.display());

    let writer = Writer {
        renderer: SkiaRenderer::new(),
        opts: RenderOptions { draw_labels: true, theme: config.theme() },
        out: cli.out.clone(),
        svg: cli.svg,
    };
    std::fs::create_dir_all(&writer.out)
        .with_context(|| format!("failed to create output dir '{}'", writer.out.display()))?;

    let viewport = config.viewport();
    let step = config.transition();
    let mut ctl = ScatterController::new(dataset, config);
    writer.write(ctl.initial_render(viewport), "initial")?;

    let mut now = Instant::now();
    for (n, field) in cli.clicks.iter().copied().enumerate() {
        let axis = field.axis();
        match ctl.on_label_click(axis, field, now)? {
            ClickOutcome::Unchanged => {
                info!(%axis, %field, "already selected; nothing to render");
                continue;
            }
            ClickOutcome::Switched { from, to, .. } => println!("Click {}: {axis} {from} -> {to}", n + 1),
        }

        for k in 1..=cli.frames {
            let t = now + step.mul_f64(k as f64 / (cli.frames + 1) as f64);
            ctl.advance(t);
            if let Some(scene) = ctl.scene() {
                writer.write(scene, &format!("click{}_{}_frame{k:02}", n + 1, field.column()))?;
            }
        }

        now += step + Duration::from_millis(1);
        ctl.advance(now);
        if let Some(scene) = ctl.scene() {
            writer.write(scene, &format!("click{}_{}", n + 1, field.column()))?;
        }
    }

    Ok(())
}

struct Writer {
    renderer: SkiaRenderer,
    opts: RenderOptions,
    out: PathBuf,
    svg: bool,
}

impl Writer {
    fn write(&self, scene: &Scene, stem: &str) -> Result<()> {
        let png = self.out.join(format!("{stem}.png"));
        self.renderer
            .render_to_png(scene, &self.opts, &png)
            .with_context(|| format!("failed to render '{}'", png.display()))?;
        println!("Wrote {}", png.display());
        if self.svg {
            let svg = png.with_extension("svg");
            write_svg(scene, &self.opts.theme, &svg)
                .with_context(|| format!("failed to write '{}'", svg.display()))?;
            println!("Wrote {}", svg.display());
        }
        Ok(())
    }
}

