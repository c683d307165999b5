// File: crates/scatter-core/src/svg.rs
// Summary: SVG adapter: serialises a scene into a standalone document with stable class names.

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{Axis, AxisView};
use crate::scene::Scene;
use crate::theme::Theme;

const TICK_SIZE: f64 = 6.0;
const TICK_FONT_SIZE: f64 = 10.0;

/// Render `scene` as an SVG document. Markers with non-finite centres are omitted.
pub fn render_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::with_capacity(256 + scene.markers.len() * 160);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, scene, theme);
    out
}

pub fn write_svg(scene: &Scene, theme: &Theme, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(scene, theme))
}

fn write_document(out: &mut String, scene: &Scene, theme: &Theme) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(scene.width()),
        h = num(scene.height()),
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background.to_hex())?;

    write_axis(out, scene, &scene.x_axis, theme)?;
    write_axis(out, scene, &scene.y_axis, theme)?;

    let visible = || scene.markers.iter().filter(|m| m.is_finite());
    for m in visible() {
        writeln!(
            out,
            r#"<circle class="stateCircle" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}"/>"#,
            num(m.cx),
            num(m.cy),
            num(m.radius),
            theme.marker_fill.to_hex(),
            theme.marker_stroke.to_hex(),
        )?;
    }
    for m in visible() {
        writeln!(
            out,
            r#"<text class="stateText" x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="{}px" fill="{}">{}</text>"#,
            num(m.cx),
            num(m.cy),
            num(scene.marker_font_size),
            theme.marker_text.to_hex(),
            escape(&m.abbr),
        )?;
    }

    for l in &scene.labels {
        let state = if l.active { "active" } else { "inactive" };
        let transform = if l.rotated {
            format!(r#" transform="rotate(-90 {} {})""#, num(l.anchor.x), num(l.anchor.y))
        } else {
            String::new()
        };
        writeln!(
            out,
            r#"<text class="clickableText {state}" name="{name}" axis="{axis}" x="{x}" y="{y}" text-anchor="middle" font-size="{fs}px" fill="{fill}"{transform}>{text}</text>"#,
            name = l.field.column(),
            axis = l.axis,
            x = num(l.anchor.x),
            y = num(l.anchor.y),
            fs = num(l.font_size),
            fill = theme.label_color(l.active).to_hex(),
            text = escape(l.text),
        )?;
    }

    if let Some(tip) = &scene.tooltip {
        writeln!(
            out,
            r#"<g class="d3-tip"><rect x="{}" y="{}" width="{}" height="20" rx="3" fill="{}" fill-opacity="{:.2}"/><text x="{}" y="{}" font-size="12px" fill="{}">{}</text></g>"#,
            num(tip.anchor.x),
            num(tip.anchor.y - 15.0),
            num(tip.text.chars().count() as f64 * 8.0 + 12.0),
            theme.tooltip_background.to_hex(),
            theme.tooltip_background.opacity(),
            num(tip.anchor.x + 6.0),
            num(tip.anchor.y),
            theme.tooltip_text.to_hex(),
            escape(&tip.text),
        )?;
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn write_axis(out: &mut String, scene: &Scene, view: &AxisView, theme: &Theme) -> std::fmt::Result {
    let plot = scene.layout.plot;
    let stroke = theme.axis_line.to_hex();
    let label = theme.tick_label.to_hex();
    match view.axis {
        Axis::X => {
            writeln!(out, r#"<g class="xAxis">"#)?;
            writeln!(
                out,
                r#"<line x1="{}" y1="{b}" x2="{}" y2="{b}" stroke="{stroke}"/>"#,
                num(plot.left),
                num(plot.right),
                b = num(plot.bottom),
            )?;
            for t in &view.ticks {
                writeln!(
                    out,
                    r#"<g class="tick"><line x1="{x}" y1="{b}" x2="{x}" y2="{e}" stroke="{stroke}"/><text x="{x}" y="{ty}" text-anchor="middle" font-size="{TICK_FONT_SIZE}px" fill="{label}">{}</text></g>"#,
                    escape(&t.label),
                    x = num(t.pos),
                    b = num(plot.bottom),
                    e = num(plot.bottom + TICK_SIZE),
                    ty = num(plot.bottom + TICK_SIZE + TICK_FONT_SIZE + 3.0),
                )?;
            }
        }
        Axis::Y => {
            writeln!(out, r#"<g class="yAxis">"#)?;
            writeln!(
                out,
                r#"<line x1="{l}" y1="{}" x2="{l}" y2="{}" stroke="{stroke}"/>"#,
                num(plot.top),
                num(plot.bottom),
                l = num(plot.left),
            )?;
            for t in &view.ticks {
                writeln!(
                    out,
                    r#"<g class="tick"><line x1="{e}" y1="{y}" x2="{l}" y2="{y}" stroke="{stroke}"/><text x="{tx}" y="{y}" text-anchor="end" dominant-baseline="central" font-size="{TICK_FONT_SIZE}px" fill="{label}">{}</text></g>"#,
                    escape(&t.label),
                    y = num(t.pos),
                    l = num(plot.left),
                    e = num(plot.left - TICK_SIZE),
                    tx = num(plot.left - TICK_SIZE - 3.0),
                )?;
            }
        }
    }
    writeln!(out, "</g>")
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
