// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers: nice 1/2/5 steps, tick values and label formatting.

use crate::scale::LinearScale;

/// Default tick count requested for both axes.
pub const DEFAULT_TICKS: usize = 10;

/// Nice steps may overshoot the requested count; anything past this multiple is dropped.
const MAX_TICKS_PER_REQUEST: i64 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub pos: f64,
    pub label: String,
}

/// Step between ticks for `[start, stop]` targeting roughly `count` ticks.
/// Returns a power of ten times 1, 2 or 5; `None` for empty or non-finite spans.
pub fn nice_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return None;
    }
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized >= 50f64.sqrt() {
        10.0
    } else if normalized >= 10f64.sqrt() {
        5.0
    } else if normalized >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * magnitude;
    // Subnormal spans underflow the magnitude to zero.
    (step.is_finite() && step > 0.0).then_some(step)
}

/// Tick values inside the domain, ascending.
pub fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let Some(step) = nice_step(lo, hi, count) else { return Vec::new() };

    // Sub-unit steps go through the inverse to keep values like 0.1 exact.
    if step < 1.0 {
        let inv = (1.0 / step).round();
        let Some((first, last)) = index_span((lo * inv).ceil(), (hi * inv).floor(), count) else {
            return Vec::new();
        };
        (first..=last).map(|k| k as f64 / inv).collect()
    } else {
        let Some((first, last)) = index_span((lo / step).ceil(), (hi / step).floor(), count) else {
            return Vec::new();
        };
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

/// Integer tick indices, or `None` when they are not finite or far exceed `count`.
fn index_span(first: f64, last: f64, count: usize) -> Option<(i64, i64)> {
    if !first.is_finite() || !last.is_finite() || last < first {
        return None;
    }
    let (first, last) = (first as i64, last as i64);
    (last.saturating_sub(first) <= count as i64 * MAX_TICKS_PER_REQUEST).then_some((first, last))
}

/// Ticks for an axis scale, positioned in pixels and labelled.
pub fn ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let (d0, d1) = scale.domain;
    let values = tick_values(d0, d1, count);
    let step = nice_step(d0, d1, count);
    values
        .into_iter()
        .map(|value| {
            let label = match step {
                Some(step) if !scale.is_degenerate() => format_tick(value, step),
                _ => trim_zeros(format_tick(value, 0.01)),
            };
            Tick { value, pos: scale.apply(value), label }
        })
        .collect()
}

/// Format with as many decimals as the step needs and `,` thousands grouping.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 { (-step.log10().floor()) as usize } else { 0 };
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
