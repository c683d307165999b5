// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (viewport, margins, marker and animation defaults).

use serde::Deserialize;

/// Default viewport width in pixels when no window size is known.
pub const WIDTH: f64 = 1280.0;
/// Default viewport height in pixels.
pub const HEIGHT: f64 = 800.0;
/// Fraction of the viewport taken by the drawing area.
pub const VIEWPORT_FRACTION: f64 = 0.8;
/// Circle radius of one record, in pixels.
pub const MARKER_RADIUS: f64 = 15.0;
/// Font size of the abbreviation drawn inside each circle.
pub const MARKER_FONT_SIZE: f64 = 8.0;
/// Font size of the clickable axis labels.
pub const LABEL_FONT_SIZE: f64 = 14.0;
/// Axis re-scale animation length.
pub const TRANSITION_MS: u64 = 750;

/// Host window/viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 50, 50, 100)
    }
}
