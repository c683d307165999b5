// File: crates/scatter-core/src/layout.rs
// Summary: Responsive drawing-area layout: surface size, plot rectangle, pixel ranges, label slots.

use crate::axis::Axis;
use crate::geometry::{Point, Rect};
use crate::types::{Insets, Viewport};

/// Vertical gap between stacked axis labels.
const LABEL_SPACING: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Drawing surface size (a fraction of the viewport).
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    /// Plot area in surface pixels; the margins are already applied.
    pub plot: Rect,
}

impl Layout {
    pub fn from_viewport(viewport: Viewport, fraction: f64, insets: Insets) -> Self {
        let width = (viewport.width * fraction).max(0.0);
        let height = (viewport.height * fraction).max(0.0);
        let plot_w = (width - insets.hsum() as f64).max(0.0);
        let plot_h = (height - insets.vsum() as f64).max(0.0);
        let plot = Rect::from_ltwh(insets.left as f64, insets.top as f64, plot_w, plot_h);
        Self { width, height, insets, plot }
    }

    /// Pixel range an axis maps onto. Y grows upwards, so its range is flipped.
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.plot.left, self.plot.right),
            Axis::Y => (self.plot.bottom, self.plot.top),
        }
    }

    /// Anchor of the `slot`-th label of an axis (0 = closest to the plot).
    /// X labels stack below the plot; Y labels are rotated and stack leftwards.
    pub fn label_anchor(&self, axis: Axis, slot: usize) -> Point {
        let step = LABEL_SPACING * slot as f64;
        match axis {
            Axis::X => Point::new(
                self.plot.left + self.plot.width() * 0.5,
                self.plot.bottom + self.insets.top as f64 - 10.0 + step,
            ),
            Axis::Y => Point::new(
                self.plot.left - self.insets.left as f64 + 60.0 - step,
                self.plot.top + self.plot.height() * 0.5,
            ),
        }
    }
}
