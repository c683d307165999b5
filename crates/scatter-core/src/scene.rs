// File: crates/scatter-core/src/scene.rs
// Summary: Renderer-independent scene: axes, one marker per record, axis-label controls, tooltip.
// Notes:
// - Coordinates are surface pixels. Adapters (SVG, Skia) only read a scene; all state
//   changes go through the controller.

use tracing::warn;

use crate::axis::{Axis, AxisView};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::field::Field;
use crate::geometry::{Point, Rect};
use crate::grid::DEFAULT_TICKS;
use crate::layout::Layout;
use crate::scale::{compute_domain, project, DomainPadding, LinearScale, FALLBACK_DOMAIN};
use crate::selection::AxisSelection;

/// Circle plus abbreviation text of one record. Both share the same centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Index of the record in the dataset.
    pub index: usize,
    pub abbr: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Marker {
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.cx,
            Axis::Y => self.cy,
        }
    }

    pub fn set_coord(&mut self, axis: Axis, v: f64) {
        match axis {
            Axis::X => self.cx = v,
            Axis::Y => self.cy = v,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite()
    }

    /// NaN centres never hit.
    pub fn contains(&self, p: Point) -> bool {
        self.center().distance(p) <= self.radius
    }
}

/// One of the six clickable axis titles.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub axis: Axis,
    pub field: Field,
    pub text: &'static str,
    /// Text anchor (middle of the string, on the baseline).
    pub anchor: Point,
    /// Y labels read bottom-to-top.
    pub rotated: bool,
    pub active: bool,
    pub font_size: f64,
}

impl AxisLabel {
    /// Approximate text box used for hit-testing, independent of any font backend.
    pub fn bounds(&self) -> Rect {
        let len = self.text.chars().count() as f64 * self.font_size * 0.6;
        let (above, below) = (self.font_size, self.font_size * 0.3);
        let Point { x, y } = self.anchor;
        if self.rotated {
            Rect::from_ltrb(x - above, y - len * 0.5, x + below, y + len * 0.5)
        } else {
            Rect::from_ltrb(x - len * 0.5, y - above, x + len * 0.5, y + below)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub record: usize,
    pub text: String,
    pub anchor: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub x_axis: AxisView,
    pub y_axis: AxisView,
    pub markers: Vec<Marker>,
    pub labels: Vec<AxisLabel>,
    pub tooltip: Option<Tooltip>,
    pub marker_font_size: f64,
}

impl Scene {
    /// Full draw: scales from the current selection, markers in dataset order, six labels.
    pub fn build(dataset: &Dataset, selection: &AxisSelection, layout: Layout, config: &ChartConfig) -> Self {
        let x_scale = axis_scale(dataset, selection.x, &layout, Axis::X, config.padding);
        let y_scale = axis_scale(dataset, selection.y, &layout, Axis::Y, config.padding);

        let xs = project(selection.x, dataset.records(), &x_scale);
        let ys = project(selection.y, dataset.records(), &y_scale);
        let markers = dataset
            .iter()
            .zip(xs.into_iter().zip(ys))
            .enumerate()
            .map(|(index, (rec, (cx, cy)))| Marker {
                index,
                abbr: rec.abbr.clone(),
                cx,
                cy,
                radius: config.marker_radius,
            })
            .collect();

        let labels = [Axis::X, Axis::Y]
            .into_iter()
            .flat_map(|axis| {
                Field::options(axis).into_iter().enumerate().map(move |(slot, field)| AxisLabel {
                    axis,
                    field,
                    text: field.label(),
                    anchor: layout.label_anchor(axis, slot),
                    rotated: axis == Axis::Y,
                    active: selection.get(axis) == field,
                    font_size: config.label_font_size,
                })
            })
            .collect();

        Self {
            layout,
            x_axis: AxisView::new(Axis::X, selection.x, x_scale, DEFAULT_TICKS),
            y_axis: AxisView::new(Axis::Y, selection.y, y_scale, DEFAULT_TICKS),
            markers,
            labels,
            tooltip: None,
            marker_font_size: config.marker_font_size,
        }
    }

    pub fn width(&self) -> f64 {
        self.layout.width
    }

    pub fn height(&self) -> f64 {
        self.layout.height
    }

    pub fn axis(&self, axis: Axis) -> &AxisView {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisView {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }

    /// Marker coordinates along one axis, in record order.
    pub fn coords(&self, axis: Axis) -> Vec<f64> {
        self.markers.iter().map(|m| m.coord(axis)).collect()
    }

    pub fn set_coords(&mut self, axis: Axis, values: &[f64]) {
        for (m, &v) in self.markers.iter_mut().zip(values) {
            m.set_coord(axis, v);
        }
    }

    /// Flip the active flags of one axis so exactly `field` is active.
    pub fn activate(&mut self, axis: Axis, field: Field) {
        for label in self.labels.iter_mut().filter(|l| l.axis == axis) {
            label.active = label.field == field;
        }
    }

    pub fn active_label(&self, axis: Axis) -> Option<&AxisLabel> {
        self.labels.iter().find(|l| l.axis == axis && l.active)
    }

    pub fn label_at(&self, p: Point) -> Option<&AxisLabel> {
        self.labels.iter().find(|l| l.bounds().contains(p))
    }

    /// Topmost marker under `p`; later markers are drawn over earlier ones.
    pub fn marker_at(&self, p: Point) -> Option<&Marker> {
        self.markers.iter().rev().find(|m| m.contains(p))
    }

    /// Circles + marker texts + label controls + two axes.
    pub fn element_count(&self) -> usize {
        self.markers.len() * 2 + self.labels.len() + 2
    }
}

/// Live scale of an axis showing `field`.
pub fn axis_scale(
    dataset: &Dataset,
    field: Field,
    layout: &Layout,
    axis: Axis,
    padding: DomainPadding,
) -> LinearScale {
    let domain = compute_domain(field, dataset.records(), padding).unwrap_or_else(|| {
        warn!(field = %field, "no numeric values; using fallback domain");
        FALLBACK_DOMAIN
    });
    LinearScale::new(domain, layout.range(axis))
}
