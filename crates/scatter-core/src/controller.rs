// File: crates/scatter-core/src/controller.rs
// Summary: Interactive chart controller: owns the dataset, axis selection, scene and in-flight transitions.
// Notes:
// - Construction takes a loaded `Dataset`, so nothing can be drawn before loading succeeded.
// - Every state change (selection + label activation + scale) happens inside one `&mut self`
//   call, so the scene never contradicts the selection.

use std::time::Instant;

use tracing::{debug, info};

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::SelectionError;
use crate::field::Field;
use crate::geometry::Point;
use crate::layout::Layout;
use crate::scale::{project, Domain};
use crate::scene::{axis_scale, Scene, Tooltip};
use crate::selection::AxisSelection;
use crate::transition::Transition;
use crate::types::Viewport;

/// Result of a label click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The label was already active; nothing happened.
    Unchanged,
    Switched { axis: Axis, from: Field, to: Field },
}

pub struct ScatterController {
    dataset: Dataset,
    config: ChartConfig,
    selection: AxisSelection,
    scene: Option<Scene>,
    x_transition: Option<Transition>,
    y_transition: Option<Transition>,
}

impl ScatterController {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Self {
        Self {
            dataset,
            config,
            selection: AxisSelection::default(),
            scene: None,
            x_transition: None,
            y_transition: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Discard whatever was drawn and rebuild the whole scene for `viewport`.
    /// In-flight transitions are dropped; markers land on their settled positions.
    pub fn initial_render(&mut self, viewport: Viewport) -> &Scene {
        self.x_transition = None;
        self.y_transition = None;

        let layout = Layout::from_viewport(viewport, self.config.viewport_fraction, self.config.margins);
        let scene = Scene::build(&self.dataset, &self.selection, layout, &self.config);
        info!(
            width = layout.width,
            height = layout.height,
            markers = scene.markers.len(),
            x = %self.selection.x,
            y = %self.selection.y,
            "chart rendered"
        );
        self.scene.insert(scene)
    }

    /// Window resize: same as a fresh render at the new size.
    pub fn resize(&mut self, viewport: Viewport) -> &Scene {
        self.initial_render(viewport)
    }

    /// Domain the axis is heading to (the settled one when no transition runs).
    pub fn target_domain(&self, axis: Axis) -> Option<Domain> {
        if let Some(t) = self.transition(axis) {
            return Some(t.target_domain());
        }
        self.scene.as_ref().map(|s| s.axis(axis).scale.domain)
    }

    pub fn is_animating(&self) -> bool {
        self.x_transition.is_some() || self.y_transition.is_some()
    }

    /// Select `field` on `axis`. Only that axis is re-scaled and animated.
    pub fn on_label_click(&mut self, axis: Axis, field: Field, now: Instant) -> Result<ClickOutcome, SelectionError> {
        let Some(previous) = self.selection.select(axis, field)? else {
            return Ok(ClickOutcome::Unchanged);
        };
        debug!(%axis, from = %previous, to = %field, "axis field switched");

        if let Some(scene) = self.scene.as_mut() {
            scene.activate(axis, field);

            // Start from where things are right now, mid-animation included.
            let (from, domain_from) = match transition_slot(&mut self.x_transition, &mut self.y_transition, axis).take() {
                Some(running) => (running.sample(now), running.sample_domain(now)),
                None => (scene.coords(axis), scene.axis(axis).scale.domain),
            };

            let target = axis_scale(&self.dataset, field, &scene.layout, axis, self.config.padding);
            let to = project(field, self.dataset.records(), &target);

            let view = scene.axis_mut(axis);
            view.field = field;
            view.set_domain(domain_from);
            scene.set_coords(axis, &from);

            let transition =
                Transition::new(axis, now, self.config.transition(), from, to, domain_from, target.domain);
            *transition_slot(&mut self.x_transition, &mut self.y_transition, axis) = Some(transition);
            self.advance(now);
        }

        Ok(ClickOutcome::Switched { axis, from: previous, to: field })
    }

    /// Route a click at surface position `p` to the label under it, if any.
    pub fn click_at(&mut self, p: Point, now: Instant) -> Result<Option<ClickOutcome>, SelectionError> {
        let hit = self.scene.as_ref().and_then(|s| s.label_at(p)).map(|l| (l.axis, l.field));
        match hit {
            Some((axis, field)) => self.on_label_click(axis, field, now).map(Some),
            None => Ok(None),
        }
    }

    /// Step running transitions to `now`. Returns true while anything is still moving.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(scene) = self.scene.as_mut() else { return false };
        for slot in [&mut self.x_transition, &mut self.y_transition] {
            let Some(t) = slot.as_ref() else { continue };
            let axis = t.axis;
            scene.set_coords(axis, &t.sample(now));
            scene.axis_mut(axis).set_domain(t.sample_domain(now));
            if t.is_finished(now) {
                debug!(%axis, "transition finished");
                *slot = None;
            }
        }
        self.is_animating()
    }

    /// Show the tooltip of the marker under the pointer. Returns true when it changed.
    pub fn pointer_moved(&mut self, p: Point) -> bool {
        let [top, left] = self.config.tooltip_offset;
        let Some(scene) = self.scene.as_mut() else { return false };
        let next = scene.marker_at(p).map(|m| Tooltip {
            record: m.index,
            text: m.abbr.clone(),
            anchor: p.offset(left, top),
        });
        if scene.tooltip == next {
            return false;
        }
        scene.tooltip = next;
        true
    }

    /// Hide the tooltip. Returns true when one was visible.
    pub fn pointer_left(&mut self) -> bool {
        self.scene.as_mut().and_then(|s| s.tooltip.take()).is_some()
    }

    fn transition(&self, axis: Axis) -> Option<&Transition> {
        match axis {
            Axis::X => self.x_transition.as_ref(),
            Axis::Y => self.y_transition.as_ref(),
        }
    }
}

fn transition_slot<'a>(
    x: &'a mut Option<Transition>,
    y: &'a mut Option<Transition>,
    axis: Axis,
) -> &'a mut Option<Transition> {
    match axis {
        Axis::X => x,
        Axis::Y => y,
    }
}
