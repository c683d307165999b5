// File: crates/scatter-core/src/axis.rs
// Summary: Axis identity and the rendered axis model (field, scale, ticks).

use std::fmt;

use crate::field::Field;
use crate::grid::{ticks, Tick};
use crate::scale::{Domain, LinearScale};

/// Which of the two chart axes a label or transition refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bottom (X) or left (Y) axis as drawn: the field it shows, its live scale and tick marks.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisView {
    pub axis: Axis,
    pub field: Field,
    pub scale: LinearScale,
    pub ticks: Vec<Tick>,
    pub tick_count: usize,
}

impl AxisView {
    pub fn new(axis: Axis, field: Field, scale: LinearScale, tick_count: usize) -> Self {
        let ticks = ticks(&scale, tick_count);
        Self { axis, field, scale, ticks, tick_count }
    }

    /// Swap the domain and lay the ticks out again. Range stays as is.
    pub fn set_domain(&mut self, domain: Domain) {
        self.scale = self.scale.with_domain(domain);
        self.ticks = ticks(&self.scale, self.tick_count);
    }
}
