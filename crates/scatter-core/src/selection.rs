// File: crates/scatter-core/src/selection.rs
// Summary: Which field currently drives each axis.

use crate::axis::Axis;
use crate::error::SelectionError;
use crate::field::Field;

/// Contract: `x` is always an X option and `y` a Y option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: Field,
    pub y: Field,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self { x: Field::Income, y: Field::Smokes }
    }
}

impl AxisSelection {
    pub fn get(&self, axis: Axis) -> Field {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn is_active(&self, field: Field) -> bool {
        self.get(field.axis()) == field
    }

    /// Point `axis` at `field`. Returns the previous field when it changed, `None` when
    /// `field` was already selected.
    pub fn select(&mut self, axis: Axis, field: Field) -> Result<Option<Field>, SelectionError> {
        if field.axis() != axis {
            return Err(SelectionError::FieldNotOnAxis { axis, field });
        }
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        if *slot == field {
            return Ok(None);
        }
        Ok(Some(std::mem::replace(slot, field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_income_and_smokes() {
        let s = AxisSelection::default();
        assert!(s.is_active(Field::Income));
        assert!(s.is_active(Field::Smokes));
        assert!(!s.is_active(Field::Age));
    }

    #[test]
    fn reselect_is_noop() {
        let mut s = AxisSelection::default();
        assert_eq!(s.select(Axis::X, Field::Income), Ok(None));
        assert_eq!(s.select(Axis::X, Field::Age), Ok(Some(Field::Income)));
        assert_eq!(s.x, Field::Age);
    }

    #[test]
    fn cross_axis_is_rejected() {
        let mut s = AxisSelection::default();
        assert_eq!(
            s.select(Axis::Y, Field::Poverty),
            Err(SelectionError::FieldNotOnAxis { axis: Axis::Y, field: Field::Poverty })
        );
        assert_eq!(s, AxisSelection::default());
    }
}
