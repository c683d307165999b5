// File: crates/scatter-core/src/field.rs
// Summary: The six numeric indicator columns and the axis each one can drive.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::axis::Axis;
use crate::error::SelectionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Income,
    Smokes,
    Healthcare,
    Poverty,
    Obesity,
    Age,
}

impl Field {
    /// Storage order of values inside a record.
    pub const ALL: [Field; 6] = [
        Field::Income,
        Field::Smokes,
        Field::Healthcare,
        Field::Poverty,
        Field::Obesity,
        Field::Age,
    ];

    /// Label order on the X axis (top to bottom under the plot).
    pub const X_OPTIONS: [Field; 3] = [Field::Income, Field::Poverty, Field::Age];
    /// Label order on the Y axis (innermost first).
    pub const Y_OPTIONS: [Field; 3] = [Field::Smokes, Field::Obesity, Field::Healthcare];

    pub const fn index(self) -> usize {
        match self {
            Field::Income => 0,
            Field::Smokes => 1,
            Field::Healthcare => 2,
            Field::Poverty => 3,
            Field::Obesity => 4,
            Field::Age => 5,
        }
    }

    /// Column header in the input file.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Smokes => "smokes",
            Field::Healthcare => "healthcare",
            Field::Poverty => "poverty",
            Field::Obesity => "obesity",
            Field::Age => "age",
        }
    }

    /// Text shown on the clickable axis label.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Income => "Income ($)",
            Field::Smokes => "Smokes (%)",
            Field::Healthcare => "Healthcare (%)",
            Field::Poverty => "Poverty (%)",
            Field::Obesity => "Obesity (%)",
            Field::Age => "Age (Years)",
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Field::Income | Field::Poverty | Field::Age => Axis::X,
            Field::Smokes | Field::Obesity | Field::Healthcare => Axis::Y,
        }
    }

    pub const fn options(axis: Axis) -> [Field; 3] {
        match axis {
            Axis::X => Self::X_OPTIONS,
            Axis::Y => Self::Y_OPTIONS,
        }
    }

    pub fn from_column(name: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.column() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Field::from_column(&lowered).ok_or_else(|| SelectionError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_unique_slot() {
        let mut seen = [false; 6];
        for f in Field::ALL {
            assert!(!seen[f.index()]);
            seen[f.index()] = true;
        }
    }

    #[test]
    fn options_belong_to_their_axis() {
        for axis in [Axis::X, Axis::Y] {
            for f in Field::options(axis) {
                assert_eq!(f.axis(), axis);
            }
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Poverty".parse::<Field>(), Ok(Field::Poverty));
        assert!(matches!("weight".parse::<Field>(), Err(SelectionError::UnknownField(_))));
    }
}
