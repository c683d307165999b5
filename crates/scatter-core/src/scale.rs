// File: crates/scatter-core/src/scale.rs
// Summary: Domain computation with an explicit padding policy, and the linear data -> pixel scale.

use serde::Deserialize;

use crate::dataset::Record;
use crate::field::Field;

/// `(start, end)` in data units.
pub type Domain = (f64, f64);

/// Used when a field has no numeric value at all.
pub const FALLBACK_DOMAIN: Domain = (0.0, 1.0);

/// Multipliers applied to the field extent: `[min * lower, max * upper]` for non-negative
/// data. Contract: both factors in `(0, 2)`, `lower <= upper`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomainPadding {
    pub lower: f64,
    pub upper: f64,
}

impl DomainPadding {
    /// Both bounds scaled by 0.9.
    pub const SHRINK: Self = Self { lower: 0.9, upper: 0.9 };
    /// 10% below the minimum, 10% above the maximum.
    pub const HEADROOM: Self = Self { lower: 0.9, upper: 1.1 };
    /// Raw extent.
    pub const NONE: Self = Self { lower: 1.0, upper: 1.0 };
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self::SHRINK
    }
}

/// Min and max of `field`, ignoring NaN. `None` when nothing is left.
pub fn extent(field: Field, records: &[Record]) -> Option<(f64, f64)> {
    records
        .iter()
        .map(|r| r.get(field))
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Domain bound to an axis showing `field`.
pub fn compute_domain(field: Field, records: &[Record], padding: DomainPadding) -> Option<Domain> {
    extent(field, records).map(|(lo, hi)| (pad(lo, padding.lower), pad(hi, padding.upper)))
}

/// `v * factor` for non-negative bounds. Negative bounds are mirrored so a factor below 1
/// still moves the bound down and one above 1 moves it up. The domain keeps its order
/// when both factors are in `(0, 2)` and `lower <= upper`.
fn pad(v: f64, factor: f64) -> f64 {
    if v >= 0.0 { v * factor } else { v * (2.0 - factor) }
}

/// Project every record's `field` through `scale`, in record order.
pub fn project(field: Field, records: &[Record], scale: &LinearScale) -> Vec<f64> {
    records.iter().map(|r| scale.apply(r.get(field))).collect()
}

/// Continuous linear map from a data domain onto a pixel range.
/// Contract: a zero-width domain maps every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Domain,
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn with_domain(&self, domain: Domain) -> Self {
        Self { domain, range: self.range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0 + (r1 - r0) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly() {
        let s = LinearScale::new((10.0, 20.0), (0.0, 200.0));
        assert_eq!(s.apply(15.0), 100.0);
        assert_eq!(s.apply(12.5), 50.0);
    }

    #[test]
    fn flipped_range_for_vertical_axes() {
        let s = LinearScale::new((0.0, 10.0), (400.0, 0.0));
        assert_eq!(s.apply(0.0), 400.0);
        assert_eq!(s.apply(10.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_mid_range() {
        let s = LinearScale::new((16.2, 16.2), (0.0, 300.0));
        assert!(s.is_degenerate());
        assert_eq!(s.apply(16.2), 150.0);
        assert_eq!(s.apply(99.0), 150.0);
    }

    #[test]
    fn nan_input_stays_nan() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 10.0));
        assert!(s.apply(f64::NAN).is_nan());
    }
}
