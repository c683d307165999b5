// File: crates/scatter-core/src/dataset.rs
// Summary: Row-oriented CSV loader producing an immutable dataset of per-region indicators.
// Notes:
// - Numeric cells are coerced leniently (leading numeric prefix, else NaN). Bad cells do not
//   fail the load; they surface later as NaN coordinates.
// - A load either yields a complete dataset or an error. There is no partial result.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::LoadError;
use crate::field::Field;

/// Column holding the display label of each record.
pub const LABEL_COLUMN: &str = "abbr";

/// One observed region. Values are indexed by `Field::index`.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub abbr: String,
    values: [f64; 6],
    /// Every other column, in header order.
    pub extra: Vec<(String, String)>,
}

impl Record {
    pub fn new(abbr: impl Into<String>, values: [f64; 6]) -> Self {
        Self { abbr: abbr.into(), values, extra: Vec::new() }
    }

    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.iter().find(|(k, _)| k == column).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse CSV from any reader. Header row required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let abbr_idx = position(LABEL_COLUMN)?;
        let mut field_idx = [0usize; 6];
        for f in Field::ALL {
            field_idx[f.index()] = position(f.column())?;
        }

        let passthrough: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != abbr_idx && !field_idx.contains(i))
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let abbr = row.get(abbr_idx).unwrap_or("").trim().to_string();

            // Short rows leave the missing cells as NaN.
            let mut values = [f64::NAN; 6];
            for f in Field::ALL {
                values[f.index()] = row.get(field_idx[f.index()]).map(parse_float).unwrap_or(f64::NAN);
            }

            let extra = passthrough
                .iter()
                .filter_map(|(i, name)| row.get(*i).map(|v| (name.clone(), v.to_string())))
                .collect();

            records.push(Record { abbr, values, extra });
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let dataset = Self { records };
        for f in Field::ALL {
            let missing = dataset.nan_count(f);
            if missing > 0 {
                warn!(field = %f, missing, "non-numeric values coerced to NaN");
            }
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Column view of one field, in record order.
    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.get(field))
    }

    pub fn nan_count(&self, field: Field) -> usize {
        self.values(field).filter(|v| v.is_nan()).count()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Load the dataset at `path`. Fails fast; the caller must not render on error.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let dataset = Dataset::from_reader(file)?;
    info!(rows = dataset.len(), path = %path.display(), "dataset loaded");
    Ok(dataset)
}

/// Lenient float coercion: longest leading numeric prefix, `Infinity` allowed, NaN otherwise.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        end = j;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_prefix_rules() {
        assert_eq!(parse_float("42000"), 42000.0);
        assert_eq!(parse_float(" 23.5 "), 23.5);
        assert_eq!(parse_float("12.5%"), 12.5);
        assert_eq!(parse_float("-.5"), -0.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("7e"), 7.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float("n/a").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("inf").is_nan());
    }
}
