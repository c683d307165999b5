// File: crates/scatter-core/src/error.rs
// Summary: Typed errors for dataset loading, axis selection and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::axis::Axis;
use crate::field::Field;

/// Dataset could not be produced. Nothing is rendered after one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' not found in header")]
    MissingColumn(String),
    #[error("dataset has a header but no rows")]
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("field '{field}' is not an option of the {axis} axis")]
    FieldNotOnAxis { axis: Axis, field: Field },
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
