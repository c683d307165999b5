// File: crates/scatter-core/src/config.rs
// Summary: Chart configuration loaded from TOML; every key optional with the interactive defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scale::DomainPadding;
use crate::theme::{self, Theme};
use crate::types::{
    Insets, Viewport, HEIGHT, LABEL_FONT_SIZE, MARKER_FONT_SIZE, MARKER_RADIUS, TRANSITION_MS,
    VIEWPORT_FRACTION, WIDTH,
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// CSV file to load when none is given on the command line.
    pub data: PathBuf,
    pub theme: String,
    pub width: f64,
    pub height: f64,
    pub viewport_fraction: f64,
    pub margins: Insets,
    pub marker_radius: f64,
    pub marker_font_size: f64,
    pub label_font_size: f64,
    pub transition_ms: u64,
    pub padding: DomainPadding,
    /// `[top, left]` shift of the tooltip relative to the pointer.
    pub tooltip_offset: [f64; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/data.csv"),
            theme: "light".to_string(),
            width: WIDTH,
            height: HEIGHT,
            viewport_fraction: VIEWPORT_FRACTION,
            margins: Insets::default(),
            marker_radius: MARKER_RADIUS,
            marker_font_size: MARKER_FONT_SIZE,
            label_font_size: LABEL_FONT_SIZE,
            transition_ms: TRANSITION_MS,
            padding: DomainPadding::default(),
            tooltip_offset: [50.0, -50.0],
        }
    }
}

impl ChartConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_fraction > 0.0 && self.viewport_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport_fraction must be in (0, 1], got {}",
                self.viewport_fraction
            )));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.marker_radius >= 0.0) {
            return Err(ConfigError::Invalid("marker_radius must be non-negative".into()));
        }
        let in_range = |f: f64| f > 0.0 && f < 2.0;
        let DomainPadding { lower, upper } = self.padding;
        if !(in_range(lower) && in_range(upper) && lower <= upper) {
            return Err(ConfigError::Invalid(format!(
                "padding factors must be in (0, 2) with lower <= upper, got {}/{}",
                self.padding.lower, self.padding.upper
            )));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
