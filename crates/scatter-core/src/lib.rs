// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the dataset loader, scales, scene model and controller.

pub mod axis;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod field;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod svg;
pub mod theme;
pub mod transition;
pub mod types;

pub use axis::{Axis, AxisView};
pub use config::ChartConfig;
pub use controller::{ClickOutcome, ScatterController};
pub use dataset::{load_dataset, Dataset, Record};
pub use error::{ConfigError, LoadError, SelectionError};
pub use field::Field;
pub use geometry::{Point, Rect};
pub use layout::Layout;
pub use scale::{compute_domain, Domain, DomainPadding, LinearScale};
pub use scene::{AxisLabel, Marker, Scene, Tooltip};
pub use selection::AxisSelection;
pub use svg::render_svg;
pub use theme::{Rgba, Theme};
pub use types::{Insets, Viewport};
