// File: crates/scatter-render-skia/src/error.rs
// Summary: Raster rendering failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("reading back surface pixels failed")]
    ReadPixels,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
