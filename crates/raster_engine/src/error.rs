//! Error types for raster operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Rendered surface has zero width or height")]
    EmptySurface,

    #[error("Pixel buffer length {actual} does not match {width}x{height} RGB dimensions")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Requested rows [{y}, {y}+{rows}) exceed image height {height}")]
    RowRangeOutOfBounds { y: u32, rows: u32, height: u32 },

    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
