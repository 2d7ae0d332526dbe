//! Error taxonomy for export operations
//!
//! Every failure is caught at the orchestrator boundary, logged, and surfaced
//! to the user as a single notification; none are fatal to the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// No editing surface (or visual surface) is available to export from
    #[error("Editor surface is not available")]
    MissingEditorSurface,

    /// The rendered surface has zero width or height
    #[error("Rendered surface is empty")]
    EmptySurface,

    /// The packager rejected or failed to serialize the document
    #[error("Packaging failed: {0}")]
    Packaging(String),

    /// An export is already in flight; the request was rejected
    #[error("An export is already in progress")]
    ExportInProgress,

    /// The save-as-file collaborator failed to deliver the artifact
    #[error("Failed to deliver artifact: {0}")]
    Delivery(String),
}

impl From<raster_engine::RasterError> for ExportError {
    fn from(err: raster_engine::RasterError) -> Self {
        match err {
            raster_engine::RasterError::EmptySurface => ExportError::EmptySurface,
            other => ExportError::Packaging(other.to_string()),
        }
    }
}

impl From<store::DocxError> for ExportError {
    fn from(err: store::DocxError) -> Self {
        ExportError::Packaging(err.to_string())
    }
}

impl From<store::PdfError> for ExportError {
    fn from(err: store::PdfError) -> Self {
        ExportError::Packaging(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface_maps_through() {
        let err: ExportError = raster_engine::RasterError::EmptySurface.into();
        assert!(matches!(err, ExportError::EmptySurface));
    }

    #[test]
    fn test_other_raster_errors_map_to_packaging() {
        let err: ExportError =
            raster_engine::RasterError::InvalidGeometry("empty".to_string()).into();
        assert!(matches!(err, ExportError::Packaging(_)));
    }
}
