//! Collaborator boundaries
//!
//! The export engine never renders or downloads anything itself; it asks
//! these collaborators. The editing surface hands out document snapshots and
//! off-screen visual surfaces, the sink delivers finished artifacts, and the
//! notifier shows non-blocking status messages to the user.

use crate::ExportError;
use doc_model::DocumentTree;
use raster_engine::RasterImage;
use std::future::Future;

/// The editing surface the engine exports from
pub trait EditorSurface: Send + Sync {
    /// The off-screen visual surface this editor produces
    type Visual: VisualSurface;

    /// Capture a serializable snapshot of the document tree
    ///
    /// Returns `None` when no editor is mounted.
    fn snapshot(&self) -> Option<DocumentTree>;

    /// Create a style-normalized off-screen clone of the visual surface
    ///
    /// Returns `None` when no visual surface is available. The clone is torn
    /// down when the returned value is dropped.
    fn visual_surface(&self) -> Option<Self::Visual>;
}

/// A transient off-screen surface that can be rasterized once
///
/// Implementations tear the surface down in `Drop`, so the orchestrator's
/// scoping guarantees cleanup on every exit path, including failure.
pub trait VisualSurface: Send {
    /// Render the surface into a single tall raster image
    fn rasterize(&mut self) -> impl Future<Output = Result<RasterImage, ExportError>> + Send;
}

/// The save-as-file collaborator receiving finished artifacts
pub trait ArtifactSink: Send + Sync {
    /// Deliver a finished artifact under the given file name
    fn save(&self, file_name: &str, bytes: Vec<u8>) -> std::io::Result<()>;
}

/// Non-blocking user notifications
pub trait StatusNotifier: Send + Sync {
    /// Show a status message to the user
    fn notify(&self, message: &str);
}
