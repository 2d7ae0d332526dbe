//! Export Engine - orchestration of the document export pipelines
//!
//! The orchestrator owns the collaborator boundaries (editing surface,
//! artifact sink, status notifier) and drives either export path end to end:
//! snapshot -> structured elements -> DOCX package, or visual surface ->
//! raster image -> page slices -> PDF. At most one export is in flight at a
//! time; a second request is rejected without touching the running one.

mod error;
mod orchestrator;
mod state;
mod surface;

pub use error::*;
pub use orchestrator::*;
pub use state::*;
pub use surface::*;
