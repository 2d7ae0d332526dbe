//! Store - Artifact packaging
//!
//! This crate turns the export engine's intermediate representations into
//! downloadable binary artifacts: the structured-element sequence becomes a
//! DOCX container, and the page slices of a rasterized document become a
//! paginated PDF with losslessly embedded images.

pub mod docx;
pub mod pdf;

pub use docx::{pack_docx, pack_docx_bytes, DocxError, DocxResult};
pub use pdf::{write_raster_document, write_raster_document_bytes, PdfError, PdfResult};
