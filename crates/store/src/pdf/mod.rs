//! Paginated raster PDF writing
//!
//! Produces the multi-page raster document: each page slice from the
//! pagination slicer becomes one PDF page with the slice embedded as a
//! losslessly compressed image XObject at its computed placement.

mod api;
mod content;
mod images;
mod objects;
mod writer;

pub use api::{write_raster_document, write_raster_document_bytes};
pub use images::ImageData;
pub use objects::{PdfDictionary, PdfObject, PdfStream, PdfString};
pub use writer::{PdfError, PdfResult, PdfWriter};

/// Points per millimeter (72 dpi over 25.4 mm per inch)
pub(crate) const PT_PER_MM: f64 = 72.0 / 25.4;
