//! DOCX packaging
//!
//! Serializes a structured-element sequence into a Word-compatible DOCX
//! package. DOCX is a ZIP archive of XML parts (ECMA-376):
//! - `[Content_Types].xml` - content type definitions
//! - `_rels/.rels` - root relationships
//! - `docProps/core.xml` - core document properties
//! - `word/document.xml` - main document content
//! - `word/styles.xml` - style definitions
//! - `word/_rels/document.xml.rels` - document relationships
//!
//! Only the packaging direction is implemented; inbound packages are not
//! decoded here.

mod api;
mod content_types;
mod document_writer;
mod error;
mod relationships;
mod styles_writer;
mod writer;

pub use api::{pack_docx, pack_docx_bytes};
pub use error::{DocxError, DocxResult};
pub use writer::DocxWriter;

/// WordprocessingML namespaces
pub(crate) mod namespaces {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
}

/// Escape text for inclusion in XML content or attribute values
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
