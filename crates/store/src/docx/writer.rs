//! DOCX writer infrastructure
//!
//! Assembles the ZIP archive with the correct DOCX part layout.

use crate::docx::content_types::ContentTypes;
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::DocxResult;
use crate::docx::escape_xml;
use crate::docx::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::docx::styles_writer::StylesWriter;
use chrono::Utc;
use export_model::StructuredElement;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Application name recorded in the package metadata
const CREATOR: &str = "Inkpress";

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: ContentTypes::standard(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
        }
    }

    /// Write a complete DOCX package from a structured-element sequence
    pub fn write(mut self, elements: &[StructuredElement]) -> DocxResult<()> {
        let doc_xml = DocumentWriter::new().write(elements)?;
        self.write_file("word/document.xml", &doc_xml)?;

        let styles_xml = StylesWriter::new().write()?;
        self.write_file("word/styles.xml", &styles_xml)?;

        let core_xml = core_properties_xml(CREATOR);
        self.write_file("docProps/core.xml", &core_xml)?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        // [Content_Types].xml goes in last.
        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;

        self.zip.finish()?;
        Ok(())
    }

    /// Write a text file to the ZIP archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Generate docProps/core.xml with creator and timestamps
fn core_properties_xml(creator: &str) -> String {
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
            r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<dc:creator>{creator}</dc:creator>"#,
            r#"<cp:lastModifiedBy>{creator}</cp:lastModifiedBy>"#,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#,
            r#"</cp:coreProperties>"#,
        ),
        creator = escape_xml(creator),
        now = now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_core_properties_shape() {
        let xml = core_properties_xml("Inkpress");
        assert!(xml.contains("<dc:creator>Inkpress</dc:creator>"));
        assert!(xml.contains("dcterms:created"));
    }

    #[test]
    fn test_writer_initial_relationships() {
        use crate::docx::relationships::relationship_types;

        let writer = DocxWriter::new(Cursor::new(Vec::new()));
        assert!(writer
            .root_rels
            .get_by_type(relationship_types::DOCUMENT)
            .is_some());
        assert!(writer
            .doc_rels
            .get_by_type(relationship_types::STYLES)
            .is_some());
    }
}
