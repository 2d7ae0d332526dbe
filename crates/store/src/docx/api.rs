//! Public API for DOCX packaging

use crate::docx::error::DocxResult;
use crate::docx::writer::DocxWriter;
use export_model::StructuredElement;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Package a structured-element sequence into DOCX bytes in memory
///
/// # Example
///
/// ```ignore
/// use export_model::{ParagraphElement, StructuredElement};
/// use store::docx::pack_docx_bytes;
///
/// let elements = vec![StructuredElement::Paragraph(
///     ParagraphElement::from_text("Hello"),
/// )];
/// let bytes = pack_docx_bytes(&elements)?;
/// ```
pub fn pack_docx_bytes(elements: &[StructuredElement]) -> DocxResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    DocxWriter::new(&mut buffer).write(elements)?;
    tracing::debug!(elements = elements.len(), "packaged DOCX document");
    Ok(buffer.into_inner())
}

/// Package a structured-element sequence into a DOCX file on disk
pub fn pack_docx(elements: &[StructuredElement], path: impl AsRef<Path>) -> DocxResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    DocxWriter::new(writer).write(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use export_model::{build_elements, HeadingStyle, ParagraphElement};
    use std::io::Read;

    fn sample_elements() -> Vec<StructuredElement> {
        vec![
            StructuredElement::Paragraph(ParagraphElement::heading(
                HeadingStyle::Heading1,
                "Title",
            )),
            StructuredElement::Paragraph(ParagraphElement::from_text("Body text")),
            StructuredElement::BulletLine("\u{2022} item".to_string()),
        ]
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = pack_docx_bytes(&sample_elements()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/document.xml",
            "word/styles.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
    }

    #[test]
    fn test_document_part_content() {
        let bytes = pack_docx_bytes(&sample_elements()).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(document.contains("<w:t>Title</w:t>"));
        assert!(document.contains("<w:t>Body text</w:t>"));
        assert!(document.contains("\u{2022} item"));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert!(pack_docx_bytes(&[]).is_err());
    }

    #[test]
    fn test_builder_output_always_packages() {
        // Even an empty tree packages, thanks to the builder placeholder.
        let elements = build_elements(&doc_model::DocumentTree::new());
        let bytes = pack_docx_bytes(&elements).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("Empty document"));
    }

    #[test]
    fn test_pack_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        pack_docx(&sample_elements(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // ZIP local file header magic.
        assert_eq!(&bytes[0..2], b"PK");
    }
}
