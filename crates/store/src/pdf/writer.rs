//! PDF writer
//!
//! Handles the PDF file structure: object numbering, the cross-reference
//! table, and the header/body/trailer layout.

use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream, PdfString};
use chrono::Utc;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid document structure
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for PDF operations
pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// An object in the file with its byte offset
#[derive(Debug)]
struct ObjectEntry {
    obj_num: u32,
    offset: u64,
}

/// Low-level PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    objects: Vec<ObjectEntry>,
    next_obj_num: u32,
}

impl<W: Write> PdfWriter<W> {
    /// Create a new PDF writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            objects: Vec::new(),
            next_obj_num: 1,
        }
    }

    /// Allocate a new object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the PDF header (version 1.4 plus the binary marker)
    pub fn write_header(&mut self) -> PdfResult<()> {
        self.write_str("%PDF-1.4\n")?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: PdfObject) -> PdfResult<()> {
        let offset = self.position;

        self.write_str(&format!("{obj_num} 0 obj\n"))?;

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&object)?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_str("\nendobj\n")?;

        self.objects.push(ObjectEntry { obj_num, offset });
        Ok(())
    }

    /// Write a stream object
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> PdfResult<()> {
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(
        &mut self,
        catalog_ref: u32,
        info_ref: Option<u32>,
    ) -> PdfResult<()> {
        let xref_offset = self.position;

        self.objects.sort_by_key(|e| e.obj_num);
        let entries: Vec<_> = self.objects.iter().map(|e| (e.obj_num, e.offset)).collect();
        let next_obj_num = self.next_obj_num;

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {next_obj_num}\n"))?;
        self.write_str("0000000000 65535 f \n")?;

        let mut expected_num = 1u32;
        for (obj_num, offset) in entries {
            while expected_num < obj_num {
                self.write_str("0000000000 65535 f \n")?;
                expected_num += 1;
            }
            self.write_str(&format!("{offset:010} 00000 n \n"))?;
            expected_num = obj_num + 1;
        }

        self.write_str("trailer\n")?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref, 0));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::Reference(info, 0));
        }

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{xref_offset}\n"))?;
        self.write_str("%%EOF\n")?;

        Ok(())
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> PdfResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_bytes(&mut self, data: &[u8]) -> PdfResult<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> PdfResult<()> {
        self.write_bytes(s.as_bytes())
    }
}

/// Build the document information dictionary
pub(crate) fn document_info() -> PdfDictionary {
    let mut dict = PdfDictionary::new();
    dict.insert(
        "Creator",
        PdfObject::String(PdfString::from_str("Inkpress")),
    );
    dict.insert(
        "Producer",
        PdfObject::String(PdfString::from_str("Inkpress PDF Export")),
    );
    let date = format!("D:{}Z", Utc::now().format("%Y%m%d%H%M%S"));
    dict.insert("CreationDate", PdfObject::String(PdfString::from_str(&date)));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_trailer_framing() {
        let mut pdf = PdfWriter::new(Vec::new());
        pdf.write_header().unwrap();

        let catalog = pdf.allocate_object();
        let mut dict = PdfDictionary::new().with_type("Catalog");
        dict.insert("Pages", PdfObject::Reference(2, 0));
        pdf.write_object(catalog, PdfObject::Dictionary(dict)).unwrap();

        pdf.write_xref_and_trailer(catalog, None).unwrap();
        let bytes = pdf.finish().unwrap();

        let text = String::from_utf8_lossy(&bytes);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(text.contains("xref"));
        assert!(text.contains("/Root 1 0 R"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut pdf = PdfWriter::new(Vec::new());
        pdf.write_header().unwrap();

        let obj = pdf.allocate_object();
        pdf.write_object(obj, PdfObject::Integer(7)).unwrap();
        pdf.write_xref_and_trailer(obj, None).unwrap();

        let bytes = pdf.finish().unwrap();
        let text = String::from_utf8_lossy(&bytes);

        // The first xref entry's offset must land on "1 0 obj".
        let entry_line = text
            .lines()
            .find(|l| l.ends_with("n ") && !l.starts_with("0000000000"))
            .unwrap();
        let offset: usize = entry_line[..10].parse().unwrap();
        assert!(text[offset..].starts_with("1 0 obj"));
    }

    #[test]
    fn test_document_info_fields() {
        let info = document_info();
        assert!(info.get("Producer").is_some());
        assert!(info.get("CreationDate").is_some());
    }
}
