//! document.xml writer
//!
//! Converts the structured-element sequence to WordprocessingML.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::{escape_xml, namespaces};
use export_model::{FormattedRun, ParagraphElement, StructuredElement};

/// Writer for word/document.xml
pub struct DocumentWriter;

impl DocumentWriter {
    /// Create a new document writer
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    ///
    /// An empty element sequence is rejected; the builder upstream guarantees
    /// a placeholder paragraph, so hitting this is a caller error.
    pub fn write(&self, elements: &[StructuredElement]) -> DocxResult<String> {
        if elements.is_empty() {
            return Err(DocxError::EmptyDocument);
        }

        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for element in elements {
            match element {
                StructuredElement::Paragraph(para) => self.write_paragraph(&mut xml, para),
                StructuredElement::BulletLine(text) => self.write_bullet_line(&mut xml, text),
            }
        }

        self.write_section_properties(&mut xml);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// Write a paragraph element
    fn write_paragraph(&self, xml: &mut String, para: &ParagraphElement) {
        if para.runs.is_empty() && para.heading.is_none() {
            // Blank paragraph, kept for vertical spacing.
            xml.push_str("<w:p/>");
            return;
        }

        xml.push_str("<w:p>");
        if let Some(heading) = para.heading {
            xml.push_str(&format!(
                r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#,
                heading.style_id()
            ));
        }
        for run in &para.runs {
            self.write_run(xml, run);
        }
        xml.push_str("</w:p>");
    }

    /// Write a flattened list line as a plain paragraph
    fn write_bullet_line(&self, xml: &mut String, text: &str) {
        xml.push_str("<w:p>");
        self.write_run(xml, &FormattedRun::plain(text));
        xml.push_str("</w:p>");
    }

    /// Write a run element with its properties
    fn write_run(&self, xml: &mut String, run: &FormattedRun) {
        xml.push_str("<w:r>");
        self.write_run_properties(xml, run);

        // Newlines and tabs cannot appear inside w:t; break the text around
        // them and emit the matching elements.
        let lines: Vec<&str> = run.text.split('\n').collect();
        for (line_index, line) in lines.iter().enumerate() {
            let segments: Vec<&str> = line.split('\t').collect();
            for (segment_index, segment) in segments.iter().enumerate() {
                if !segment.is_empty() {
                    let needs_preserve = segment.starts_with(' ') || segment.ends_with(' ');
                    if needs_preserve {
                        xml.push_str(r#"<w:t xml:space="preserve">"#);
                    } else {
                        xml.push_str("<w:t>");
                    }
                    xml.push_str(&escape_xml(segment));
                    xml.push_str("</w:t>");
                }
                if segment_index < segments.len() - 1 {
                    xml.push_str("<w:tab/>");
                }
            }
            if line_index < lines.len() - 1 {
                xml.push_str("<w:br/>");
            }
        }

        xml.push_str("</w:r>");
    }

    /// Write run properties when any formatting is present
    fn write_run_properties(&self, xml: &mut String, run: &FormattedRun) {
        if run.format.is_plain() && run.font_family.is_none() {
            return;
        }

        xml.push_str("<w:rPr>");
        if let Some(ref font) = run.font_family {
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}"/>"#,
                escape_xml(font)
            ));
        }
        if run.format.bold {
            xml.push_str("<w:b/>");
        }
        if run.format.italic {
            xml.push_str("<w:i/>");
        }
        if run.format.underline.is_some() {
            // Present-or-absent: emitted only when the run is underlined.
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        xml.push_str("</w:rPr>");
    }

    /// Write the section properties: A4 page size with 10 mm margins, in
    /// twentieths of a point
    fn write_section_properties(&self, xml: &mut String) {
        xml.push_str("<w:sectPr>");
        xml.push_str(r#"<w:pgSz w:w="11906" w:h="16838"/>"#);
        xml.push_str(r#"<w:pgMar w:top="567" w:right="567" w:bottom="567" w:left="567"/>"#);
        xml.push_str("</w:sectPr>");
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
