//! styles.xml writer
//!
//! Generates the fixed style set the document writer references: document
//! defaults, the Normal paragraph style, and the six heading styles.

use crate::docx::error::DocxResult;
use crate::docx::namespaces;

/// Half-point font sizes for Heading1 through Heading6
const HEADING_SIZES: [u16; 6] = [32, 28, 26, 24, 22, 22];

/// Writer for word/styles.xml
pub struct StylesWriter;

impl StylesWriter {
    /// Create a new styles writer
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self) -> DocxResult<String> {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml);
        self.write_normal_style(&mut xml);
        for (index, size) in HEADING_SIZES.iter().enumerate() {
            self.write_heading_style(&mut xml, index as u8 + 1, *size);
        }

        xml.push_str("</w:styles>");
        Ok(xml)
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String) {
        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
        xml.push_str(r#"<w:sz w:val="22"/>"#);
        xml.push_str(r#"<w:szCs w:val="22"/>"#);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");

        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="160" w:line="259" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    /// Write the default paragraph style
    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str("</w:style>");
    }

    /// Write one heading style definition
    fn write_heading_style(&self, xml: &mut String, level: u8, half_point_size: u16) {
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}">"#
        ));
        xml.push_str(&format!(r#"<w:name w:val="heading {level}"/>"#));
        xml.push_str(r#"<w:basedOn w:val="Normal"/>"#);
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:keepNext/>"#);
        xml.push_str(&format!(r#"<w:outlineLvl w:val="{}"/>"#, level - 1));
        xml.push_str("</w:pPr>");
        xml.push_str("<w:rPr>");
        xml.push_str("<w:b/>");
        xml.push_str(&format!(r#"<w:sz w:val="{half_point_size}"/>"#));
        xml.push_str("</w:rPr>");
        xml.push_str("</w:style>");
    }
}

impl Default for StylesWriter {
    fn default() -> Self {
        Self::new()
    }
}
