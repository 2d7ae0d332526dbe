//! [Content_Types].xml generation

/// Content types declared for the parts in the package
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension
    defaults: Vec<(String, String)>,
    /// Override content types by part name
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Create the content types for a standard package
    pub fn standard() -> Self {
        let mut ct = Self::default();

        ct.add_default(
            "rels",
            "application/vnd.openxmlformats-package.relationships+xml",
        );
        ct.add_default("xml", "application/xml");

        ct.add_override(
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        );
        ct.add_override(
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        );
        ct.add_override(
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        );

        ct
    }

    /// Declare a default content type for an extension
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .push((extension.to_string(), content_type.to_string()));
    }

    /// Declare an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .push((part_name.to_string(), content_type.to_string()));
    }

    /// Generate the [Content_Types].xml content
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (extension, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{extension}" ContentType="{content_type}"/>"#
            ));
        }
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{part_name}" ContentType="{content_type}"/>"#
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_content_types() {
        let xml = ContentTypes::standard().to_xml();
        assert!(xml.contains(r#"Extension="rels""#));
        assert!(xml.contains(r#"PartName="/word/document.xml""#));
        assert!(xml.contains(r#"PartName="/word/styles.xml""#));
        assert!(xml.contains(r#"PartName="/docProps/core.xml""#));
    }
}
