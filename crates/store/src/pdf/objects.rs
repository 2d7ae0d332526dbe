//! PDF object model
//!
//! The small set of basic object types from the PDF Reference that the
//! raster writer needs, plus their serializer.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone)]
pub enum PdfObject {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Literal string
    String(PdfString),
    /// Name object (starts with /)
    Name(String),
    /// Array of objects
    Array(Vec<PdfObject>),
    /// Dictionary (key-value pairs)
    Dictionary(PdfDictionary),
    /// Stream (dictionary + byte data)
    Stream(PdfStream),
    /// Indirect reference (object number, generation number)
    Reference(u32, u16),
}

/// A literal PDF string
#[derive(Debug, Clone)]
pub struct PdfString(Vec<u8>);

impl PdfString {
    /// Create a literal string from text
    pub fn from_str(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

/// PDF dictionary (sorted key-value pairs)
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair
    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }

    /// Set the Type entry
    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", PdfObject::Name(type_name.to_string()));
        self
    }
}

/// PDF stream (dictionary + data)
#[derive(Debug, Clone)]
pub struct PdfStream {
    /// Stream dictionary
    pub dict: PdfDictionary,
    /// Stream data, possibly compressed
    pub data: Vec<u8>,
    /// Whether the data is already compressed
    pub compressed: bool,
}

impl PdfStream {
    /// Create a new stream with data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }
}

/// Serializer for PDF objects
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    /// Create a new serializer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a PDF object
    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{n}"),
            PdfObject::Real(n) => write!(self.writer, "{}", fmt_real(*n)),
            PdfObject::String(s) => self.write_string(s),
            PdfObject::Name(name) => write!(self.writer, "/{name}"),
            PdfObject::Array(items) => {
                write!(self.writer, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(self.writer, " ")?;
                    }
                    self.write_object(item)?;
                }
                write!(self.writer, "]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Stream(stream) => {
                self.write_dictionary(&stream.dict)?;
                write!(self.writer, "\nstream\n")?;
                self.writer.write_all(&stream.data)?;
                write!(self.writer, "\nendstream")
            }
            PdfObject::Reference(obj_num, gen_num) => {
                write!(self.writer, "{obj_num} {gen_num} R")
            }
        }
    }

    fn write_string(&mut self, s: &PdfString) -> io::Result<()> {
        write!(self.writer, "(")?;
        for &byte in &s.0 {
            match byte {
                b'(' | b')' | b'\\' => write!(self.writer, "\\{}", byte as char)?,
                0x0A => write!(self.writer, "\\n")?,
                0x0D => write!(self.writer, "\\r")?,
                0x20..=0x7E => write!(self.writer, "{}", byte as char)?,
                _ => write!(self.writer, "\\{byte:03o}")?,
            }
        }
        write!(self.writer, ")")
    }

    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        write!(self.writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(self.writer, " /{key} ")?;
            self.write_object(value)?;
        }
        write!(self.writer, " >>")
    }

    /// Return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Format a real number without trailing zeros
fn fmt_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        let s = format!("{n:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(obj).unwrap();
        String::from_utf8(serializer.into_inner()).unwrap()
    }

    #[test]
    fn test_scalar_serialization() {
        assert_eq!(serialize(&PdfObject::Integer(42)), "42");
        assert_eq!(serialize(&PdfObject::Real(1.5)), "1.5");
        assert_eq!(serialize(&PdfObject::Real(2.0)), "2.0");
        assert_eq!(serialize(&PdfObject::Name("Page".to_string())), "/Page");
        assert_eq!(serialize(&PdfObject::Reference(3, 0)), "3 0 R");
    }

    #[test]
    fn test_string_escaping() {
        let s = PdfObject::String(PdfString::from_str("a(b)\\c"));
        assert_eq!(serialize(&s), r"(a\(b\)\\c)");
    }

    #[test]
    fn test_array_and_dictionary() {
        let array = PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(595.0),
        ]);
        assert_eq!(serialize(&array), "[0 0 595.0]");

        let mut dict = PdfDictionary::new().with_type("Catalog");
        dict.insert("Pages", PdfObject::Reference(2, 0));
        let out = serialize(&PdfObject::Dictionary(dict));
        assert!(out.contains("/Type /Catalog"));
        assert!(out.contains("/Pages 2 0 R"));
    }

    #[test]
    fn test_stream_serialization() {
        let mut stream = PdfStream::new(b"q Q".to_vec());
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        let out = serialize(&PdfObject::Stream(stream));
        assert!(out.contains("stream\nq Q\nendstream"));
    }
}
