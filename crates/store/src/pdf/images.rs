//! PDF image embedding
//!
//! Page slices arrive as raw RGB pixel rows and are embedded as image
//! XObjects with FlateDecode compression, which is lossless.

use super::objects::{PdfDictionary, PdfObject, PdfStream};
use std::io::Write;

/// Image data staged for embedding in the PDF
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixel data, raw or flate-compressed
    pub data: Vec<u8>,
    /// Whether the data has been flate-compressed
    compressed: bool,
}

impl ImageData {
    /// Create image data from raw RGB8 bytes
    pub fn from_raw_rgb(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data,
            compressed: false,
        }
    }

    /// Compress the pixel data with flate (zlib)
    pub fn compress(&mut self) -> std::io::Result<()> {
        use flate2::write::ZlibEncoder;
        use flate2::Compression;

        if self.compressed {
            return Ok(());
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&self.data)?;
        self.data = encoder.finish()?;
        self.compressed = true;
        Ok(())
    }

    /// Convert to an image XObject stream
    pub fn to_xobject(&self) -> PdfStream {
        let mut dict = PdfDictionary::new().with_type("XObject");
        dict.insert("Subtype", PdfObject::Name("Image".to_string()));
        dict.insert("Width", PdfObject::Integer(self.width as i64));
        dict.insert("Height", PdfObject::Integer(self.height as i64));
        dict.insert("BitsPerComponent", PdfObject::Integer(8));
        dict.insert("ColorSpace", PdfObject::Name("DeviceRGB".to_string()));
        dict.insert("Length", PdfObject::Integer(self.data.len() as i64));
        if self.compressed {
            dict.insert("Filter", PdfObject::Name("FlateDecode".to_string()));
        }

        PdfStream {
            dict,
            data: self.data.clone(),
            compressed: self.compressed,
        }
    }
}
