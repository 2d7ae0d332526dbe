//! Image node and source references
//!
//! Images inserted through the editing surface arrive as data URIs (the
//! upload path reads the file and inlines it); images referenced by URL stay
//! external references.

use crate::{DocModelError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// An image block node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Where the image bytes come from
    pub source: ImageSource,
    /// Alternative text, if the surface captured any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Image {
    /// Create an image node from a raw source string
    pub fn from_src(src: impl Into<String>) -> Self {
        Self {
            source: ImageSource::parse(src),
            alt: None,
        }
    }
}

/// The data reference carried by an image node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ImageSource {
    /// An embedded `data:` URI
    DataUri(String),
    /// An external location (URL or path), fetched by collaborators
    External(String),
}

impl ImageSource {
    /// Classify a raw source string
    pub fn parse(src: impl Into<String>) -> Self {
        let src = src.into();
        if src.starts_with("data:") {
            ImageSource::DataUri(src)
        } else {
            ImageSource::External(src)
        }
    }

    /// Decode an embedded data URI into its media type and raw bytes
    ///
    /// External sources are not fetchable from here and return an error.
    pub fn decode(&self) -> Result<(String, Vec<u8>)> {
        let uri = match self {
            ImageSource::DataUri(uri) => uri,
            ImageSource::External(src) => {
                return Err(DocModelError::InvalidDataUri(format!(
                    "not an embedded image: {src}"
                )))
            }
        };

        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| DocModelError::InvalidDataUri(uri.clone()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| DocModelError::InvalidDataUri(uri.clone()))?;

        let media_type = match header.strip_suffix(";base64") {
            Some(media) => media,
            None => {
                return Err(DocModelError::InvalidDataUri(
                    "only base64 payloads are supported".to_string(),
                ))
            }
        };

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| DocModelError::InvalidDataUri(e.to_string()))?;

        Ok((media_type.to_string(), bytes))
    }
}
