//! Export Model - Structured element types and document-to-element conversion
//!
//! This crate turns a document tree snapshot into the ordered sequence of
//! packager-ready structured elements: styled paragraphs, headings, and
//! flattened bullet lines.

mod builder;
mod element;
mod style;

pub use builder::*;
pub use element::*;
pub use style::*;
