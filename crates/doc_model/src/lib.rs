//! Document Model - Block/inline document tree snapshots
//!
//! This crate provides the document tree representation handed to the export
//! engine by the editing surface. A snapshot is captured once per export,
//! treated as read-only, and discarded when the export finishes.

mod block;
mod document;
mod error;
mod image;
mod mark;
mod run;

pub use block::*;
pub use document::*;
pub use error::*;
pub use image::*;
pub use mark::*;
pub use run::*;
