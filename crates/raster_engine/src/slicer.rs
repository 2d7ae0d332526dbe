//! Pagination slicer
//!
//! Partitions one tall raster image into page-sized slices under a fixed
//! physical page geometry. The image is first scaled so its pixel width fills
//! the printable width; its printed height is then consumed page by page,
//! converting each printed band back to source pixel rows.

use crate::{PageGeometry, RasterError, RasterImage, Result};

/// One page-sized slice of the source image and its placement on the page
#[derive(Debug, Clone)]
pub struct PageSlice {
    /// Zero-based page number
    pub page_index: usize,
    /// The extracted pixel band; full source width, sliced height
    pub image: RasterImage,
    /// Source row offset this slice was taken from
    pub source_y: u32,
    /// Horizontal placement on the page in millimeters
    pub left_mm: f64,
    /// Vertical placement on the page in millimeters
    pub top_mm: f64,
    /// Printed width in millimeters (the printable width)
    pub width_mm: f64,
    /// Printed height in millimeters
    pub height_mm: f64,
}

/// Slice a tall raster image into page-sized bands
///
/// Slices are contiguous and non-overlapping, and their pixel heights sum to
/// exactly the source height: intermediate slices round the mm-to-pixel
/// conversion, and the final slice is clamped to the rows still unconsumed
/// instead of being recomputed, so rounding never loses the boundary rows.
///
/// A zero-dimension source is a fatal empty-surface failure and produces no
/// slices.
pub fn slice_into_pages(image: &RasterImage, geometry: &PageGeometry) -> Result<Vec<PageSlice>> {
    if image.is_empty() {
        return Err(RasterError::EmptySurface);
    }
    geometry.validate()?;

    let printable_width = geometry.printable_width_mm();
    let printable_height = geometry.printable_height_mm();

    // Scale factor from source pixels to printed millimeters.
    let scale = printable_width / image.width() as f64;
    let printed_height = image.height() as f64 * scale;

    let mut slices = Vec::new();
    let mut remaining_mm = printed_height;
    let mut source_y = 0u32;

    while remaining_mm > 0.0 && source_y < image.height() {
        let slice_mm = remaining_mm.min(printable_height);
        let rows_left = image.height() - source_y;

        let is_final = remaining_mm <= printable_height;
        let source_rows = if is_final {
            rows_left
        } else {
            let rows = (slice_mm * image.width() as f64 / printable_width).round() as u32;
            rows.clamp(1, rows_left)
        };

        slices.push(PageSlice {
            page_index: slices.len(),
            image: image.crop_rows(source_y, source_rows)?,
            source_y,
            left_mm: geometry.margin_mm,
            top_mm: geometry.margin_mm,
            width_mm: printable_width,
            height_mm: slice_mm,
        });

        remaining_mm -= slice_mm;
        source_y += source_rows;
    }

    Ok(slices)
}
