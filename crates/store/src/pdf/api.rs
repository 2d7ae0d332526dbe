//! Public API for the paginated raster PDF

use super::content::ContentStream;
use super::images::ImageData;
use super::objects::{PdfDictionary, PdfObject};
use super::writer::{document_info, PdfError, PdfResult, PdfWriter};
use super::PT_PER_MM;
use raster_engine::{PageGeometry, PageSlice};
use std::path::Path;

/// Object references allocated for one page
struct PagePlan {
    image_ref: u32,
    content_ref: u32,
    page_ref: u32,
}

/// Write a paginated raster document to PDF bytes in memory
///
/// Each slice becomes one page: the slice pixels are embedded as a
/// flate-compressed RGB image XObject and painted at the slice's placement,
/// scaled to its printed size.
pub fn write_raster_document_bytes(
    slices: &[PageSlice],
    geometry: &PageGeometry,
) -> PdfResult<Vec<u8>> {
    if slices.is_empty() {
        return Err(PdfError::InvalidDocument("no pages to write".to_string()));
    }

    let page_width_pt = geometry.page_width_mm * PT_PER_MM;
    let page_height_pt = geometry.page_height_mm * PT_PER_MM;

    let mut pdf = PdfWriter::new(Vec::new());
    pdf.write_header()?;

    let catalog_ref = pdf.allocate_object();
    let pages_ref = pdf.allocate_object();
    let info_ref = pdf.allocate_object();

    let plans: Vec<PagePlan> = slices
        .iter()
        .map(|_| PagePlan {
            image_ref: pdf.allocate_object(),
            content_ref: pdf.allocate_object(),
            page_ref: pdf.allocate_object(),
        })
        .collect();

    // Catalog
    let mut catalog = PdfDictionary::new().with_type("Catalog");
    catalog.insert("Pages", PdfObject::Reference(pages_ref, 0));
    pdf.write_object(catalog_ref, PdfObject::Dictionary(catalog))?;

    // Page tree
    let mut pages = PdfDictionary::new().with_type("Pages");
    pages.insert(
        "Kids",
        PdfObject::Array(
            plans
                .iter()
                .map(|p| PdfObject::Reference(p.page_ref, 0))
                .collect(),
        ),
    );
    pages.insert("Count", PdfObject::Integer(plans.len() as i64));
    pdf.write_object(pages_ref, PdfObject::Dictionary(pages))?;

    // Document info
    pdf.write_object(info_ref, PdfObject::Dictionary(document_info()))?;

    for (slice, plan) in slices.iter().zip(&plans) {
        // Image XObject, compressed losslessly.
        let mut image = ImageData::from_raw_rgb(
            slice.image.as_bytes().to_vec(),
            slice.image.width(),
            slice.image.height(),
        );
        image.compress()?;
        pdf.write_stream_object(plan.image_ref, image.to_xobject())?;

        // Content stream placing the image. PDF's origin is the lower-left
        // corner, so the top margin flips to a bottom-relative offset.
        let width_pt = slice.width_mm * PT_PER_MM;
        let height_pt = slice.height_mm * PT_PER_MM;
        let x_pt = slice.left_mm * PT_PER_MM;
        let y_pt = page_height_pt - (slice.top_mm * PT_PER_MM) - height_pt;

        let mut content = ContentStream::new();
        content
            .save_state()
            .transform(width_pt, 0.0, 0.0, height_pt, x_pt, y_pt)
            .draw_xobject("Im0")
            .restore_state();
        pdf.write_stream_object(
            plan.content_ref,
            super::objects::PdfStream::new(content.into_bytes()),
        )?;

        // Page object
        let mut xobjects = PdfDictionary::new();
        xobjects.insert("Im0", PdfObject::Reference(plan.image_ref, 0));
        let mut resources = PdfDictionary::new();
        resources.insert("XObject", PdfObject::Dictionary(xobjects));

        let mut page = PdfDictionary::new().with_type("Page");
        page.insert("Parent", PdfObject::Reference(pages_ref, 0));
        page.insert(
            "MediaBox",
            PdfObject::Array(vec![
                PdfObject::Integer(0),
                PdfObject::Integer(0),
                PdfObject::Real(page_width_pt),
                PdfObject::Real(page_height_pt),
            ]),
        );
        page.insert("Resources", PdfObject::Dictionary(resources));
        page.insert("Contents", PdfObject::Reference(plan.content_ref, 0));
        pdf.write_object(plan.page_ref, PdfObject::Dictionary(page))?;
    }

    pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
    let bytes = pdf.finish()?;
    tracing::debug!(pages = slices.len(), bytes = bytes.len(), "wrote raster PDF");
    Ok(bytes)
}

/// Write a paginated raster document to a PDF file on disk
pub fn write_raster_document(
    slices: &[PageSlice],
    geometry: &PageGeometry,
    path: impl AsRef<Path>,
) -> PdfResult<()> {
    let bytes = write_raster_document_bytes(slices, geometry)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
