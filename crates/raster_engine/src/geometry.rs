//! Physical page geometry

use crate::{RasterError, Result};
use serde::{Deserialize, Serialize};

/// Fixed physical page geometry in millimeters
///
/// The margin applies uniformly on all four sides; the printable area is
/// what remains inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in millimeters
    pub page_width_mm: f64,
    /// Page height in millimeters
    pub page_height_mm: f64,
    /// Uniform margin in millimeters
    pub margin_mm: f64,
}

impl PageGeometry {
    /// ISO A4 (210x297 mm) with a 10 mm margin
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
        }
    }

    /// A custom page size with the given uniform margin
    pub fn custom(page_width_mm: f64, page_height_mm: f64, margin_mm: f64) -> Self {
        Self {
            page_width_mm,
            page_height_mm,
            margin_mm,
        }
    }

    /// Printable width: page width minus both margins
    pub fn printable_width_mm(&self) -> f64 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Printable height: page height minus both margins
    pub fn printable_height_mm(&self) -> f64 {
        self.page_height_mm - 2.0 * self.margin_mm
    }

    /// Reject geometries whose printable area collapses to nothing
    pub fn validate(&self) -> Result<()> {
        if !self.page_width_mm.is_finite()
            || !self.page_height_mm.is_finite()
            || !self.margin_mm.is_finite()
        {
            return Err(RasterError::InvalidGeometry(
                "dimensions must be finite".to_string(),
            ));
        }
        if self.margin_mm < 0.0 {
            return Err(RasterError::InvalidGeometry(
                "margin must be non-negative".to_string(),
            ));
        }
        if self.printable_width_mm() <= 0.0 || self.printable_height_mm() <= 0.0 {
            return Err(RasterError::InvalidGeometry(format!(
                "printable area {}x{} mm is empty",
                self.printable_width_mm(),
                self.printable_height_mm()
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
