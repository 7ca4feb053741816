use super::Margins;
use crate::error::LayoutError;
use crate::pagesize::PageSize;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Page geometry shared by every block of one document: page size, margins and
/// the multiplier that turns a font size into a line height. Build it once per
/// document; the writer, cursor and backend all read from the same value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub page_size: PageSize,
    pub margins: Margins,
    #[serde(default = "Geometry::default_line_height_factor")]
    pub line_height_factor: f32,
}

impl Geometry {
    pub const DEFAULT_LINE_HEIGHT_FACTOR: f32 = 1.15;

    fn default_line_height_factor() -> f32 {
        Self::DEFAULT_LINE_HEIGHT_FACTOR
    }

    /// Create a validated geometry using the default line height multiplier
    pub fn new(page_size: PageSize, margins: Margins) -> Result<Geometry, LayoutError> {
        let geometry = Geometry {
            page_size,
            margins,
            line_height_factor: Self::DEFAULT_LINE_HEIGHT_FACTOR,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Replace the line height multiplier, re-validating the geometry
    pub fn with_line_height_factor(self, factor: f32) -> Result<Geometry, LayoutError> {
        let geometry = Geometry {
            line_height_factor: factor,
            ..self
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Check that the margins leave a non-empty content area. Geometry that came
    /// from deserialisation has not been through [`Geometry::new`], so the
    /// writer calls this again before laying anything out.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size;
        if !(width.is_finite() && height.is_finite()) || width <= Pt(0.0) || height <= Pt(0.0) {
            return Err(LayoutError::InvalidGeometry(format!(
                "page size {width}x{height} must be positive"
            )));
        }
        if !self.margins.is_valid() {
            return Err(LayoutError::InvalidGeometry(
                "margins must be finite and non-negative".into(),
            ));
        }
        if self.content_width() <= Pt(0.0) || self.content_height() <= Pt(0.0) {
            return Err(LayoutError::InvalidGeometry(format!(
                "margins {:?} leave no room on a {width}x{height} page",
                self.margins
            )));
        }
        if !self.line_height_factor.is_finite() || self.line_height_factor <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "line height factor {} must be positive",
                self.line_height_factor
            )));
        }
        Ok(())
    }

    pub fn page_width(&self) -> Pt {
        self.page_size.0
    }

    pub fn page_height(&self) -> Pt {
        self.page_size.1
    }

    /// Width available to a line: page width minus both side margins
    pub fn content_width(&self) -> Pt {
        self.page_width() - self.margins.horizontal()
    }

    /// Height between the top margin and the bottom margin
    pub fn content_height(&self) -> Pt {
        self.page_height() - self.margins.vertical()
    }

    /// Where the first line of every page starts
    pub fn top(&self) -> Pt {
        self.margins.top
    }

    /// No line box may extend past this offset from the top of the page
    pub fn bottom_limit(&self) -> Pt {
        self.page_height() - self.margins.bottom
    }

    /// Vertical advance for one line of text at the given font size
    pub fn line_height(&self, size: Pt) -> Pt {
        size * self.line_height_factor
    }
}
