//! The drawing side of the engine.
//!
//! [`RenderingBackend`] is the only thing the layout engine knows about output:
//! it measures text, opens pages and draws lines. [`PdfBackend`] implements it
//! on top of [`Document`], [`Page`] and embedded [`Font`]s.

use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::{FontMetrics, Geometry, Style};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;
use crate::LayoutError;
use id_arena::Id;

/// A page-based drawing target.
///
/// Coordinates are top-down: `y` is the top of the line box, measured from the
/// top edge of the page. The first page is open as soon as the backend exists
/// and drawing always lands on the most recently opened page. Instances are
/// not meant to be shared between concurrent renders.
pub trait RenderingBackend: FontMetrics {
    fn page_width(&self) -> Pt;
    fn page_height(&self) -> Pt;

    /// Close the current page and make a fresh one the drawing target
    fn add_page(&mut self) -> Result<(), LayoutError>;

    /// Draw one line of text with the top of its line box at `(x, y)`
    fn draw_text(&mut self, text: &str, style: &Style, x: Pt, y: Pt) -> Result<(), LayoutError>;
}

/// Renders into a PDF [`Document`] using a regular and, optionally, a bold face.
///
/// Asking for a bold style without a bold face is a
/// [`LayoutError::StyleUnsupported`]; the regular face is never used in its place.
pub struct PdfBackend {
    geometry: Geometry,
    document: Document,
    regular: Id<Font>,
    bold: Option<Id<Font>>,
    page: Page,
}

impl PdfBackend {
    pub fn new(geometry: Geometry, regular: Font, bold: Option<Font>) -> PdfBackend {
        let mut document = Document::default();
        let regular = document.add_font(regular);
        let bold = bold.map(|font| document.add_font(font));

        PdfBackend {
            page: Page::new(geometry.page_size, Some(geometry.margins)),
            geometry,
            document,
            regular,
            bold,
        }
    }

    /// Metadata to write into the finished PDF
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// Number of pages opened so far, including the current one
    pub fn page_count(&self) -> usize {
        self.document.page_count() + 1
    }

    /// Close the current page and hand back the finished document
    pub fn finish(self) -> Document {
        let PdfBackend {
            mut document, page, ..
        } = self;
        document.add_page(page);
        document
    }

    fn font_for(&self, style: &Style) -> Result<Id<Font>, LayoutError> {
        if !style.size.is_finite() || style.size <= Pt(0.0) {
            return Err(LayoutError::StyleUnsupported { style: *style });
        }

        if style.bold {
            self.bold.ok_or(LayoutError::StyleUnsupported { style: *style })
        } else {
            Ok(self.regular)
        }
    }

    fn face(&self, id: Id<Font>) -> Result<&Font, LayoutError> {
        self.document
            .fonts
            .get(id)
            .ok_or(LayoutError::Pdf(crate::PDFError::FontMissing))
    }
}

impl FontMetrics for PdfBackend {
    fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError> {
        let font = self.face(self.font_for(style)?)?;
        Ok(font.width_of_text(text, style.size))
    }
}

impl RenderingBackend for PdfBackend {
    fn page_width(&self) -> Pt {
        self.geometry.page_width()
    }

    fn page_height(&self) -> Pt {
        self.geometry.page_height()
    }

    fn add_page(&mut self) -> Result<(), LayoutError> {
        let next = Page::new(self.geometry.page_size, Some(self.geometry.margins));
        let finished = std::mem::replace(&mut self.page, next);
        self.document.add_page(finished);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: &Style, x: Pt, y: Pt) -> Result<(), LayoutError> {
        let id = self.font_for(style)?;
        let ascent = self.face(id)?.ascent(style.size);

        // top-down line box => bottom-up baseline
        let baseline = self.geometry.page_height() - y - ascent;
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id,
                size: style.size,
            },
            coords: (x, baseline),
        });
        Ok(())
    }
}
