#![allow(dead_code)]

use pdf_flow::layout::{FontMetrics, Geometry, Margins, Style};
use pdf_flow::{LayoutError, Pt, RenderingBackend};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddPage,
    Draw { text: String, x: Pt, y: Pt, style: Style },
}

/// Records every backend call. Each character is half the font size wide.
pub struct Recorder {
    pub width: Pt,
    pub height: Pt,
    pub calls: Vec<Call>,
    pub supports_bold: bool,
    /// Fail the n-th draw call (0-based)
    pub fail_draw: Option<usize>,
    draws: usize,
}

impl Recorder {
    pub fn new(geometry: &Geometry) -> Recorder {
        Recorder {
            width: geometry.page_width(),
            height: geometry.page_height(),
            calls: Vec::new(),
            supports_bold: true,
            fail_draw: None,
            draws: 0,
        }
    }

    pub fn draws(&self) -> Vec<(String, Pt, Pt)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw { text, x, y, .. } => Some((text.clone(), *x, *y)),
                Call::AddPage => None,
            })
            .collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::AddPage).count()
    }

    /// (page, y) of every draw, in order
    pub fn positions(&self) -> Vec<(usize, Pt)> {
        let mut page = 0;
        let mut positions = Vec::new();
        for call in self.calls.iter() {
            match call {
                Call::AddPage => page += 1,
                Call::Draw { y, .. } => positions.push((page, *y)),
            }
        }
        positions
    }
}

impl FontMetrics for Recorder {
    fn measure_width(&self, text: &str, style: &Style) -> Result<Pt, LayoutError> {
        if style.bold && !self.supports_bold {
            return Err(LayoutError::StyleUnsupported { style: *style });
        }
        Ok(Pt(text.chars().count() as f32 * style.size.0 * 0.5))
    }
}

impl RenderingBackend for Recorder {
    fn page_width(&self) -> Pt {
        self.width
    }

    fn page_height(&self) -> Pt {
        self.height
    }

    fn add_page(&mut self) -> Result<(), LayoutError> {
        self.calls.push(Call::AddPage);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: &Style, x: Pt, y: Pt) -> Result<(), LayoutError> {
        if style.bold && !self.supports_bold {
            return Err(LayoutError::StyleUnsupported { style: *style });
        }
        if self.fail_draw == Some(self.draws) {
            return Err(LayoutError::Backend("ink ran out".into()));
        }
        self.draws += 1;
        self.calls.push(Call::Draw {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
        Ok(())
    }
}

/// 300 x 200 page, 20pt margins all round, line height = font size.
/// At size 10 that is 16 lines per page and 52 characters per line.
pub fn geometry() -> Geometry {
    Geometry::new((Pt(300.0), Pt(200.0)), Margins::all(Pt(20.0)))
        .and_then(|g| g.with_line_height_factor(1.0))
        .expect("valid test geometry")
}
