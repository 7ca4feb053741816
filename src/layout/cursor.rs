use super::Geometry;
use crate::backend::RenderingBackend;
use crate::error::LayoutError;
use crate::units::Pt;

/// Where a reserved line goes: the page it lands on and the top of its line box
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CursorPosition {
    pub page: usize,
    pub y: Pt,
}

/// The vertical write position of one document.
///
/// `y` grows downward from the top edge of the page. The first page is already
/// open when the cursor is created; further pages are only requested from the
/// backend when a line would not fit, never ahead of time.
#[derive(Debug, Clone)]
pub struct PageCursor {
    top: Pt,
    limit: Pt,
    page_index: usize,
    y: Pt,
}

impl PageCursor {
    pub fn new(geometry: &Geometry) -> PageCursor {
        PageCursor {
            top: geometry.top(),
            limit: geometry.bottom_limit(),
            page_index: 0,
            y: geometry.top(),
        }
    }

    /// 0-based index of the page currently being written
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    /// Room left between the cursor and the bottom margin
    pub fn remaining(&self) -> Pt {
        self.limit - self.y
    }

    /// True when nothing has been placed on the current page yet
    pub fn is_at_top(&self) -> bool {
        self.y == self.top
    }

    /// Claim `line_height` of vertical space for the next line, breaking to a
    /// new page first if the line box would cross the bottom margin. Returns
    /// the position to draw the line at.
    pub fn reserve<B: RenderingBackend + ?Sized>(
        &mut self,
        line_height: Pt,
        backend: &mut B,
    ) -> Result<CursorPosition, LayoutError> {
        let available = self.limit - self.top;
        if line_height > available {
            return Err(LayoutError::LineTooTall {
                line_height,
                available,
            });
        }

        if self.y + line_height > self.limit {
            self.break_page(backend)?;
        }

        let position = CursorPosition {
            page: self.page_index,
            y: self.y,
        };
        self.y += line_height;
        Ok(position)
    }

    /// Look-ahead for content that should not start at the very bottom of a
    /// page (a heading and the first line after it). Breaks the page when less
    /// than `height` remains, unless the current page is still empty. Returns
    /// whether a break happened.
    pub fn ensure_space<B: RenderingBackend + ?Sized>(
        &mut self,
        height: Pt,
        backend: &mut B,
    ) -> Result<bool, LayoutError> {
        if self.is_at_top() || self.y + height <= self.limit {
            return Ok(false);
        }

        self.break_page(backend)?;
        Ok(true)
    }

    fn break_page<B: RenderingBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> Result<(), LayoutError> {
        backend.add_page()?;
        self.page_index += 1;
        self.y = self.top;
        log::debug!("started page {}", self.page_index + 1);
        Ok(())
    }
}
