use super::{wrap, Align, Block, FontMetrics, Geometry, PageCursor, Style, WidthCache};
use crate::backend::RenderingBackend;
use crate::error::{LayoutError, RenderError};
use crate::units::Pt;

/// Totals for a finished render
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub blocks: usize,
    pub lines: usize,
    pub pages: usize,
}

/// The backend a render drew into, handed back once every block is placed
pub struct Rendered<B> {
    pub backend: B,
    pub summary: RenderSummary,
}

/// Lays an ordered list of [`Block`]s out across as many pages as they need.
///
/// A writer is built for exactly one document and consumed by
/// [`render`](DocumentWriter::render). Each block is wrapped to the content
/// width, every line reserves one line height from the [`PageCursor`], and the
/// line is drawn at the left margin or centred on the page. Blocks are never
/// reordered, dropped, or padded with spacing the caller did not ask for.
pub struct DocumentWriter<B: RenderingBackend> {
    geometry: Geometry,
    backend: B,
    cursor: PageCursor,
    widths: WidthCache,
}

impl<B: RenderingBackend> DocumentWriter<B> {
    /// Pair a geometry with a backend whose first page is already open. The
    /// backend's page size has to be the one the geometry describes.
    pub fn new(geometry: Geometry, backend: B) -> Result<DocumentWriter<B>, LayoutError> {
        geometry.validate()?;
        if backend.page_width() != geometry.page_width()
            || backend.page_height() != geometry.page_height()
        {
            return Err(LayoutError::InvalidGeometry(format!(
                "backend page is {}x{} but the geometry expects {}x{}",
                backend.page_width(),
                backend.page_height(),
                geometry.page_width(),
                geometry.page_height()
            )));
        }

        Ok(DocumentWriter {
            cursor: PageCursor::new(&geometry),
            geometry,
            backend,
            widths: WidthCache::new(),
        })
    }

    /// Render every block in order. The first failure aborts the whole render
    /// and reports the index of the block being laid out; nothing is retried.
    ///
    /// Empty lines (blank blocks, consecutive forced breaks) take up vertical
    /// space and can break pages, but are never passed to
    /// [`RenderingBackend::draw_text`].
    pub fn render(mut self, blocks: &[Block]) -> Result<Rendered<B>, RenderError> {
        let mut lines = 0;
        for (index, block) in blocks.iter().enumerate() {
            lines += self.render_block(index, block).map_err(RenderError::at(index))?;
        }

        let summary = RenderSummary {
            blocks: blocks.len(),
            lines,
            pages: self.cursor.page_index() + 1,
        };
        log::info!(
            "laid out {} blocks as {} lines over {} pages ({} width lookups cached)",
            summary.blocks,
            summary.lines,
            summary.pages,
            self.widths.hits()
        );

        Ok(Rendered {
            backend: self.backend,
            summary,
        })
    }

    fn render_block(&mut self, index: usize, block: &Block) -> Result<usize, LayoutError> {
        let style = &block.style;
        if !style.size.is_finite() || style.size <= Pt(0.0) {
            return Err(LayoutError::StyleUnsupported { style: *style });
        }

        let line_height = self.geometry.line_height(style.size);

        // measure everything up front; drawing needs the backend mutably
        let lines: Vec<(String, Pt)> = {
            let metrics = self.widths.with(&self.backend);
            wrap(&block.text, style, self.geometry.content_width(), &metrics)?
                .into_iter()
                .map(|line| {
                    let x = self.line_x(&line, style, &metrics)?;
                    Ok((line, x))
                })
                .collect::<Result<_, LayoutError>>()?
        };
        log::trace!("block {index} wrapped into {} lines", lines.len());

        if let Some(space) = block.min_space {
            if self.cursor.ensure_space(space, &mut self.backend)? {
                log::debug!(
                    "moved block {index} to page {} to keep it together",
                    self.cursor.page_index() + 1
                );
            }
        }

        for (line, x) in lines.iter() {
            let position = self.cursor.reserve(line_height, &mut self.backend)?;
            if !line.is_empty() {
                self.backend.draw_text(line, style, *x, position.y)?;
            }
        }

        Ok(lines.len())
    }

    fn line_x<M: FontMetrics + ?Sized>(
        &self,
        line: &str,
        style: &Style,
        metrics: &M,
    ) -> Result<Pt, LayoutError> {
        match style.align {
            Align::Left => Ok(self.geometry.margins.left),
            Align::Center if line.is_empty() => Ok(self.geometry.page_width() / 2.0),
            Align::Center => {
                let width = metrics.measure_width(line, style)?;
                Ok((self.geometry.page_width() - width) / 2.0)
            }
        }
    }
}
