use crate::layout::Style;
use crate::units::Pt;
use thiserror::Error;

/// Errors raised while assembling or serialising the PDF object model
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("page is listed in the page order but missing from the document")]
    /// A page id in the page order does not resolve to a page
    PageMissing,

    #[error("span refers to a font that was never added to the document")]
    /// A text span refers to a font that isn't in the document
    FontMissing,
}

/// Errors raised by the layout engine or by the rendering backend it drives
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The backend cannot render the requested font / size combination. The
    /// engine never substitutes another style.
    #[error("the rendering backend does not support style {style:?}")]
    StyleUnsupported { style: Style },

    /// A single line is taller than the whole content area, so no page break
    /// can ever make room for it
    #[error("line height {line_height} exceeds the available content height {available}")]
    LineTooTall { line_height: Pt, available: Pt },

    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error(transparent)]
    Pdf(#[from] PDFError),

    /// Failure reported by a third-party [`RenderingBackend`](crate::RenderingBackend)
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// A render aborted while laying out the block at `block_index`. No partial
/// document is produced.
#[derive(Error, Debug)]
#[error("failed to render block {block_index}: {source}")]
pub struct RenderError {
    pub block_index: usize,
    #[source]
    pub source: LayoutError,
}

impl RenderError {
    pub(crate) fn at(block_index: usize) -> impl FnOnce(LayoutError) -> RenderError {
        move |source| RenderError {
            block_index,
            source,
        }
    }
}
