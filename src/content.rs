//! Content stream generation for page text.

use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use crate::PDFError;
use id_arena::Arena;
use std::io::Write;

/// Renders text spans to a PDF content stream. Font changes are only emitted
/// when the font or size differs from the previous span.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_spans(spans: &[SpanLayout], fonts: &Arena<Font>) -> Result<Vec<u8>, PDFError> {
    let mut content: Vec<u8> = Vec::default();
    if spans.is_empty() {
        return Ok(content);
    }

    write!(content, "q\n")?;
    // all document text is set in solid black
    write!(content, "0 g\n")?;

    let mut current_font: Option<SpanFont> = None;
    for span in spans.iter() {
        let font = fonts.get(span.font.id).ok_or(PDFError::FontMissing)?;

        write!(content, "BT\n")?;
        if current_font != Some(span.font) {
            write!(content, "/F{} {} Tf\n", span.font.id.index(), span.font.size)?;
            current_font = Some(span.font);
        }
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(content, "{:04x}", font.glyph_id(ch))?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(content)
}
