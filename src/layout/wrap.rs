use super::{FontMetrics, Style};
use crate::error::LayoutError;
use crate::units::Pt;

/// Whitespace that separates tokens. No-break spaces glue their neighbours
/// into one token so e.g. "§ 4" never ends up split across two lines.
fn is_break_space(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// Wraps a paragraph into lines no wider than `max_width`.
///
/// # Wrapping Behavior
///
/// 1. The text is first split on forced breaks (`\n`, with `\r\n` and `\r`
///    treated the same). Each segment is wrapped on its own, so a forced break
///    always starts a new line.
/// 2. Within a segment, whitespace-separated tokens are added greedily while
///    `line + " " + token` still measures within `max_width`. No-break spaces
///    (U+00A0, U+2007, U+202F) do not separate tokens; they stay inside the
///    token and are measured as part of it.
/// 3. A token that is wider than `max_width` on its own is placed alone on its
///    own line, unsplit. Breaking inside a token would corrupt the content.
/// 4. A segment with no tokens (an empty string, two consecutive forced breaks,
///    or whitespace only) produces one empty line.
///
/// Wrapping collapses runs of whitespace at wrap points to nothing and between
/// tokens on the same line to a single space. The only error is a failed
/// measurement, which is returned as-is.
pub fn wrap<M: FontMetrics + ?Sized>(
    paragraph: &str,
    style: &Style,
    max_width: Pt,
    metrics: &M,
) -> Result<Vec<String>, LayoutError> {
    // normalize newlines
    let paragraph = paragraph.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for segment in paragraph.split('\n') {
        wrap_segment(segment, style, max_width, metrics, &mut lines)?;
    }

    Ok(lines)
}

fn wrap_segment<M: FontMetrics + ?Sized>(
    segment: &str,
    style: &Style,
    max_width: Pt,
    metrics: &M,
    lines: &mut Vec<String>,
) -> Result<(), LayoutError> {
    let mut line = String::new();

    for token in segment.split(is_break_space).filter(|t| !t.is_empty()) {
        if line.is_empty() {
            // first token of a line always goes in, even when it alone overflows
            line.push_str(token);
            continue;
        }

        let candidate = format!("{line} {token}");
        if metrics.measure_width(&candidate, style)? <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, token.to_string()));
        }
    }

    lines.push(line);
    Ok(())
}
