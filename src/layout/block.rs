use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Horizontal placement of each wrapped line. Alignment never changes the wrap
/// width; it only decides where a finished line is drawn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Start every line at the left margin
    #[default]
    Left,
    /// Centre every line on the page
    Center,
}

/// How a block's text is set
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Set in the bold face instead of the regular one
    #[serde(default)]
    pub bold: bool,
    /// Font size; the line height is this times the geometry's line-height factor
    pub size: Pt,
    /// Horizontal placement of every line of the block
    #[serde(default)]
    pub align: Align,
}

impl Style {
    pub fn regular(size: Pt) -> Style {
        Style {
            bold: false,
            size,
            align: Align::Left,
        }
    }

    pub fn bold(size: Pt) -> Style {
        Style {
            bold: true,
            ..Style::regular(size)
        }
    }

    pub fn centered(self) -> Style {
        Style {
            align: Align::Center,
            ..self
        }
    }

    /// Hashable identity of the style as far as measurement is concerned.
    /// Alignment does not change a width, so it is left out.
    pub(crate) fn metrics_key(&self) -> (bool, u32) {
        (self.bold, self.size.0.to_bits())
    }
}

/// One ordered unit of styled text. `text` may contain `\n` forced breaks;
/// callers encode spacing between paragraphs as blank blocks or trailing
/// breaks, the writer adds none of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub style: Style,
    /// Minimum vertical room to have left on the page before the first line of
    /// this block is placed, e.g. a heading plus the first line of its body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_space: Option<Pt>,
}

impl Block {
    pub fn new<S: Into<String>>(text: S, style: Style) -> Block {
        Block {
            text: text.into(),
            style,
            min_space: None,
        }
    }

    /// Left-aligned regular text
    pub fn body<S: Into<String>>(text: S, size: Pt) -> Block {
        Block::new(text, Style::regular(size))
    }

    /// Centred bold text
    pub fn heading<S: Into<String>>(text: S, size: Pt) -> Block {
        Block::new(text, Style::bold(size).centered())
    }

    /// Centred regular text
    pub fn centered<S: Into<String>>(text: S, size: Pt) -> Block {
        Block::new(text, Style::regular(size).centered())
    }

    /// An empty line of the given size, used to space paragraphs apart
    pub fn blank(size: Pt) -> Block {
        Block::new("", Style::regular(size))
    }

    /// Ask for at least `space` of room before this block starts
    pub fn with_min_space(self, space: Pt) -> Block {
        Block {
            min_space: Some(space),
            ..self
        }
    }
}
