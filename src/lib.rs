//! Lays ordered, styled text blocks out across fixed-size pages and writes the
//! result as a PDF.
//!
//! The [`layout`] module is the engine: line wrapping, the page cursor and the
//! document writer. It draws through the [`RenderingBackend`] trait; [`PdfBackend`]
//! is the implementation that produces PDF documents with embedded fonts.

mod backend;
pub use backend::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// The text-flow and pagination engine
pub mod layout;

mod page;
pub use page::*;

/// Common paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
