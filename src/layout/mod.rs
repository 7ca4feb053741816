//! The text-flow and pagination engine.
//!
//! Content arrives as an ordered list of [`Block`]s. The
//! [`DocumentWriter`](crate::layout::DocumentWriter) wraps each block to the
//! content width with [`wrap()`](crate::layout::wrap()), reserves one line height
//! per line from a [`PageCursor`](crate::layout::PageCursor) and draws each line
//! through a [`RenderingBackend`](crate::RenderingBackend). All geometry comes
//! from a single [`Geometry`](crate::layout::Geometry) value, so every block of
//! a document shares the same margins, units and page-break threshold.
//!
//! # Example
//!
//! ```no_run
//! use pdf_flow::layout::{Block, DocumentWriter, Geometry, Margins};
//! use pdf_flow::{pagesize, Font, In, PdfBackend, Pt};
//!
//! let regular = Font::load(std::fs::read("Regular.ttf").unwrap()).unwrap();
//! let bold = Font::load(std::fs::read("Bold.ttf").unwrap()).unwrap();
//!
//! let geometry = Geometry::new(pagesize::LETTER, Margins::all(In(1.0))).unwrap();
//! let backend = PdfBackend::new(geometry, regular, Some(bold));
//!
//! let blocks = vec![
//!     Block::heading("LEASE AGREEMENT", Pt(16.0)).with_min_space(Pt(60.0)),
//!     Block::blank(Pt(11.0)),
//!     Block::body("This agreement is made between the parties below.", Pt(11.0)),
//! ];
//!
//! let rendered = DocumentWriter::new(geometry, backend)
//!     .unwrap()
//!     .render(&blocks)
//!     .unwrap();
//! let out = std::fs::File::create("lease.pdf").unwrap();
//! rendered.backend.finish().write(out).unwrap();
//! ```

mod block;
mod cursor;
mod geometry;
mod margins;
mod metrics;
mod wrap;
mod writer;

pub use block::*;
pub use cursor::*;
pub use geometry::*;
pub use margins::*;
pub use metrics::*;
pub use wrap::*;
pub use writer::*;
