//! Renders a JSON document description to a PDF.
//!
//! ```text
//! cargo run --example agreement -- blocks.json Regular.ttf [Bold.ttf] > out.pdf
//! ```
//!
//! The JSON holds the page geometry, an optional title and the ordered blocks:
//!
//! ```json
//! {
//!   "title": "Residential Lease",
//!   "geometry": {
//!     "page_size": [612.0, 792.0],
//!     "margins": { "top": 72, "right": 72, "bottom": 72, "left": 72 }
//!   },
//!   "blocks": [
//!     { "text": "RESIDENTIAL LEASE", "style": { "bold": true, "size": 16, "align": "center" } },
//!     { "text": "", "style": { "size": 11 } },
//!     { "text": "This lease is made between ...", "style": { "size": 11 } }
//!   ]
//! }
//! ```
//!
//! With no JSON file (`-`), a sample agreement filled with filler clauses is used.

use pdf_flow::layout::{Block, DocumentWriter, Geometry, Margins, Style};
use pdf_flow::{pagesize, Font, In, Info, PdfBackend, Pt};
use serde::Deserialize;

#[derive(Deserialize)]
struct DocumentDescription {
    #[serde(default)]
    title: Option<String>,
    geometry: Geometry,
    blocks: Vec<Block>,
}

fn sample() -> DocumentDescription {
    let geometry =
        Geometry::new(pagesize::LETTER, Margins::all(In(1.0))).expect("letter fits 1in margins");
    let mut blocks = vec![
        Block::heading("MUTUAL NON-DISCLOSURE AGREEMENT", Pt(16.0)).with_min_space(Pt(48.0)),
        Block::blank(Pt(11.0)),
        Block::body(
            "This agreement is entered into by Acme Widgets, Inc. and Jane Roe\n\
             on the first day of March.",
            Pt(11.0),
        ),
        Block::blank(Pt(11.0)),
    ];
    for (number, words) in [(1, 80), (2, 140), (3, 60), (4, 220), (5, 90)] {
        let heading = Block::new(format!("{number}. OBLIGATIONS"), Style::bold(Pt(12.0)));
        blocks.push(heading.with_min_space(Pt(40.0)));
        blocks.push(Block::body(lipsum::lipsum(words), Pt(11.0)));
        blocks.push(Block::blank(Pt(11.0)));
    }
    blocks.push(Block::body("_______________________\nSignature", Pt(11.0)));

    DocumentDescription {
        title: Some("Mutual Non-Disclosure Agreement".into()),
        geometry,
        blocks,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (description, regular, bold) = match args.as_slice() {
        [description, regular, rest @ ..] => (description, regular, rest.first()),
        _ => {
            eprintln!("usage: agreement <blocks.json | -> <regular.ttf> [bold.ttf] > out.pdf");
            std::process::exit(2);
        }
    };

    let description: DocumentDescription = if description == "-" {
        sample()
    } else {
        serde_json::from_slice(&std::fs::read(description)?)?
    };

    let regular = Font::load(std::fs::read(regular)?)?;
    let bold = bold.map(|path| std::fs::read(path)).transpose()?.map(Font::load).transpose()?;

    let mut backend = PdfBackend::new(description.geometry, regular, bold);
    if let Some(title) = description.title {
        backend.set_info(Info::new().title(title));
    }

    let rendered = DocumentWriter::new(description.geometry, backend)?.render(&description.blocks)?;
    log::info!("{} pages", rendered.summary.pages);

    rendered.backend.finish().write(std::io::stdout().lock())?;
    Ok(())
}
