use pdf_flow::layout::{Block, DocumentWriter, FontMetrics, Geometry, Margins, Style};
use pdf_flow::{pagesize, Font, In, LayoutError, PdfBackend, Pt, RenderingBackend};

const FONT: &[u8] = include_bytes!("assets/DejaVuSansMono.ttf");

fn font() -> Font {
    Font::load(FONT.to_vec()).expect("can load font")
}

fn geometry() -> Geometry {
    Geometry::new(pagesize::LETTER, Margins::all(In(1.0))).expect("letter fits 1in margins")
}

#[test]
fn bold_without_a_bold_face_is_unsupported() {
    let mut backend = PdfBackend::new(geometry(), font(), None);
    let bold = Style::bold(Pt(10.0));

    let measured = backend.measure_width("abc", &bold);
    assert!(matches!(measured, Err(LayoutError::StyleUnsupported { style }) if style.bold));

    let drawn = backend.draw_text("abc", &bold, Pt(72.0), Pt(72.0));
    assert!(matches!(drawn, Err(LayoutError::StyleUnsupported { .. })));

    assert!(backend.measure_width("abc", &Style::regular(Pt(10.0))).is_ok());
}

#[test]
fn bold_uses_the_bold_face_when_one_is_loaded() {
    let backend = PdfBackend::new(geometry(), font(), Some(font()));
    let width = backend.measure_width("abc", &Style::bold(Pt(10.0))).unwrap();
    assert_eq!(width, font().width_of_text("abc", Pt(10.0)));
}

#[test]
fn non_positive_sizes_are_unsupported() {
    let backend = PdfBackend::new(geometry(), font(), None);
    for size in [0.0, -1.0, f32::INFINITY] {
        let result = backend.measure_width("a", &Style::regular(Pt(size)));
        assert!(matches!(result, Err(LayoutError::StyleUnsupported { .. })));
    }
}

#[test]
fn top_down_lines_become_pdf_baselines() {
    let geometry = geometry();
    let size = Pt(12.0);
    let rendered = DocumentWriter::new(geometry, PdfBackend::new(geometry, font(), None))
        .unwrap()
        .render(&[Block::body("Landlord: John Doe", size)])
        .unwrap();
    let document = rendered.backend.finish();

    let span = &document.page(0).expect("first page").contents[0];
    assert_eq!(span.text, "Landlord: John Doe");
    assert_eq!(span.coords.0, Pt(72.0));
    assert_eq!(
        span.coords.1,
        geometry.page_height() - geometry.top() - font().ascent(size)
    );
}

#[test]
fn first_page_is_open_before_anything_is_drawn() {
    let backend = PdfBackend::new(geometry(), font(), None);
    assert_eq!(backend.page_count(), 1);

    let document = backend.finish();
    assert_eq!(document.page_count(), 1);
    assert!(document.page(0).is_some_and(|page| page.is_empty()));
}

#[test]
fn finished_document_has_one_page_per_rendered_page() {
    let geometry = geometry();
    let blocks: Vec<Block> = (0..3)
        .map(|_| Block::body(lipsum::lipsum(400), Pt(10.0)))
        .collect();

    let rendered = DocumentWriter::new(geometry, PdfBackend::new(geometry, font(), None))
        .unwrap()
        .render(&blocks)
        .unwrap();
    assert!(rendered.summary.pages > 1);
    assert_eq!(rendered.backend.page_count(), rendered.summary.pages);

    let document = rendered.backend.finish();
    assert_eq!(document.page_count(), rendered.summary.pages);
    for index in 0..document.page_count() {
        assert!(document.page(index).is_some_and(|page| !page.is_empty()));
    }
}

#[test]
fn missing_glyphs_fall_back_to_the_replacement_character() {
    let font = font();
    let replacement = font.glyph_id('\u{FFFD}');
    assert_ne!(replacement, 0);
    assert_eq!(font.glyph_id('中'), replacement);
    assert_eq!(
        font.width_of_text("中", Pt(10.0)),
        font.width_of_text("\u{FFFD}", Pt(10.0))
    );
}

#[test]
fn written_pdf_embeds_the_font() {
    let geometry = geometry();
    let rendered = DocumentWriter::new(geometry, PdfBackend::new(geometry, font(), None))
        .unwrap()
        .render(&[
            Block::centered("NOTICE", Pt(14.0)),
            Block::body(lipsum::lipsum(60), Pt(10.0)),
        ])
        .unwrap();

    let mut out: Vec<u8> = Vec::new();
    rendered.backend.finish().write(&mut out).unwrap();

    let text = String::from_utf8_lossy(&out);
    assert!(out.starts_with(b"%PDF-"));
    for key in ["/Type0", "/CIDFontType2", "/ToUnicode", "/FontFile2", "/W ["] {
        assert!(text.contains(key), "missing {key}");
    }
    assert!(text.contains("/Count 1"));
}
