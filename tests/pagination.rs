mod common;

use common::{geometry, Call, Recorder};
use pdf_flow::layout::{Block, DocumentWriter, Style};
use pdf_flow::Pt;

fn render(blocks: &[Block]) -> Recorder {
    let geometry = geometry();
    let writer = DocumentWriter::new(geometry, Recorder::new(&geometry)).unwrap();
    writer.render(blocks).unwrap().backend
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn single_short_left_block_draws_once_at_the_margins() {
    let recorder = render(&[Block::body("Tenant: Jane Roe", Pt(10.0))]);
    assert_eq!(
        recorder.draws(),
        vec![("Tenant: Jane Roe".to_string(), Pt(20.0), Pt(20.0))]
    );
    assert_eq!(recorder.page_breaks(), 0);
}

#[test]
fn overflowing_block_breaks_exactly_once_where_the_page_fills() {
    let recorder = render(&[Block::body(numbered_lines(20), Pt(10.0))]);

    assert_eq!(recorder.page_breaks(), 1);
    let break_at = recorder
        .calls
        .iter()
        .position(|c| *c == Call::AddPage)
        .unwrap();
    // 16 lines of 10pt fill 20..180; the 17th starts the next page
    assert_eq!(break_at, 16);
    match &recorder.calls[break_at + 1] {
        Call::Draw { text, y, .. } => {
            assert_eq!(text, "line 16");
            assert_eq!(*y, Pt(20.0));
        }
        other => panic!("expected a draw after the page break, got {other:?}"),
    }
    assert_eq!(recorder.positions()[15], (0, Pt(170.0)));
}

#[test]
fn centered_line_is_centred_on_the_page() {
    let recorder = render(&[Block::centered("abcd", Pt(10.0))]);
    // "abcd" measures 20 on a 300 wide page
    assert_eq!(recorder.draws(), vec![("abcd".to_string(), Pt(140.0), Pt(20.0))]);
}

#[test]
fn centring_does_not_change_the_wrap_width() {
    let text = "word ".repeat(40);
    let left = render(&[Block::body(text.clone(), Pt(10.0))]);
    let centred = render(&[Block::centered(text, Pt(10.0))]);

    let left: Vec<String> = left.draws().into_iter().map(|d| d.0).collect();
    let centred: Vec<String> = centred.draws().into_iter().map(|d| d.0).collect();
    assert_eq!(left, centred);
}

#[test]
fn consecutive_forced_breaks_keep_an_empty_line_of_space() {
    let recorder = render(&[Block::body("WITNESS\n\nSignature", Pt(10.0))]);
    assert_eq!(
        recorder.draws(),
        vec![
            ("WITNESS".to_string(), Pt(20.0), Pt(20.0)),
            ("Signature".to_string(), Pt(20.0), Pt(40.0)),
        ]
    );
}

#[test]
fn oversized_token_takes_exactly_one_line_of_its_own() {
    let long = "x".repeat(80);
    let with = render(&[Block::body(format!("aa {long} bb"), Pt(10.0))]);
    let without = render(&[Block::body("aa bb", Pt(10.0))]);

    let lines: Vec<String> = with.draws().into_iter().map(|d| d.0).collect();
    assert_eq!(lines, vec!["aa".to_string(), long, "bb".to_string()]);
    assert_eq!(without.draws().len(), 1);
}

#[test]
fn blank_blocks_space_paragraphs_without_drawing() {
    let recorder = render(&[
        Block::body("first", Pt(10.0)),
        Block::blank(Pt(10.0)),
        Block::body("second", Pt(10.0)),
    ]);
    let ys: Vec<Pt> = recorder.draws().into_iter().map(|d| d.2).collect();
    assert_eq!(ys, vec![Pt(20.0), Pt(40.0)]);
}

#[test]
fn blocks_follow_each_other_without_extra_spacing() {
    let recorder = render(&[
        Block::heading("AGREEMENT", Pt(20.0)),
        Block::body("body", Pt(10.0)),
    ]);
    let draws = recorder.draws();
    assert_eq!(draws[0].2, Pt(20.0));
    assert_eq!(draws[1].2, Pt(40.0));
}

#[test]
fn min_space_moves_a_heading_to_the_next_page() {
    // 14 lines leave 20pt on the page
    let recorder = render(&[
        Block::body(numbered_lines(14), Pt(10.0)),
        Block::heading("Section 2", Pt(10.0)).with_min_space(Pt(30.0)),
        Block::body("first clause", Pt(10.0)),
    ]);

    assert_eq!(recorder.page_breaks(), 1);
    let positions = recorder.positions();
    assert_eq!(positions[14], (1, Pt(20.0)));
    assert_eq!(positions[15], (1, Pt(30.0)));
}

#[test]
fn min_space_is_ignored_when_it_already_fits() {
    let recorder = render(&[
        Block::body(numbered_lines(10), Pt(10.0)),
        Block::heading("Section 2", Pt(10.0)).with_min_space(Pt(30.0)),
    ]);
    assert_eq!(recorder.page_breaks(), 0);
}

#[test]
fn min_space_never_breaks_a_fresh_page() {
    let recorder = render(&[Block::heading("Title", Pt(10.0)).with_min_space(Pt(1000.0))]);
    assert_eq!(recorder.page_breaks(), 0);
    assert_eq!(recorder.positions(), vec![(0, Pt(20.0))]);
}

#[test]
fn summary_counts_blocks_lines_and_pages() {
    let geometry = geometry();
    let writer = DocumentWriter::new(geometry, Recorder::new(&geometry)).unwrap();
    let rendered = writer
        .render(&[
            Block::body(numbered_lines(40), Pt(10.0)),
            Block::blank(Pt(10.0)),
        ])
        .unwrap();

    assert_eq!(rendered.summary.blocks, 2);
    assert_eq!(rendered.summary.lines, 41);
    assert_eq!(rendered.summary.pages, 3);
    assert_eq!(rendered.backend.page_breaks(), 2);
}

#[test]
fn empty_document_stays_on_the_implicit_first_page() {
    let geometry = geometry();
    let writer = DocumentWriter::new(geometry, Recorder::new(&geometry)).unwrap();
    let rendered = writer.render(&[]).unwrap();
    assert!(rendered.backend.calls.is_empty());
    assert_eq!(rendered.summary.pages, 1);
}

#[test]
fn styles_reach_the_backend_unchanged() {
    let style = Style::bold(Pt(12.0)).centered();
    let recorder = render(&[pdf_flow::layout::Block::new("TERMS", style)]);
    match &recorder.calls[0] {
        Call::Draw { style: drawn, .. } => assert_eq!(*drawn, style),
        other => panic!("unexpected call {other:?}"),
    }
}
