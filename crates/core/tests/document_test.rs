//! Port of tests/test_drunken_child_in_the_fog.py, plus end-to-end
//! document queries over layout dumps.

use pdfquery_core::prelude::*;

// Embed test fixtures at compile time
const HELLO_LAYOUT: &[u8] = include_bytes!("fixtures/layout/hello.layout.json");
const RULED_LAYOUT: &[u8] = include_bytes!("fixtures/layout/ruled.layout.json");
const DIAGONAL_LAYOUT: &[u8] = include_bytes!("fixtures/layout/diagonal.layout.json");

fn load(data: &[u8]) -> Document {
    let dump = LayoutDump::from_slice(data).expect("Failed to parse layout dump");
    parse_document(dump, None).expect("Failed to build document")
}

fn render(set: &ElementSet<'_>) -> String {
    set.iter()
        .map(|e| format!("{} | {}", e.page(), e.element()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// test_content
// ============================================================================

/// Original Python test:
/// ```python
/// def test_content(test_file):
///     document = DrunkenChildInTheFog(test_file).get_document()
///     e = document.everything()
///     assert e.count() > 0
///     assert e.lines().count() == 0
///     assert e.lines().horizontal().count() == 0
///     assert e.lines().vertical().count() == 0
///     assert e.text().count() > 0
///     assert e.containing_text("Hello").count() == 1
/// ```
#[test]
fn test_content() {
    let document = load(HELLO_LAYOUT);

    let e = document.everything();
    assert_eq!(e.count(), 1);

    assert_eq!(e.lines().count(), 0);
    assert_eq!(e.lines().horizontal().count(), 0);
    assert_eq!(e.lines().vertical().count(), 0);
    assert!(e.text().count() > 0);
    assert_eq!(e.containing_text("Hello").count(), 1);
}

#[test]
fn test_hello_first_and_second() {
    let document = load(HELLO_LAYOUT);
    let hello = document.everything().containing_text("Hello");

    let first = hello.first().expect("Missing element");
    assert_eq!(first.text(), Some("Hello World"));
    assert_eq!(first.bbox(), (72.0, 80.0, 151.5, 92.0));

    let err = hello.second().unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Multi-page layouts with rules and figures
// ============================================================================

#[test]
fn test_ruled_document_reading_order() {
    let document = load(RULED_LAYOUT);
    insta::assert_snapshot!(render(&document.everything()), @r"
    0 | 72, 80, 200, 92, Hello World
    0 | 72, 102, 540, 102, <horizontal line>
    0 | 540, 102, 540, 692, <vertical line>
    0 | 72, 180, 150, 192, Total: 42
    1 | 72, 30, 120, 42, Page 2
    ");
}

#[test]
fn test_ruled_document_fragments_merged() {
    let document = load(RULED_LAYOUT);
    let lines = document.everything().lines();
    assert_eq!(lines.horizontal().count(), 1);
    assert_eq!(lines.vertical().count(), 1);

    let rule = lines.horizontal().first().unwrap();
    assert_eq!((rule.x1(), rule.x2()), (72.0, 540.0));
}

#[test]
fn test_defrag_disabled_keeps_fragments() {
    let dump = LayoutDump::from_slice(RULED_LAYOUT).unwrap();
    let document = DocumentBuilder::new()
        .defrag(DefragMode::Disabled)
        .build(dump)
        .unwrap();
    assert_eq!(document.everything().horizontal().count(), 2);
}

#[test]
fn test_second_page_sorts_after_first() {
    let document = load(RULED_LAYOUT);
    let page_two = document.page(1).unwrap().everything();
    let start = page_two.first().unwrap().position_in_document();
    for e in document.page(0).unwrap().everything() {
        assert!(e.position_in_document() < start);
    }
    assert_eq!(
        document.page(1).unwrap().previous(),
        Some(document.page(0).unwrap().id())
    );
}

#[test]
fn test_page_queries() {
    let document = load(RULED_LAYOUT);
    let page = document.page(0).unwrap();

    let full = page.bounds().unwrap();
    assert_eq!(page.inside(&full, Containment::Whole).count(), page.elements().len());

    // below the horizontal rule: the total, and the vertical rule by its end
    let below = page.starting_from(103.0, 0.0).unwrap();
    assert_eq!(below.count(), 2);
    assert_eq!(below.vertical().count(), 1);
    assert_eq!(below.text().first().unwrap().text(), Some("Total: 42"));

    // the header band, tiled so that y = 102 belongs to the lower band only
    let header = BoxQuery::new(0.0, 0.0, 612.0, 102.0)
        .unwrap()
        .include_bottom(false);
    let in_header = page.inside(&header, Containment::Whole);
    assert_eq!(in_header.count(), 1);
    assert_eq!(in_header.first().unwrap().text(), Some("Hello World"));

    let fuzzy = header.with_fuzzy_border(0.5);
    assert_eq!(page.inside(&fuzzy, Containment::Whole).count(), 2);
    assert_eq!(page.inside(&fuzzy, Containment::Starts).count(), 3);

    assert_eq!(page.containing_text("Total").count(), 1);
    assert_eq!(page.containing_text("total").count(), 0);
}

#[test]
fn test_diagonal_line_aborts_parse() {
    let dump = LayoutDump::from_slice(DIAGONAL_LAYOUT).unwrap();
    match parse_document(dump, None) {
        Err(PdfError::UnknownLine { p0, p1 }) => {
            assert_eq!(p0, (0.0, 0.0));
            assert_eq!(p1, (5.0, 5.0));
        }
        other => panic!("expected UnknownLine, got {other:?}"),
    }
}

#[test]
fn test_forbidden_document() {
    let dump = LayoutDump::from_slice(HELLO_LAYOUT)
        .unwrap()
        .forbid_extraction();
    assert!(matches!(
        parse_document(dump, None),
        Err(PdfError::TextExtractionNotAllowed)
    ));
}

#[test]
fn test_sort_and_defrag_are_idempotent() {
    let mut document = load(RULED_LAYOUT);
    let before: Vec<Element> = document.page(0).unwrap().elements().to_vec();
    document.sort();
    assert_eq!(document.page(0).unwrap().elements(), &before[..]);
}
