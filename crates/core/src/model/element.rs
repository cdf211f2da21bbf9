//! Positioned page content.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Point};

use super::page::Page;

/// Handle to a page inside its owning [`Document`](super::Document).
///
/// Zero-based, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageId(pub(crate) usize);

impl PageId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an element carries: a text run or a ruling line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Content {
    Text(String),
    HorizontalLine,
    VerticalLine,
}

impl Content {
    pub fn is_text(&self) -> bool {
        matches!(self, Content::Text(_))
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Content::HorizontalLine | Content::VerticalLine)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(s) => f.write_str(s),
            Content::HorizontalLine => f.write_str("<horizontal line>"),
            Content::VerticalLine => f.write_str("<vertical line>"),
        }
    }
}

/// A text run or line segment in top-left-origin page coordinates.
///
/// Always `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    page: PageId,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    content: Content,
}

impl Element {
    /// Builds an element from a PDF-space (bottom-left origin) box.
    ///
    /// Corners may come in any order; the vertical axis is flipped against
    /// the page height.
    pub(crate) fn from_pdf(
        page: &Page,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        content: Content,
    ) -> Self {
        let (lo_y, hi_y) = (y1.min(y2), y1.max(y2));
        Self {
            page: page.id(),
            x1: x1.min(x2),
            y1: page.height() - hi_y,
            x2: x1.max(x2),
            y2: page.height() - lo_y,
            content,
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Text content; `None` for lines.
    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }

    pub fn is_text(&self) -> bool {
        self.content.is_text()
    }

    pub fn is_line(&self) -> bool {
        self.content.is_line()
    }

    /// Top-left corner.
    pub fn start(&self) -> Point {
        (self.x1, self.y1)
    }

    /// Bottom-right corner.
    pub fn end(&self) -> Point {
        (self.x2, self.y2)
    }

    /// Moves the end corner; only line defragmentation does this.
    pub(crate) fn extend_to(&mut self, end: Point) {
        self.x2 = end.0;
        self.y2 = end.1;
    }
}

impl HasBBox for Element {
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
    fn x2(&self) -> f64 {
        self.x2
    }
    fn y2(&self) -> f64 {
        self.y2
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.x1, self.y1, self.x2, self.y2, self.content
        )
    }
}

/// An element together with the page that owns it.
///
/// This is what queries hand out: the page link is what makes
/// [`ElementRef::position_in_document`] computable.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    page: &'a Page,
    element: &'a Element,
}

impl<'a> ElementRef<'a> {
    pub(crate) fn new(page: &'a Page, element: &'a Element) -> Self {
        Self { page, element }
    }

    pub fn owner(&self) -> &'a Page {
        self.page
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Key relative to the owning page's origin.
    pub fn position_on_page(&self) -> f64 {
        self.page
            .scale()
            .offset(self.page.width(), self.element.x1, self.element.y1)
    }

    /// Document-wide reading-order key: top-to-bottom, then left-to-right,
    /// pages in sequence.
    pub fn position_in_document(&self) -> f64 {
        self.page.position_in_document() + self.position_on_page()
    }
}

impl Deref for ElementRef<'_> {
    type Target = Element;
    fn deref(&self) -> &Self::Target {
        self.element
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.element, other.element)
    }
}

impl HasBBox for ElementRef<'_> {
    fn x1(&self) -> f64 {
        self.element.x1
    }
    fn y1(&self) -> f64 {
        self.element.y1
    }
    fn x2(&self) -> f64 {
        self.element.x2
    }
    fn y2(&self) -> f64 {
        self.element.y2
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Content, Document};
    use crate::utils::HasBBox;

    #[test]
    fn pdf_coordinates_are_flipped() {
        let mut doc = Document::new();
        let page = doc.add_page(100.0, 200.0).unwrap();
        page.add_element(10.0, 150.0, 40.0, 170.0, "abc");
        let e = &page.elements()[0];
        assert_eq!(e.bbox(), (10.0, 30.0, 40.0, 50.0));
        assert_eq!(e.height(), 20.0);
        assert_eq!(e.text(), Some("abc"));
    }

    #[test]
    fn corners_are_normalized() {
        let mut doc = Document::new();
        let page = doc.add_page(100.0, 200.0).unwrap();
        page.add_element(40.0, 170.0, 10.0, 150.0, Content::HorizontalLine);
        let e = &page.elements()[0];
        assert!(e.x1() <= e.x2());
        assert!(e.y1() <= e.y2());
        assert_eq!(e.bbox(), (10.0, 30.0, 40.0, 50.0));
        assert_eq!(e.text(), None);
    }

    #[test]
    fn display_uses_content() {
        let mut doc = Document::new();
        let page = doc.add_page(10.0, 10.0).unwrap();
        page.add_element(0.0, 5.0, 5.0, 5.0, Content::VerticalLine);
        assert_eq!(page.elements()[0].to_string(), "0, 5, 5, 5, <vertical line>");
    }
}
