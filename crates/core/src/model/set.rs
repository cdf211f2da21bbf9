//! Chainable element filters.

use crate::error::{PdfError, Result};

use super::element::{Content, ElementRef};
use super::query::{BoxQuery, Containment};

/// An ordered selection of elements.
///
/// Filters never modify the set they are called on; each returns a new
/// set, so query chains can branch freely.
///
/// ```ignore
/// let totals = doc.everything().text().containing_text("Total");
/// let first = totals.first()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSet<'a> {
    elements: Vec<ElementRef<'a>>,
}

impl<'a> ElementSet<'a> {
    pub fn new(elements: Vec<ElementRef<'a>>) -> Self {
        Self { elements }
    }

    /// All members, in order.
    pub fn all(&self) -> &[ElementRef<'a>] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<ElementRef<'a>> {
        self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementRef<'a>> {
        self.elements.iter()
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Keeps the members matching `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&ElementRef<'a>) -> bool,
    {
        Self::new(
            self.elements
                .iter()
                .filter(|e| predicate(*e))
                .copied()
                .collect(),
        )
    }

    pub fn vertical(&self) -> Self {
        self.filter(|e| *e.content() == Content::VerticalLine)
    }

    pub fn horizontal(&self) -> Self {
        self.filter(|e| *e.content() == Content::HorizontalLine)
    }

    pub fn lines(&self) -> Self {
        self.filter(|e| e.is_line())
    }

    pub fn text(&self) -> Self {
        self.filter(|e| e.is_text())
    }

    /// Half-open box filter: keeps elements whose top-left or bottom-right
    /// corner lies in `[x1, x2) x [y1, y2)`.
    pub fn inside_box(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if !(x1 <= x2 && y1 <= y2) {
            return Err(PdfError::InvalidBox { x1, y1, x2, y2 });
        }
        let half_open = |x: f64, y: f64| x1 <= x && x < x2 && y1 <= y && y < y2;
        Ok(self.filter(|e| half_open(e.x1(), e.y1()) || half_open(e.x2(), e.y2())))
    }

    /// Box filter driven by a [`BoxQuery`] and a containment mode.
    pub fn inside(&self, query: &BoxQuery, mode: Containment) -> Self {
        self.filter(|e| query.matches(e, mode))
    }

    /// Case-sensitive substring match on text elements. Lines never match.
    pub fn containing_text(&self, needle: &str) -> Self {
        self.filter(|e| e.text().is_some_and(|t| t.contains(needle)))
    }

    /// Same members, stably ordered by document position.
    pub fn sorted(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.sort_by(|a, b| {
            a.position_in_document()
                .total_cmp(&b.position_in_document())
        });
        Self::new(elements)
    }

    pub fn get(&self, index: usize) -> Result<ElementRef<'a>> {
        self.elements
            .get(index)
            .copied()
            .ok_or(PdfError::NoSuchElement { index })
    }

    pub fn first(&self) -> Result<ElementRef<'a>> {
        self.get(0)
    }

    pub fn second(&self) -> Result<ElementRef<'a>> {
        self.get(1)
    }
}

impl<'a> IntoIterator for ElementSet<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = std::vec::IntoIter<ElementRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ElementSet<'a> {
    type Item = &'s ElementRef<'a>;
    type IntoIter = std::slice::Iter<'s, ElementRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a> FromIterator<ElementRef<'a>> for ElementSet<'a> {
    fn from_iter<I: IntoIterator<Item = ElementRef<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
