//! The page sequence and its document-wide reading order.

use itertools::Itertools;
use tracing::debug;

use crate::error::{PdfError, Result};

use super::element::{ElementRef, PageId};
use super::page::{DefragMode, Page};
use super::position::PositionScale;
use super::set::ElementSet;

/// An ordered sequence of pages.
///
/// Pages are appended while parsing; afterwards the document is only
/// queried. Each page links to its predecessor by [`PageId`], never by
/// ownership.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
    scale: PositionScale,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(scale: PositionScale) -> Self {
        Self {
            pages: Vec::new(),
            scale,
        }
    }

    pub fn scale(&self) -> PositionScale {
        self.scale
    }

    /// Appends a page after the current last page and returns it for
    /// population. Dimensions must be finite and positive.
    pub fn add_page(&mut self, width: f64, height: f64) -> Result<&mut Page> {
        let number = self.pages.len() + 1;
        self.add_source_page(number, width, height)
    }

    /// Like [`Document::add_page`], but records `number` as the page's
    /// 1-based position in its source.
    pub fn add_source_page(&mut self, number: usize, width: f64, height: f64) -> Result<&mut Page> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PdfError::InvalidPageSize { width, height });
        }
        let page = Page::new(
            PageId(self.pages.len()),
            number,
            width,
            height,
            self.pages.last(),
            self.scale,
        );
        self.pages.push(page);
        let idx = self.pages.len() - 1;
        Ok(&mut self.pages[idx])
    }

    pub fn get_pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Result<&Page> {
        self.pages.get(index).ok_or(PdfError::PageNotFound(index))
    }

    pub fn page_mut(&mut self, index: usize) -> Result<&mut Page> {
        self.pages
            .get_mut(index)
            .ok_or(PdfError::PageNotFound(index))
    }

    /// Resolves a page handle, e.g. an element's owner or a predecessor link.
    pub fn resolve(&self, id: PageId) -> Result<&Page> {
        self.page(id.index())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Every element of every page, in document reading order.
    pub fn everything(&self) -> ElementSet<'_> {
        self.pages
            .iter()
            .flat_map(|page| page.elements().iter().map(move |e| ElementRef::new(page, e)))
            .sorted_by(|a, b| {
                a.position_in_document()
                    .total_cmp(&b.position_in_document())
            })
            .collect()
    }

    /// Sorts every page and merges line fragments to a fixed point.
    pub fn sort(&mut self) {
        self.sort_with(DefragMode::FixedPoint);
    }

    /// Sorts every page, in page order, then defragments its lines with `mode`.
    pub fn sort_with(&mut self, mode: DefragMode) {
        for page in &mut self.pages {
            page.sort_elements();
            let merges = page.defrag_with(mode);
            debug!(page = %page.id(), elements = page.elements().len(), merges, "sorted page");
        }
    }
}
