//! A single document page and its elements.

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;

use super::element::{Content, Element, ElementRef, PageId};
use super::position::PositionScale;
use super::query::{BoxQuery, Containment};
use super::set::ElementSet;

type CornerKey = (OrderedFloat<f64>, OrderedFloat<f64>);

fn corner_key((x, y): (f64, f64)) -> CornerKey {
    (OrderedFloat(x), OrderedFloat(y))
}

/// How [`Page::defrag_lines`] is applied during a document-wide sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefragMode {
    /// Repeat sweeps until nothing merges.
    #[default]
    FixedPoint,
    /// A single sweep, leaving whatever it did not reach.
    SinglePass,
    /// Keep line fragments as the layout engine produced them.
    Disabled,
}

/// One page: its size, its place in the document and its elements.
#[derive(Debug, Clone)]
pub struct Page {
    id: PageId,
    number: usize,
    width: f64,
    height: f64,
    previous: Option<PageId>,
    origin: f64,
    scale: PositionScale,
    elements: Vec<Element>,
    sorted: bool,
}

impl Page {
    pub(crate) fn new(
        id: PageId,
        number: usize,
        width: f64,
        height: f64,
        previous: Option<&Page>,
        scale: PositionScale,
    ) -> Self {
        let origin = previous
            .map(|p| p.position_in_document() + scale.page_span(p.width, p.height))
            .unwrap_or(0.0);
        Self {
            id,
            number,
            width,
            height,
            previous: previous.map(Page::id),
            origin,
            scale,
            elements: Vec::new(),
            sorted: false,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    /// 1-based page number in the source the page was read from. Differs
    /// from `id().index() + 1` when only some source pages were loaded.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The page right before this one, if any.
    pub fn previous(&self) -> Option<PageId> {
        self.previous
    }

    pub fn scale(&self) -> PositionScale {
        self.scale
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Document position of this page's top-left corner: the sum of the
    /// spans of every earlier page.
    pub fn position_in_document(&self) -> f64 {
        self.origin
    }

    /// Appends an element given in PDF space (bottom-left origin).
    pub fn add_element(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, content: impl Into<Content>) {
        let element = Element::from_pdf(self, x1, y1, x2, y2, content.into());
        self.elements.push(element);
        self.sorted = false;
    }

    /// Sorts elements top-to-bottom, then left-to-right. Stable, so equal
    /// keys keep insertion order.
    pub fn sort_elements(&mut self) {
        let (width, scale) = (self.width, self.scale);
        self.elements.sort_by(|a, b| {
            scale
                .offset(width, a.x1(), a.y1())
                .total_cmp(&scale.offset(width, b.x1(), b.y1()))
        });
        self.sorted = true;
    }

    /// One merge sweep over the page's lines. Returns the number of merges.
    ///
    /// Each surviving line repeatedly absorbs a line of the same orientation
    /// whose start corner equals its current end corner. Corners are compared
    /// exactly.
    pub fn defrag_lines_once(&mut self) -> usize {
        let mut starts: FxHashMap<(Content, CornerKey), Vec<usize>> = FxHashMap::default();
        for (idx, e) in self.elements.iter().enumerate() {
            if e.is_line() {
                starts
                    .entry((e.content().clone(), corner_key(e.start())))
                    .or_default()
                    .push(idx);
            }
        }

        let mut removed = vec![false; self.elements.len()];
        let mut merges = 0;
        for i in 0..self.elements.len() {
            if removed[i] || !self.elements[i].is_line() {
                continue;
            }
            loop {
                let key = (
                    self.elements[i].content().clone(),
                    corner_key(self.elements[i].end()),
                );
                let next = starts
                    .get(&key)
                    .and_then(|c| c.iter().copied().find(|&j| j != i && !removed[j]));
                let Some(j) = next else {
                    break;
                };
                let end = self.elements[j].end();
                self.elements[i].extend_to(end);
                removed[j] = true;
                merges += 1;
            }
        }

        if merges > 0 {
            let mut flags = removed.into_iter();
            self.elements.retain(|_| !flags.next().unwrap_or(false));
        }
        merges
    }

    /// Merges collinear line fragments until no more merges happen.
    /// Returns the total number of merges.
    pub fn defrag_lines(&mut self) -> usize {
        let mut total = 0;
        loop {
            let merges = self.defrag_lines_once();
            debug!(page = %self.id, merges, "defrag pass");
            if merges == 0 {
                break;
            }
            total += merges;
        }
        total
    }

    pub(crate) fn defrag_with(&mut self, mode: DefragMode) -> usize {
        match mode {
            DefragMode::FixedPoint => self.defrag_lines(),
            DefragMode::SinglePass => self.defrag_lines_once(),
            DefragMode::Disabled => 0,
        }
    }

    /// Every element on the page, in the page's current order.
    pub fn everything(&self) -> ElementSet<'_> {
        self.elements
            .iter()
            .map(|e| ElementRef::new(self, e))
            .collect()
    }

    /// See [`ElementSet::inside_box`].
    pub fn inside_box(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<ElementSet<'_>> {
        self.everything().inside_box(x1, y1, x2, y2)
    }

    /// See [`ElementSet::inside`].
    pub fn inside(&self, query: &BoxQuery, mode: Containment) -> ElementSet<'_> {
        self.everything().inside(query, mode)
    }

    /// Elements in the half-open region from `(left, top)` to the page's
    /// bottom-right corner.
    pub fn starting_from(&self, top: f64, left: f64) -> Result<ElementSet<'_>> {
        self.inside_box(left, top, self.width, self.height)
    }

    /// The whole page as an inclusive [`BoxQuery`].
    pub fn bounds(&self) -> Result<BoxQuery> {
        BoxQuery::new(0.0, 0.0, self.width, self.height)
    }

    pub fn containing_text(&self, needle: &str) -> ElementSet<'_> {
        self.everything().containing_text(needle)
    }
}
