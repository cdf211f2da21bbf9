//! High-level document building API.
//!
//! - `parse_document()` - Build a sorted Document from any LayoutSource
//! - `load_document()` - Same, from a layout dump on disk

use std::path::Path;

use tracing::debug;

use crate::error::{PdfError, Result};
use crate::layout::{LayoutDump, LayoutSource};
use crate::model::{DefragMode, Document, PositionScale};

use super::flatten::flatten_items;

/// Options for building a document.
///
/// Page selection is applied in source order: a page must be listed in
/// `page_numbers` (when set) and the `maxpages` limit must not be reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Zero-indexed page numbers to keep. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Maximum number of pages to keep. 0 means no limit.
    pub maxpages: usize,

    /// Reading-order scale shared by every page of the document.
    pub position_scale: PositionScale,

    /// How line fragments are merged after sorting.
    pub defrag: DefragMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            page_numbers: None,
            maxpages: 0,
            position_scale: PositionScale::default(),
            defrag: DefragMode::FixedPoint,
        }
    }
}

impl ParseOptions {
    fn wants(&self, page_idx: usize) -> bool {
        self.page_numbers
            .as_ref()
            .is_none_or(|nums| nums.contains(&page_idx))
    }
}

/// Builds a document from a layout source.
///
/// Fails before reading any page if the source forbids text extraction.
/// Any page error, including an unrecognized line, aborts the whole parse;
/// partial documents are never returned.
///
/// # Example
/// ```ignore
/// use pdfquery_core::api::{ParseOptions, parse_document};
/// use pdfquery_core::layout::LayoutDump;
///
/// let dump = LayoutDump::from_path("report.layout.json")?;
/// let doc = parse_document(dump, None)?;
/// println!("{}", doc.everything().containing_text("Total").first()?);
/// ```
pub fn parse_document<S: LayoutSource>(
    mut source: S,
    options: Option<ParseOptions>,
) -> Result<Document> {
    let options = options.unwrap_or_default();
    if !source.is_extractable() {
        return Err(PdfError::TextExtractionNotAllowed);
    }

    let mut document = Document::with_scale(options.position_scale);
    let mut page_idx = 0;
    while let Some(layout) = source.next_page() {
        let layout = layout?;
        let idx = page_idx;
        page_idx += 1;

        if !options.wants(idx) {
            continue;
        }
        if options.maxpages > 0 && document.len() >= options.maxpages {
            break;
        }

        let primitives = flatten_items(&layout.items)?;
        let page = document.add_source_page(idx + 1, layout.width, layout.height)?;
        let count = primitives.len();
        for primitive in primitives {
            primitive.add_to(page);
        }
        debug!(pageid = layout.pageid, index = idx, elements = count, "parsed page");
    }

    document.sort_with(options.defrag);
    Ok(document)
}

/// Reads a layout dump from `path` and builds a document from it.
///
/// # Arguments
/// * `path` - Path to a JSON layout dump.
/// * `options` - Parse options; `None` uses the defaults.
pub fn load_document(path: impl AsRef<Path>, options: Option<ParseOptions>) -> Result<Document> {
    let dump = LayoutDump::from_path(path)?;
    parse_document(dump, options)
}
