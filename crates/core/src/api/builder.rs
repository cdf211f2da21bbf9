//! Builder pattern for document construction.
//!
//! # Example
//! ```ignore
//! use pdfquery_core::api::DocumentBuilder;
//!
//! let doc = DocumentBuilder::new()
//!     .pages(0..5)
//!     .position_scale(200.0)?
//!     .load("report.layout.json")?;
//! ```

use std::ops::Range;
use std::path::Path;

use crate::error::Result;
use crate::layout::{LayoutDump, LayoutSource};
use crate::model::{DefragMode, Document, PositionScale};

use super::high_level::{ParseOptions, parse_document};

/// A builder for configuring how a document is assembled from a layout
/// source. Wraps [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    options: ParseOptions,
}

impl DocumentBuilder {
    /// Creates a builder with default options: every page, scale 100,
    /// fixed-point line defragmentation.
    ///
    /// # Example
    /// ```ignore
    /// let builder = DocumentBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a range of pages to keep (zero-indexed).
    ///
    /// This converts the range to a list of page numbers internally and
    /// replaces any previously set page numbers.
    ///
    /// # Arguments
    /// * `range` - Range of page indices (e.g., `0..5` for the first five pages).
    ///
    /// # Example
    /// ```ignore
    /// let builder = DocumentBuilder::new().pages(2..4);
    /// ```
    pub fn pages(mut self, range: Range<usize>) -> Self {
        self.options.page_numbers = Some(range.collect());
        self
    }

    /// Sets specific page numbers to keep (zero-indexed).
    ///
    /// Replaces any previously set range.
    ///
    /// # Arguments
    /// * `numbers` - Vector of page indices to keep.
    ///
    /// # Example
    /// ```ignore
    /// let builder = DocumentBuilder::new().page_numbers(vec![0, 2, 4]);
    /// ```
    pub fn page_numbers(mut self, numbers: Vec<usize>) -> Self {
        self.options.page_numbers = Some(numbers);
        self
    }

    /// Sets the maximum number of pages to keep.
    ///
    /// # Arguments
    /// * `max` - Maximum pages (0 means no limit).
    pub fn maxpages(mut self, max: usize) -> Self {
        self.options.maxpages = max;
        self
    }

    /// Sets the reading-order scale shared by every page.
    ///
    /// # Arguments
    /// * `scale` - Row multiplier; must be finite and at least 1.
    ///
    /// # Errors
    /// Returns [`PdfError::InvalidScale`](crate::error::PdfError::InvalidScale)
    /// when `scale` is out of range.
    ///
    /// # Example
    /// ```ignore
    /// let builder = DocumentBuilder::new().position_scale(250.0)?;
    /// ```
    pub fn position_scale(mut self, scale: f64) -> Result<Self> {
        self.options.position_scale = PositionScale::new(scale)?;
        Ok(self)
    }

    /// Sets how line fragments are merged once each page is sorted.
    ///
    /// # Arguments
    /// * `mode` - [`DefragMode::FixedPoint`] (default), `SinglePass` or `Disabled`.
    ///
    /// # Example
    /// ```ignore
    /// let raw = DocumentBuilder::new()
    ///     .defrag(DefragMode::Disabled)
    ///     .build(dump)?;
    /// ```
    pub fn defrag(mut self, mode: DefragMode) -> Self {
        self.options.defrag = mode;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn into_options(self) -> ParseOptions {
        self.options
    }

    /// Builds the document from any layout source.
    ///
    /// # Arguments
    /// * `source` - A [`LayoutSource`], e.g. a [`LayoutDump`].
    ///
    /// # Example
    /// ```ignore
    /// let dump = LayoutDump::from_slice(&bytes)?;
    /// let doc = DocumentBuilder::new().maxpages(1).build(dump)?;
    /// ```
    pub fn build<S: LayoutSource>(self, source: S) -> Result<Document> {
        parse_document(source, Some(self.options))
    }

    /// Builds the document from a layout dump on disk.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON layout dump.
    ///
    /// # Example
    /// ```ignore
    /// let doc = DocumentBuilder::new().pages(0..1).load("report.layout.json")?;
    /// ```
    pub fn load(self, path: impl AsRef<Path>) -> Result<Document> {
        self.build(LayoutDump::from_path(path)?)
    }
}
