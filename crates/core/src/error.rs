//! Error types for pdfquery.

use thiserror::Error;

use crate::utils::Point;

/// Primary error type for layout parsing and element queries.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("text extraction is not allowed for this document")]
    TextExtractionNotAllowed,

    #[error("unrecognized line geometry: {p0:?} -> {p1:?}")]
    UnknownLine { p0: Point, p1: Point },

    #[error("no element at index {index}")]
    NoSuchElement { index: usize },

    #[error("invalid box bounds: ({x1}, {y1}) -> ({x2}, {y2})")]
    InvalidBox { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("invalid page size: {width}x{height}")]
    InvalidPageSize { width: f64, height: f64 },

    #[error("position scale must be a finite number >= 1, got {0}")]
    InvalidScale(f64),

    #[error("page not found: {0}")]
    PageNotFound(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layout dump error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PdfError {
    /// True for the query-time "absent" signal, as opposed to a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PdfError::NoSuchElement { .. })
    }
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;
