//! pdfquery - a queryable element model over extracted PDF page layouts.
//!
//! An external layout engine decodes the PDF and hands over, page by page,
//! line segments and text boxes in PDF space. This crate normalises them
//! into top-left-origin elements and answers spatial, ordering and text
//! queries over them.
//!
//! ```ignore
//! use pdfquery_core::prelude::*;
//!
//! let doc = load_document("invoice.layout.json", None)?;
//! let total = doc.everything().text().containing_text("Total").first()?;
//! let below = doc.page(0)?.starting_from(total.y2(), 0.0)?;
//! ```

pub mod api;
pub mod error;
pub mod layout;
pub mod model;
pub mod utils;

pub use api::high_level;
pub use error::{PdfError, Result};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::api::{DocumentBuilder, ParseOptions, load_document, parse_document};
    pub use crate::error::{PdfError, Result};
    pub use crate::layout::{LayoutDump, LayoutItem, LayoutPage, LayoutSource};
    pub use crate::model::{
        BoxQuery, Containment, Content, DefragMode, Document, Edges, Element, ElementRef,
        ElementSet, Page, PageId, PositionScale,
    };
    pub use crate::utils::HasBBox;
}
