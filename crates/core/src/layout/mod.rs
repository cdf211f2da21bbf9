//! Layout collaborator contract.
//!
//! PDF decoding and layout reconstruction happen outside this crate. This
//! module describes what such an engine hands over, page by page:
//! - LayoutPage: page dimensions plus its top-level layout items
//! - LayoutItem: lines, text boxes, figures and the items we skip
//! - LayoutSource: the sequential, per-page pull interface
//! - LayoutDump: a serialisable in-memory source (JSON interchange format)

mod item;
mod source;

pub use item::{LayoutItem, LayoutPage, LayoutTextLine};
pub use source::{LayoutDump, LayoutSource};
