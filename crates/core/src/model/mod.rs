//! Document model and spatial query engine.
//!
//! - Element / ElementRef: positioned text runs and line segments
//! - BoxQuery: rectangular containment predicate
//! - ElementSet: chainable, non-mutating element filters
//! - Page: element storage, ordering and line defragmentation
//! - Document: page sequence and document-wide reading order

mod document;
mod element;
mod page;
mod position;
mod query;
mod set;

pub use document::Document;
pub use element::{Content, Element, ElementRef, PageId};
pub use page::{DefragMode, Page};
pub use position::{DEFAULT_POSITION_SCALE, PositionScale};
pub use query::{BoxQuery, Containment, Edges};
pub use set::ElementSet;
