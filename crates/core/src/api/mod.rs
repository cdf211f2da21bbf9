//! Public API for building documents from a layout source.
//!
//! This module provides:
//! - `high_level`: `ParseOptions` and `parse_document()`
//! - `builder`: `DocumentBuilder` fluent API
//! - `flatten`: layout item normalisation into element primitives

pub mod builder;
pub mod flatten;
pub mod high_level;

pub use builder::DocumentBuilder;
pub use flatten::{Primitive, flatten_items, normalize_text};
pub use high_level::{ParseOptions, load_document, parse_document};
