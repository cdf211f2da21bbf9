//! Sequential page sources.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::item::LayoutPage;

/// The external layout engine, seen from the core.
///
/// Pages are pulled one at a time, in document order. Implementations are
/// expected to hold shared, stateful decoding resources, so a source is
/// driven by a single caller and never concurrently.
pub trait LayoutSource {
    /// Whether the source document permits text extraction.
    fn is_extractable(&self) -> bool;

    /// Analyses and returns the next page, or `None` after the last one.
    fn next_page(&mut self) -> Option<Result<LayoutPage>>;
}

impl<S: LayoutSource + ?Sized> LayoutSource for &mut S {
    fn is_extractable(&self) -> bool {
        (**self).is_extractable()
    }

    fn next_page(&mut self) -> Option<Result<LayoutPage>> {
        (**self).next_page()
    }
}

fn default_extractable() -> bool {
    true
}

/// A fully materialised layout, as written by an external layout dumper.
///
/// ```ignore
/// use pdfquery_core::layout::LayoutDump;
///
/// let dump = LayoutDump::from_path("report.layout.json")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    #[serde(default = "default_extractable")]
    pub extractable: bool,
    pub pages: VecDeque<LayoutPage>,
}

impl LayoutDump {
    pub fn new(pages: impl IntoIterator<Item = LayoutPage>) -> Self {
        Self {
            extractable: true,
            pages: pages.into_iter().collect(),
        }
    }

    /// Marks the dump as coming from a document that forbids extraction.
    pub fn forbid_extraction(mut self) -> Self {
        self.extractable = false;
        self
    }

    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl LayoutSource for LayoutDump {
    fn is_extractable(&self) -> bool {
        self.extractable
    }

    fn next_page(&mut self) -> Option<Result<LayoutPage>> {
        self.pages.pop_front().map(Ok)
    }
}
