//! Layout item types produced by the external layout engine.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Point, Rect, get_bound};

/// One line of text inside a horizontal text box, in PDF space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTextLine {
    pub bbox: Rect,
    pub text: String,
}

impl LayoutTextLine {
    pub fn new(bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }
}

impl HasBBox for LayoutTextLine {
    fn x1(&self) -> f64 {
        self.bbox.0
    }
    fn y1(&self) -> f64 {
        self.bbox.1
    }
    fn x2(&self) -> f64 {
        self.bbox.2
    }
    fn y2(&self) -> f64 {
        self.bbox.3
    }
}

/// Represents any item that can appear on an analysed page.
///
/// Only lines, text boxes and figures carry queryable content. Rects,
/// curves and images are kept so a source can describe the page faithfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutItem {
    /// A single straight segment between two points.
    Line { p0: Point, p1: Point },
    /// A horizontal text box, already grouped into text lines.
    TextBox { lines: Vec<LayoutTextLine> },
    /// A form XObject; may nest further items, including figures.
    Figure {
        #[serde(default)]
        name: String,
        items: Vec<LayoutItem>,
    },
    Rect { bbox: Rect },
    Curve { pts: Vec<Point> },
    Image {
        #[serde(default)]
        name: String,
        bbox: Rect,
    },
}

impl LayoutItem {
    pub fn line(p0: Point, p1: Point) -> Self {
        LayoutItem::Line { p0, p1 }
    }

    /// A text box holding a single text line.
    pub fn text(bbox: Rect, text: impl Into<String>) -> Self {
        LayoutItem::TextBox {
            lines: vec![LayoutTextLine::new(bbox, text)],
        }
    }

    pub fn figure(name: impl Into<String>, items: Vec<LayoutItem>) -> Self {
        LayoutItem::Figure {
            name: name.into(),
            items,
        }
    }

    /// Short name of the item kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutItem::Line { .. } => "line",
            LayoutItem::TextBox { .. } => "textbox",
            LayoutItem::Figure { .. } => "figure",
            LayoutItem::Rect { .. } => "rect",
            LayoutItem::Curve { .. } => "curve",
            LayoutItem::Image { .. } => "image",
        }
    }

    /// Bounding box in PDF space. Empty containers report an inverted box.
    pub fn bbox(&self) -> Rect {
        match self {
            LayoutItem::Line { p0, p1 } => get_bound([*p0, *p1]),
            LayoutItem::TextBox { lines } => get_bound(
                lines
                    .iter()
                    .flat_map(|l| [(l.x1(), l.y1()), (l.x2(), l.y2())]),
            ),
            LayoutItem::Figure { items, .. } => get_bound(
                items
                    .iter()
                    .map(LayoutItem::bbox)
                    .flat_map(|(x1, y1, x2, y2)| [(x1, y1), (x2, y2)]),
            ),
            LayoutItem::Rect { bbox } | LayoutItem::Image { bbox, .. } => *bbox,
            LayoutItem::Curve { pts } => get_bound(pts.iter().copied()),
        }
    }
}

/// An analysed page: dimensions in PDF units plus its top-level items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Page identifier (usually 1-based page number)
    #[serde(default)]
    pub pageid: i32,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

impl LayoutPage {
    pub fn new(pageid: i32, width: f64, height: f64) -> Self {
        Self {
            pageid,
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Appends a top-level item.
    pub fn with(mut self, item: LayoutItem) -> Self {
        self.items.push(item);
        self
    }
}
