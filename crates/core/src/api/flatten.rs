//! Flattening of layout items into element primitives.

use tracing::trace;

use crate::error::{PdfError, Result};
use crate::layout::LayoutItem;
use crate::model::{Content, Page};
use crate::utils::{HasBBox, Point, order_points};

/// A flattened piece of page content, still in PDF space.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub content: Content,
}

impl Primitive {
    /// Appends this primitive to `page` as an element.
    pub fn add_to(self, page: &mut Page) {
        page.add_element(self.x1, self.y1, self.x2, self.y2, self.content);
    }
}

/// Collapses newlines to spaces and trims surrounding whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.replace('\n', " ").trim().to_string()
}

/// Classifies a segment as a horizontal or vertical rule.
///
/// Diagonal segments and single points are rejected.
pub fn classify_line(p0: Point, p1: Point) -> Result<Primitive> {
    let (a, b) = order_points(p0, p1);
    let content = if a.0 != b.0 && a.1 == b.1 {
        Content::HorizontalLine
    } else if a.0 == b.0 && a.1 != b.1 {
        Content::VerticalLine
    } else {
        return Err(PdfError::UnknownLine { p0, p1 });
    };
    Ok(Primitive {
        x1: a.0,
        y1: a.1,
        x2: b.0,
        y2: b.1,
        content,
    })
}

/// Flattens a page's layout items depth-first, descending into figures.
///
/// Text boxes contribute one primitive per text line. Rects, curves and
/// images carry nothing queryable and are skipped.
pub fn flatten_items(items: &[LayoutItem]) -> Result<Vec<Primitive>> {
    let mut out = Vec::new();
    flatten_into(items, &mut out)?;
    Ok(out)
}

fn flatten_into(items: &[LayoutItem], out: &mut Vec<Primitive>) -> Result<()> {
    for item in items {
        match item {
            LayoutItem::Line { p0, p1 } => out.push(classify_line(*p0, *p1)?),
            LayoutItem::TextBox { lines } => {
                out.extend(lines.iter().map(|line| Primitive {
                    x1: line.x1(),
                    y1: line.y1(),
                    x2: line.x2(),
                    y2: line.y2(),
                    content: Content::Text(normalize_text(&line.text)),
                }));
            }
            LayoutItem::Figure { items, .. } => flatten_into(items, out)?,
            other => trace!(kind = other.kind(), bbox = ?other.bbox(), "skipping layout item"),
        }
    }
    Ok(())
}
