//! Rectangular containment predicate.

use crate::error::{PdfError, Result};
use crate::utils::HasBBox;

/// Which box edges count as inside.
///
/// Excluding one side lets adjacent regions tile a page without an element
/// on the shared boundary being reported twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl Edges {
    pub const ALL: Edges = Edges {
        top: true,
        left: true,
        bottom: true,
        right: true,
    };

    pub const NONE: Edges = Edges {
        top: false,
        left: false,
        bottom: false,
        right: false,
    };

    /// Top and left included, bottom and right excluded.
    pub const HALF_OPEN: Edges = Edges {
        top: true,
        left: true,
        bottom: false,
        right: false,
    };
}

impl Default for Edges {
    fn default() -> Self {
        Edges::ALL
    }
}

/// Which corners of an element must fall inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Containment {
    /// Top-left corner inside.
    Starts,
    /// Bottom-right corner inside.
    Ends,
    /// Either corner inside.
    Touches,
    /// Both corners inside.
    #[default]
    Whole,
}

/// A rectangle in top-left page coordinates with per-edge inclusivity and
/// an optional fuzzy border.
///
/// Stateless; one query can be reused across pages and element sets.
///
/// ```ignore
/// let header = BoxQuery::new(0.0, 0.0, page.width(), 72.0)?
///     .with_edges(Edges::HALF_OPEN)
///     .with_fuzzy_border(1.5);
/// let titles = page.inside(&header, Containment::Whole).text();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxQuery {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    edges: Edges,
    fuzzy_border: f64,
}

impl BoxQuery {
    /// Creates an all-inclusive box. Fails if `x1 > x2` or `y1 > y2`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        // negated so that NaN bounds are rejected too
        if !(x1 <= x2 && y1 <= y2) {
            return Err(PdfError::InvalidBox { x1, y1, x2, y2 });
        }
        Ok(Self {
            x1,
            y1,
            x2,
            y2,
            edges: Edges::ALL,
            fuzzy_border: 0.0,
        })
    }

    pub fn with_edges(mut self, edges: Edges) -> Self {
        self.edges = edges;
        self
    }

    pub fn include_top(mut self, include: bool) -> Self {
        self.edges.top = include;
        self
    }

    pub fn include_left(mut self, include: bool) -> Self {
        self.edges.left = include;
        self
    }

    pub fn include_bottom(mut self, include: bool) -> Self {
        self.edges.bottom = include;
        self
    }

    pub fn include_right(mut self, include: bool) -> Self {
        self.edges.right = include;
        self
    }

    /// Grows the box by `margin` on every side before testing. Negative or
    /// NaN margins count as zero.
    pub fn with_fuzzy_border(mut self, margin: f64) -> Self {
        self.fuzzy_border = margin.max(0.0);
        self
    }

    pub fn edges(&self) -> Edges {
        self.edges
    }

    pub fn fuzzy_border(&self) -> f64 {
        self.fuzzy_border
    }

    /// The box after fuzzy expansion, as `(x1, y1, x2, y2)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let f = self.fuzzy_border;
        (self.x1 - f, self.y1 - f, self.x2 + f, self.y2 + f)
    }

    pub fn x_inside(&self, x: f64) -> bool {
        let (lo, _, hi, _) = self.bounds();
        within(x, lo, hi, self.edges.left, self.edges.right)
    }

    pub fn y_inside(&self, y: f64) -> bool {
        let (_, lo, _, hi) = self.bounds();
        within(y, lo, hi, self.edges.top, self.edges.bottom)
    }

    pub fn point_inside(&self, x: f64, y: f64) -> bool {
        self.x_inside(x) && self.y_inside(y)
    }

    pub fn starts_inside<T: HasBBox + ?Sized>(&self, item: &T) -> bool {
        self.point_inside(item.x1(), item.y1())
    }

    pub fn ends_inside<T: HasBBox + ?Sized>(&self, item: &T) -> bool {
        self.point_inside(item.x2(), item.y2())
    }

    pub fn whole_inside<T: HasBBox + ?Sized>(&self, item: &T) -> bool {
        self.starts_inside(item) && self.ends_inside(item)
    }

    /// Applies the given containment mode.
    pub fn matches<T: HasBBox + ?Sized>(&self, item: &T, mode: Containment) -> bool {
        match mode {
            Containment::Starts => self.starts_inside(item),
            Containment::Ends => self.ends_inside(item),
            Containment::Touches => self.starts_inside(item) || self.ends_inside(item),
            Containment::Whole => self.whole_inside(item),
        }
    }
}

#[inline]
fn within(v: f64, lo: f64, hi: f64, include_lo: bool, include_hi: bool) -> bool {
    let above = if include_lo { v >= lo } else { v > lo };
    let below = if include_hi { v <= hi } else { v < hi };
    above && below
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            BoxQuery::new(10.0, 0.0, 5.0, 10.0),
            Err(PdfError::InvalidBox { .. })
        ));
        assert!(BoxQuery::new(0.0, 10.0, 5.0, 0.0).is_err());
        assert!(BoxQuery::new(0.0, f64::NAN, 5.0, 1.0).is_err());
        assert!(BoxQuery::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn included_edges_are_inside() {
        let q = BoxQuery::new(0.0, 0.0, 10.0, 20.0).unwrap();
        assert!(q.point_inside(0.0, 0.0));
        assert!(q.point_inside(10.0, 20.0));
        assert!(q.point_inside(10.0, 0.0));
        assert!(!q.point_inside(10.1, 5.0));
    }

    #[test]
    fn excluded_edges_are_outside() {
        let q = BoxQuery::new(0.0, 0.0, 10.0, 20.0)
            .unwrap()
            .with_edges(Edges::NONE);
        assert!(!q.point_inside(0.0, 5.0));
        assert!(!q.point_inside(5.0, 0.0));
        assert!(!q.point_inside(10.0, 5.0));
        assert!(!q.point_inside(5.0, 20.0));
        assert!(q.point_inside(5.0, 5.0));
    }

    #[test]
    fn individual_edge_flags() {
        let q = BoxQuery::new(0.0, 0.0, 10.0, 10.0)
            .unwrap()
            .include_right(false)
            .include_top(false);
        assert!(q.x_inside(0.0));
        assert!(!q.x_inside(10.0));
        assert!(!q.y_inside(0.0));
        assert!(q.y_inside(10.0));
    }

    #[test]
    fn fuzzy_border_expands_box() {
        let q = BoxQuery::new(10.0, 10.0, 20.0, 20.0)
            .unwrap()
            .with_fuzzy_border(2.0);
        assert_eq!(q.bounds(), (8.0, 8.0, 22.0, 22.0));
        assert!(q.point_inside(8.0, 22.0));
        assert!(!q.point_inside(7.9, 15.0));

        let q = q.with_fuzzy_border(-3.0);
        assert_eq!(q.fuzzy_border(), 0.0);
    }

    #[test]
    fn containment_modes() {
        let q = BoxQuery::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let straddling = (5.0, 5.0, 15.0, 15.0);
        let entering = (-5.0, -5.0, 5.0, 5.0);
        let enclosed = (1.0, 1.0, 9.0, 9.0);

        assert!(q.matches(&straddling, Containment::Starts));
        assert!(!q.matches(&straddling, Containment::Ends));
        assert!(q.matches(&entering, Containment::Ends));
        assert!(q.matches(&entering, Containment::Touches));
        assert!(!q.matches(&entering, Containment::Whole));
        assert!(q.matches(&enclosed, Containment::Whole));
    }
}
