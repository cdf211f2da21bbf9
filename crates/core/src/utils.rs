//! Geometric helpers shared by the layout contract and the element model.

/// Floating-point infinity for bounding box calculations.
pub const INF_F64: f64 = f64::MAX;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x1, y1, x2, y2).
///
/// In layout (PDF) space (x1, y1) is the bottom-left corner; in element
/// space it is the top-left corner.
pub type Rect = (f64, f64, f64, f64);

/// Anything with an axis-aligned bounding box.
pub trait HasBBox {
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;
    fn x2(&self) -> f64;
    fn y2(&self) -> f64;

    fn width(&self) -> f64 {
        self.x2() - self.x1()
    }

    fn height(&self) -> f64 {
        self.y2() - self.y1()
    }

    fn bbox(&self) -> Rect {
        (self.x1(), self.y1(), self.x2(), self.y2())
    }
}

impl HasBBox for Rect {
    fn x1(&self) -> f64 {
        self.0
    }
    fn y1(&self) -> f64 {
        self.1
    }
    fn x2(&self) -> f64 {
        self.2
    }
    fn y2(&self) -> f64 {
        self.3
    }
}

/// Returns the bounding rectangle of a set of points.
pub fn get_bound<I: IntoIterator<Item = Point>>(pts: I) -> Rect {
    let mut x1 = INF_F64;
    let mut y1 = INF_F64;
    let mut x2 = -INF_F64;
    let mut y2 = -INF_F64;

    for (x, y) in pts {
        x1 = x1.min(x);
        y1 = y1.min(y);
        x2 = x2.max(x);
        y2 = y2.max(y);
    }

    (x1, y1, x2, y2)
}

/// Orders two points lexicographically, smaller first.
pub fn order_points(p0: Point, p1: Point) -> (Point, Point) {
    let swap = match p0.0.partial_cmp(&p1.0).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => p0.1 > p1.1,
    };
    if swap { (p1, p0) } else { (p0, p1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_of_unordered_points() {
        let r = get_bound([(5.0, 1.0), (2.0, 7.0), (3.0, -1.0)]);
        assert_eq!(r, (2.0, -1.0, 5.0, 7.0));
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 8.0);
    }

    #[test]
    fn order_points_is_lexicographic() {
        assert_eq!(
            order_points((5.0, 0.0), (0.0, 0.0)),
            ((0.0, 0.0), (5.0, 0.0))
        );
        assert_eq!(
            order_points((3.0, 9.0), (3.0, 2.0)),
            ((3.0, 2.0), (3.0, 9.0))
        );
        assert_eq!(
            order_points((1.0, 2.0), (4.0, 0.0)),
            ((1.0, 2.0), (4.0, 0.0))
        );
    }
}
