//! Reading-order key shared by pages and elements.

use crate::error::{PdfError, Result};

/// Default row multiplier for reading-order keys.
pub const DEFAULT_POSITION_SCALE: f64 = 100.0;

/// Multiplier that turns a top-left `(x, y)` into a single reading-order key.
///
/// Within a page the key is `width * scale * y + x`; a page advances the
/// document position by `width * scale * (height + 1) + 1`. Both use the
/// same value, and `scale >= 1` keeps `x` from spilling into the next row.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PositionScale(f64);

impl PositionScale {
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale < 1.0 {
            return Err(PdfError::InvalidScale(scale));
        }
        Ok(Self(scale))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Key of the point `(x, y)` relative to the start of its page.
    #[inline]
    pub fn offset(self, page_width: f64, x: f64, y: f64) -> f64 {
        page_width * self.0 * y + x
    }

    /// How far a page of the given size advances the document position.
    ///
    /// One padding row past `height`, plus one unit. The largest in-page key
    /// is `width * scale * height + width`, so the next page's origin is
    /// strictly above it even at `scale == 1`.
    #[inline]
    pub fn page_span(self, page_width: f64, page_height: f64) -> f64 {
        page_width * self.0 * (page_height + 1.0) + 1.0
    }
}

impl Default for PositionScale {
    fn default() -> Self {
        Self(DEFAULT_POSITION_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_or_non_finite_scale() {
        assert!(PositionScale::new(0.5).is_err());
        assert!(PositionScale::new(f64::NAN).is_err());
        assert!(PositionScale::new(f64::INFINITY).is_err());
        assert_eq!(PositionScale::new(1.0).unwrap().get(), 1.0);
    }

    #[test]
    fn rows_do_not_collide() {
        let scale = PositionScale::new(1.0).unwrap();
        // rightmost point of row 3 sorts before leftmost point of row 4
        assert!(scale.offset(612.0, 612.0, 3.0) <= scale.offset(612.0, 0.0, 4.0));
    }

    #[test]
    fn page_span_exceeds_every_in_page_key() {
        let (w, h) = (612.0, 792.0);
        for s in [1.0, 1.5, DEFAULT_POSITION_SCALE] {
            let scale = PositionScale::new(s).unwrap();
            // bottom-right corner is the largest key a page can hold
            assert!(scale.offset(w, w, h) < scale.page_span(w, h));
        }
    }
}
