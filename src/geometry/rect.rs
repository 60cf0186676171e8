use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An axis-aligned rectangle anchored at its lower-left corner.
///
/// Occupies the closed region `[x, x + width] x [y, y + height]`: a point
/// exactly on an edge or corner counts as inside. Extents are validated to
/// be positive at construction, so a `Rect` always encloses a non-empty
/// area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a new axis-aligned rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateRect`] if `width` or `height`
    /// is not strictly positive.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::DegenerateRect { width, height }.into());
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Builds a rectangle whose extents the caller has already checked.
    ///
    /// Used by the workspace to regenerate structural obstacles from a
    /// configuration that was validated at construction time.
    pub(crate) fn from_validated(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x coordinate of the lower-left corner.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate of the lower-left corner.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Checks whether the point `(px, py)` lies inside the closed
    /// rectangle. Edge and corner points are inside.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x
            && px <= self.x + self.width
            && py >= self.y
            && py <= self.y + self.height
    }

    /// Returns the four corners in bottom-left, bottom-right, top-right,
    /// top-left order, forming a closed counter-clockwise loop.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.x + self.width, self.y),
            Point2::new(self.x + self.width, self.y + self.height),
            Point2::new(self.x, self.y + self.height),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn contains_interior_point() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert!(r.contains(2.5, 4.0));
        assert!(!r.contains(0.5, 4.0));
        assert!(!r.contains(2.5, 6.5));
    }

    #[test]
    fn contains_is_closed_on_edges() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0).unwrap();
        // All four edges and corners are inside.
        assert!(r.contains(0.0, 1.0));
        assert!(r.contains(2.0, 1.0));
        assert!(r.contains(1.0, 0.0));
        assert!(r.contains(1.0, 2.0));
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(2.0, 2.0));
        // Just outside.
        assert!(!r.contains(2.0 + 1e-9, 1.0));
        assert!(!r.contains(1.0, -1e-9));
    }

    #[test]
    fn corners_form_ccw_loop() {
        let r = Rect::new(1.0, 1.0, 2.0, 3.0).unwrap();
        let c = r.corners();
        assert!((c[0].x - 1.0).abs() < TOLERANCE && (c[0].y - 1.0).abs() < TOLERANCE);
        assert!((c[1].x - 3.0).abs() < TOLERANCE && (c[1].y - 1.0).abs() < TOLERANCE);
        assert!((c[2].x - 3.0).abs() < TOLERANCE && (c[2].y - 4.0).abs() < TOLERANCE);
        assert!((c[3].x - 1.0).abs() < TOLERANCE && (c[3].y - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn rejects_degenerate_extents() {
        assert!(Rect::new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(Rect::new(0.0, 0.0, 1.0, -2.0).is_err());
    }
}
