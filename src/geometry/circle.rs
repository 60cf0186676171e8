use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A circular obstacle, occupying the closed disk around its center.
///
/// Membership is `(px - x)^2 + (py - y)^2 <= radius^2`, so a point exactly
/// on the rim counts as inside. A zero radius is permitted and denotes a
/// single blocked point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle centered at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative.
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self {
            center: Point2::new(x, y),
            radius,
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Checks whether the point `(px, py)` lies inside the closed disk.
    ///
    /// Compares squared distances, avoiding the square root on a path the
    /// planner hits once per candidate state.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.center.x;
        let dy = py - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
