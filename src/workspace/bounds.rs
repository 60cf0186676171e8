use crate::error::{GeometryError, Result};

/// The rectangular extent of the workspace domain.
///
/// Immutable after construction: `x_range() = (0, width)` and
/// `y_range() = (0, height)`, with both extents strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Bounds {
    /// Creates bounds spanning `[0, width] x [0, height]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveExtent`] if `width` or
    /// `height` is not strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(GeometryError::NonPositiveExtent {
                parameter: "width",
                value: width,
            }
            .into());
        }
        if height <= 0.0 {
            return Err(GeometryError::NonPositiveExtent {
                parameter: "height",
                value: height,
            }
            .into());
        }
        Ok(Self {
            x_range: (0.0, width),
            y_range: (0.0, height),
        })
    }

    /// Builds bounds whose extents the caller has already checked.
    pub(crate) fn from_validated(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            x_range: (0.0, width),
            y_range: (0.0, height),
        }
    }

    /// Returns the `(min, max)` range of the x axis.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    /// Returns the `(min, max)` range of the y axis.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// Checks whether `(x, y)` lies inside the closed domain extent.
    ///
    /// This tests the workspace rectangle only; it says nothing about
    /// obstacle occupancy.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_range.0 && x <= self.x_range.1 && y >= self.y_range.0 && y <= self.y_range.1
    }
}
