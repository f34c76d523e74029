use crate::error::{Result, TilingError};
use crate::math::Point2;
use crate::tiling::region_filter;

use super::Triangle;

/// A closed disk used as the region of interest when pruning a tiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    center: Point2,
    radius: f64,
}

impl Disk {
    /// Creates a new disk.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or either argument is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(TilingError::InvalidParameters(format!(
                "disk center ({}, {}) must be finite",
                center.x, center.y
            ))
            .into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(TilingError::InvalidParameters(format!(
                "disk radius {radius} must be finite and non-negative"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the disk.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the disk.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `false` only when `triangle` certainly lies outside the disk.
    ///
    /// A `true` answer does not guarantee overlap.
    #[must_use]
    pub fn may_intersect(&self, triangle: &Triangle) -> bool {
        region_filter(self.center, self.radius)(triangle)
    }
}
