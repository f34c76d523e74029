mod postscript;

pub use postscript::render_postscript;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::math::{Point2, Vector2};

/// Parameters controlling how a tiling is placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Page-space position of the tiling's origin.
    pub translate: Vector2,
    /// Page units per tiling unit.
    pub scale: f64,
    /// Draws a short tick inside every triangle pointing away from vertex `a`.
    pub mark_vertex_a: bool,
    /// Stroke width in page units.
    pub line_width: f64,
    /// Page width and height in page units.
    pub page_size: [u32; 2],
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            translate: Vector2::new(500.0, 500.0),
            scale: 200.0,
            mark_vertex_a: true,
            line_width: 0.2,
            page_size: [1000, 1000],
        }
    }
}

impl RenderParams {
    /// Checks that the parameters describe a drawable page.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not positive, the line width is
    /// negative, or any value is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::InvalidParameters(format!(
                "scale {} must be finite and positive",
                self.scale
            ))
            .into());
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(RenderError::InvalidParameters(format!(
                "line width {} must be finite and non-negative",
                self.line_width
            ))
            .into());
        }
        if !self.translate.x.is_finite() || !self.translate.y.is_finite() {
            return Err(
                RenderError::InvalidParameters("translation must be finite".to_owned()).into(),
            );
        }
        Ok(())
    }

    /// Maps a tiling point to page coordinates.
    #[must_use]
    pub fn to_page(&self, p: &Point2) -> Point2 {
        Point2::from(self.translate + p.coords * self.scale)
    }
}
