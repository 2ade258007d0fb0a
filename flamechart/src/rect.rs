//! Plot-space rectangles.

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// An axis-aligned rectangle in plot-space units.
///
/// Used both as the caller's base rectangle and as the chart's derived
/// config space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns a copy of this rectangle with its height replaced.
    #[must_use]
    pub const fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    /// Validates that every component is finite and the size is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidRect`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::InvalidRect {
                    reason: format!("{field} must be finite, got {value}"),
                }
                .into());
            }
        }

        if self.width < 0.0 || self.height < 0.0 {
            return Err(OptionsError::InvalidRect {
                reason: format!(
                    "size must be non-negative, got {}x{}",
                    self.width, self.height
                ),
            }
            .into());
        }

        Ok(())
    }
}
