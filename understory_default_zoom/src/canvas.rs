// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::error::FitError;

/// Chrome reserved around the drawable area of a canvas, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasMargins {
    /// Space reserved above the drawable area.
    pub top: f64,
    /// Space reserved left of the drawable area.
    pub left: f64,
    /// Space reserved right of the drawable area.
    pub right: f64,
    /// Space reserved below the drawable area.
    pub bottom: f64,
}

impl CanvasMargins {
    /// Creates margins from explicit edge values.
    #[must_use]
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Creates equal margins on all four edges.
    #[must_use]
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

/// Size of the rendering surface plus its reserved margins.
///
/// `width` and `height` describe the area content is fitted into; the
/// margins only shift the result (fitted content is offset by the top and
/// left margins).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasMetrics {
    /// Width of the fitting area in device pixels.
    pub width: f64,
    /// Height of the fitting area in device pixels.
    pub height: f64,
    /// Reserved chrome around the fitting area.
    pub margins: CanvasMargins,
}

impl CanvasMetrics {
    /// Creates canvas metrics with zero margins.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: CanvasMargins::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Returns these metrics with the given margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: CanvasMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Returns the fitting area as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Offset applied to fitted content to respect the top and left margins.
    #[must_use]
    pub fn margin_offset(&self) -> Vec2 {
        Vec2::new(self.margins.left, self.margins.top)
    }

    /// Returns the device-space point the fitted content is centered on.
    #[must_use]
    pub fn fitted_center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0) + self.margin_offset()
    }

    pub(crate) fn check(&self) -> Result<(), FitError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let margins_finite = [
            self.margins.top,
            self.margins.left,
            self.margins.right,
            self.margins.bottom,
        ]
        .iter()
        .all(|m| m.is_finite());
        if usable(self.width) && usable(self.height) && margins_finite {
            Ok(())
        } else {
            Err(FitError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{CanvasMargins, CanvasMetrics};
    use crate::error::FitError;

    #[test]
    fn fitted_center_includes_top_left_margins_only() {
        let canvas = CanvasMetrics::new(200.0, 100.0)
            .with_margins(CanvasMargins::new(10.0, 20.0, 500.0, 500.0));
        assert_eq!(canvas.fitted_center(), Vec2::new(120.0, 60.0));
        assert_eq!(canvas.margin_offset(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn check_rejects_degenerate_canvas() {
        assert!(CanvasMetrics::new(1.0, 1.0).check().is_ok());
        assert_eq!(
            CanvasMetrics::new(0.0, 100.0).check(),
            Err(FitError::InvalidCanvas {
                width: 0.0,
                height: 100.0
            })
        );
        assert!(CanvasMetrics::new(100.0, f64::NAN).check().is_err());
        assert!(
            CanvasMetrics::new(100.0, 100.0)
                .with_margins(CanvasMargins::uniform(f64::INFINITY))
                .check()
                .is_err()
        );
    }
}
