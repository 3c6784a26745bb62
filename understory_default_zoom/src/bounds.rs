// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::FitError;

/// Initial camera state plus pan/zoom limits for a diagram view.
///
/// The camera maps a world-space point `p` to view space as
/// `translate + scale * p` (per axis), which is what
/// [`ViewportBounds::world_to_view`] returns as an [`Affine`].
///
/// A `ViewportBounds` is a derived value: fitters build a fresh one whenever
/// their inputs change and nothing mutates it afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    /// Lower limit for the horizontal pan.
    pub min_translate_x: f64,
    /// Upper limit for the horizontal pan.
    pub max_translate_x: f64,
    /// Lower limit for the vertical pan.
    pub min_translate_y: f64,
    /// Upper limit for the vertical pan.
    pub max_translate_y: f64,
    /// Initial horizontal translation in view space.
    pub translate_x: f64,
    /// Initial vertical translation in view space.
    pub translate_y: f64,
    /// Smallest scale the user may zoom out to.
    pub min_scale: f64,
    /// Largest scale the user may zoom in to.
    pub max_scale: f64,
    /// Initial horizontal scale.
    pub scale_x: f64,
    /// Initial vertical scale.
    pub scale_y: f64,
}

impl ViewportBounds {
    /// Initial translation as a vector.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Initial per-axis scale as a vector.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }

    /// Returns `true` if both axes share the same initial scale.
    #[must_use]
    pub fn is_isotropic(&self) -> bool {
        self.scale_x == self.scale_y
    }

    /// Pan limits as a rectangle (`x0..x1` horizontally, `y0..y1` vertically).
    #[must_use]
    pub fn translate_limits(&self) -> Rect {
        Rect::new(
            self.min_translate_x,
            self.min_translate_y,
            self.max_translate_x,
            self.max_translate_y,
        )
    }

    /// Initial world → view transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        Affine::translate(self.translate()) * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Initial view → world transform.
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.world_to_view().inverse()
    }

    /// Maps a world-space point into view space under the initial camera.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view() * pt
    }

    /// Clamps a live scale into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        // Not `f64::clamp`: the fields are public and may be out of order.
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Clamps a live translation into the pan limits.
    #[must_use]
    pub fn clamp_translate(&self, translate: Vec2) -> Vec2 {
        Vec2::new(
            translate
                .x
                .max(self.min_translate_x)
                .min(self.max_translate_x),
            translate
                .y
                .max(self.min_translate_y)
                .min(self.max_translate_y),
        )
    }

    /// Returns `true` if every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    /// Checks that the bounds are safe to hand to a pan/zoom controller.
    ///
    /// Every field must be finite, every scale positive, and
    /// `min_scale <= max_scale`.
    ///
    /// # Errors
    ///
    /// Returns the first violated condition as a [`FitError`].
    pub fn validate(&self) -> Result<(), FitError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(FitError::NonFiniteBounds { field, value });
            }
        }
        for (field, value) in [
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ] {
            if value <= 0.0 {
                return Err(FitError::NonPositiveScale { field, value });
            }
        }
        if self.min_scale > self.max_scale {
            return Err(FitError::InvertedZoomRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("min_translate_x", self.min_translate_x),
            ("max_translate_x", self.max_translate_x),
            ("min_translate_y", self.min_translate_y),
            ("max_translate_y", self.max_translate_y),
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
        ]
    }
}

/// Result of fitting a diagram into a canvas.
///
/// `Empty` is the sentinel for "nothing to fit": the diagram had no nodes,
/// or its geometry could not be fitted. Consumers should then use an
/// unscaled, unclamped view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DefaultZoom {
    /// Nothing to fit.
    #[default]
    Empty,
    /// Fitted camera state and limits.
    Fitted(ViewportBounds),
}

impl DefaultZoom {
    /// Returns `true` for the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the fitted bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<&ViewportBounds> {
        match self {
            Self::Empty => None,
            Self::Fitted(bounds) => Some(bounds),
        }
    }

    /// Initial world → view transform, or the identity for the empty sentinel.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.bounds()
            .map_or(Affine::IDENTITY, ViewportBounds::world_to_view)
    }
}

impl From<ViewportBounds> for DefaultZoom {
    fn from(bounds: ViewportBounds) -> Self {
        Self::Fitted(bounds)
    }
}
