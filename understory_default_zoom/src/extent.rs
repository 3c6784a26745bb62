// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box accumulation and the degenerate-extent guard.

use kurbo::Rect;

/// Smallest extent used as a divisor when fitting content.
///
/// Content whose bounding box collapses to a line or a point along an axis
/// is measured as this wide instead, which keeps every derived scale finite.
pub const MIN_EXTENT: f64 = 1e-9;

/// Returns `max - min`, or [`MIN_EXTENT`] when that is not a usable divisor.
pub(crate) fn guarded_extent(axis: &'static str, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if extent > MIN_EXTENT {
        extent
    } else {
        tracing::debug!(axis, min, max, "degenerate extent, substituting minimum");
        MIN_EXTENT
    }
}

/// Running union of axis-aligned rectangles.
///
/// Unlike folding with [`Rect::union`] from a seed, an empty accumulator has
/// no bounds at all, so the first rectangle is taken as-is.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BoundsAccumulator {
    bounds: Option<Rect>,
}

impl BoundsAccumulator {
    pub(crate) fn add(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union(rect),
            None => rect,
        });
    }

    pub(crate) fn finish(self) -> Option<Rect> {
        self.bounds
    }
}

/// Running `(min, max)` over a scalar sequence.
pub(crate) fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
        None => Some((v, v)),
    })
}
