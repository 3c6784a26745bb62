// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which layers contribute to the vertical extent of a resource chart.
///
/// This mode is consulted by [`crate::ResourceViewportFitter`] when it
/// measures the chart's vertical bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayerExtent {
    /// Only layers that hold at least one layout node are measured.
    ///
    /// Empty layers above or below the occupied ones do not widen the
    /// fitted region, so the rows that actually carry resources fill the
    /// view.
    #[default]
    OccupiedLayers,
    /// Every layer in the layer-position lookup is measured, whether or not
    /// any node sits in it.
    AllLayers,
}
