// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::modes::LayerExtent;

/// Framing policy for node-link graph views.
///
/// The defaults reproduce the standard graph framing:
/// - a node never covers more than a fifth of the shorter view side,
/// - the graph initially fills 90% of the view, but never starts zoomed in
///   further than half of the maximum zoom,
/// - the user may always zoom out to a fifth of the initial scale,
/// - panning is allowed up to ten graph extents away from the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphZoomConfig {
    /// Framing radius of every node, in world units.
    pub node_base_size: f64,
    /// Fraction of the view the graph fills initially.
    pub fill_ratio: f64,
    /// At maximum zoom a node spans `1 / max_zoom_divisor` of the shorter view side.
    pub max_zoom_divisor: f64,
    /// The initial scale never exceeds `max_scale / initial_zoom_divisor`.
    pub initial_zoom_divisor: f64,
    /// Minimum scale is the initial scale divided by this.
    pub min_zoom_divisor: f64,
    /// Pan limits extend this many content extents past the content.
    pub pan_margin_factor: f64,
}

impl GraphZoomConfig {
    /// Framing radius used when none is configured.
    pub const DEFAULT_NODE_BASE_SIZE: f64 = 100.0;
}

impl Default for GraphZoomConfig {
    fn default() -> Self {
        Self {
            node_base_size: Self::DEFAULT_NODE_BASE_SIZE,
            fill_ratio: 0.9,
            max_zoom_divisor: 5.0,
            initial_zoom_divisor: 2.0,
            min_zoom_divisor: 5.0,
            pan_margin_factor: 10.0,
        }
    }
}

/// Framing policy for layered resource views.
///
/// Rows are fitted to the full view width and to 70% of the view height.
/// Because rows are thin, zooming in is allowed up to 2000 times the
/// width-fitted scale, while zooming out stops at that scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceZoomConfig {
    /// Height of a single layer, in world units.
    pub layer_height: f64,
    /// Fraction of the view width the chart fills initially.
    pub fill_x: f64,
    /// Fraction of the view height the chart fills initially.
    pub fill_y: f64,
    /// Maximum scale as a multiple of the horizontal scale.
    pub max_zoom_factor: f64,
    /// Which layers the vertical extent covers.
    pub layer_extent: LayerExtent,
}

impl ResourceZoomConfig {
    /// Layer height used when none is configured.
    pub const DEFAULT_LAYER_HEIGHT: f64 = 150.0;
}

impl Default for ResourceZoomConfig {
    fn default() -> Self {
        Self {
            layer_height: Self::DEFAULT_LAYER_HEIGHT,
            fill_x: 1.0,
            fill_y: 0.7,
            max_zoom_factor: 2000.0,
            layer_extent: LayerExtent::default(),
        }
    }
}
