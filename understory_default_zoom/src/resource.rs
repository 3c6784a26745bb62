// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::bounds::{DefaultZoom, ViewportBounds};
use crate::canvas::CanvasMetrics;
use crate::config::ResourceZoomConfig;
use crate::error::FitError;
use crate::extent::{guarded_extent, min_max};
use crate::fitter::ViewportFitter;
use crate::modes::LayerExtent;

/// Vertical offset of each topology's layer, keyed by topology id.
pub type LayerPositions = HashMap<String, f64>;

/// A resource bar in a layered resource view.
///
/// The bar spans `x..x + width` horizontally. Its vertical placement comes
/// from the layer of its topology (see [`LayerPositions`]).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// Left edge in world space.
    pub x: f64,
    /// Horizontal extent in world space.
    pub width: f64,
    /// Topology whose layer this node sits in.
    pub topology_id: String,
}

impl LayoutNode {
    /// Creates a layout node.
    #[must_use]
    pub fn new(x: f64, width: f64, topology_id: impl Into<String>) -> Self {
        Self {
            x,
            width,
            topology_id: topology_id.into(),
        }
    }
}

/// Snapshot of a resource view's geometry for [`ResourceViewportFitter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceZoomInput {
    /// Vertical layer offsets per topology.
    pub layer_positions: LayerPositions,
    /// Laid-out resource bars.
    pub nodes: Vec<LayoutNode>,
    /// Canvas the chart is fitted into.
    pub canvas: CanvasMetrics,
}

/// Fits a layered resource chart into a canvas with independent X/Y scales.
///
/// Rows are stretched to the full canvas width while the layers fill a
/// fraction of its height; aspect ratio is not preserved. Pan limits are
/// the chart's own bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResourceViewportFitter {
    config: ResourceZoomConfig,
}

impl ResourceViewportFitter {
    /// Creates a fitter with the given framing policy.
    #[must_use]
    pub fn new(config: ResourceZoomConfig) -> Self {
        Self { config }
    }

    /// Returns this fitter with a different layer height.
    #[must_use]
    pub fn with_layer_height(mut self, layer_height: f64) -> Self {
        self.config.layer_height = layer_height;
        self
    }

    /// Returns this fitter with a different vertical extent mode.
    #[must_use]
    pub fn with_layer_extent(mut self, layer_extent: LayerExtent) -> Self {
        self.config.layer_extent = layer_extent;
        self
    }

    /// Returns the framing policy.
    #[must_use]
    pub fn config(&self) -> &ResourceZoomConfig {
        &self.config
    }

    /// Fits the given resource bars into `canvas`.
    ///
    /// # Errors
    ///
    /// See [`ViewportFitter::try_fit`].
    pub fn fit_nodes(
        &self,
        layer_positions: &LayerPositions,
        nodes: &[LayoutNode],
        canvas: &CanvasMetrics,
    ) -> Result<DefaultZoom, FitError> {
        for (index, node) in nodes.iter().enumerate() {
            if !node.x.is_finite() || !node.width.is_finite() {
                return Err(FitError::NonFiniteNode { index });
            }
        }
        let Some((x_min, _)) = min_max(nodes.iter().map(|n| n.x)) else {
            return Ok(DefaultZoom::Empty);
        };
        let x_max = nodes
            .iter()
            .map(|n| n.x + n.width)
            .fold(f64::NEG_INFINITY, f64::max);
        canvas.check()?;

        let cfg = &self.config;
        let (y_min, y_max) = self.vertical_extent(layer_positions, nodes)?;
        let (width, height) = (canvas.width, canvas.height);

        let scale_x = width / guarded_extent("x", x_min, x_max) * cfg.fill_x;
        let max_scale = scale_x * cfg.max_zoom_factor;
        let min_scale = scale_x;
        let fitted_y = height / guarded_extent("y", y_min, y_max) * cfg.fill_y;
        let scale_y = fitted_y.max(min_scale).min(max_scale);
        if scale_y != fitted_y {
            tracing::debug!(fitted_y, scale_y, "vertical scale clamped into zoom range");
        }

        let bounds = ViewportBounds {
            min_translate_x: x_min,
            max_translate_x: x_max,
            min_translate_y: y_min,
            max_translate_y: y_max,
            translate_x: (width - (x_max + x_min) * scale_x) / 2.0 + canvas.margins.left,
            translate_y: (height - (y_max + y_min) * scale_y) / 2.0 + canvas.margins.top,
            min_scale,
            max_scale,
            scale_x,
            scale_y,
        };
        bounds.validate()?;
        tracing::trace!(nodes = nodes.len(), scale_x, scale_y, "fitted resource view");
        Ok(bounds.into())
    }

    /// Top of the highest and bottom of the lowest measured layer.
    fn vertical_extent(
        &self,
        layer_positions: &LayerPositions,
        nodes: &[LayoutNode],
    ) -> Result<(f64, f64), FitError> {
        let offsets = match self.config.layer_extent {
            LayerExtent::OccupiedLayers => {
                let mut offsets = Vec::with_capacity(nodes.len());
                for node in nodes {
                    match layer_positions.get(&node.topology_id) {
                        Some(&offset) => offsets.push((&node.topology_id, offset)),
                        None => tracing::debug!(
                            topology_id = node.topology_id.as_str(),
                            "no layer position for topology"
                        ),
                    }
                }
                offsets
            }
            LayerExtent::AllLayers => layer_positions.iter().map(|(id, &o)| (id, o)).collect(),
        };
        if let Some((id, _)) = offsets.iter().find(|(_, o)| !o.is_finite()) {
            return Err(FitError::NonFiniteLayer {
                topology_id: (*id).clone(),
            });
        }
        Ok(match min_max(offsets.iter().map(|&(_, o)| o)) {
            Some((top, lowest)) => (top, lowest + self.config.layer_height),
            None => {
                tracing::debug!("no measurable layers, framing a single layer");
                (0.0, self.config.layer_height)
            }
        })
    }
}

impl ViewportFitter for ResourceViewportFitter {
    type Input = ResourceZoomInput;

    fn try_fit(&self, input: &ResourceZoomInput) -> Result<DefaultZoom, FitError> {
        self.fit_nodes(&input.layer_positions, &input.nodes, &input.canvas)
    }
}
