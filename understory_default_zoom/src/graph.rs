// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::bounds::{DefaultZoom, ViewportBounds};
use crate::canvas::CanvasMetrics;
use crate::config::GraphZoomConfig;
use crate::error::FitError;
use crate::extent::{BoundsAccumulator, guarded_extent};
use crate::fitter::ViewportFitter;

/// Fits a free-form node-link graph into a canvas with a uniform scale.
///
/// Every node is framed as a square of radius
/// [`GraphZoomConfig::node_base_size`] around its position, independent of
/// how large it is eventually drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphViewportFitter {
    config: GraphZoomConfig,
}

/// Snapshot of a graph view's geometry for [`GraphViewportFitter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphZoomInput {
    /// Laid-out node positions in world space.
    pub nodes: Vec<Point>,
    /// Canvas the graph is fitted into.
    pub canvas: CanvasMetrics,
}

impl GraphViewportFitter {
    /// Creates a fitter with the given framing policy.
    #[must_use]
    pub fn new(config: GraphZoomConfig) -> Self {
        Self { config }
    }

    /// Returns this fitter with a different node framing radius.
    #[must_use]
    pub fn with_node_base_size(mut self, node_base_size: f64) -> Self {
        self.config.node_base_size = node_base_size;
        self
    }

    /// Returns the framing policy.
    #[must_use]
    pub fn config(&self) -> &GraphZoomConfig {
        &self.config
    }

    /// Fits the given node positions into `canvas`.
    ///
    /// # Errors
    ///
    /// See [`ViewportFitter::try_fit`].
    pub fn fit_nodes(
        &self,
        nodes: &[Point],
        canvas: &CanvasMetrics,
    ) -> Result<DefaultZoom, FitError> {
        let Some(content) = self.content_bounds(nodes)? else {
            return Ok(DefaultZoom::Empty);
        };
        canvas.check()?;

        let cfg = &self.config;
        let (width, height) = (canvas.width, canvas.height);
        let x_extent = guarded_extent("x", content.x0, content.x1);
        let y_extent = guarded_extent("y", content.y0, content.y1);

        let x_factor = width / x_extent;
        let y_factor = height / y_extent;
        let max_scale = width.min(height) / cfg.node_base_size / cfg.max_zoom_divisor;
        let scale = x_factor
            .min(y_factor)
            .min(max_scale / cfg.initial_zoom_divisor)
            * cfg.fill_ratio;
        let min_scale = scale / cfg.min_zoom_divisor;

        let x_margin = x_extent * cfg.pan_margin_factor;
        let y_margin = y_extent * cfg.pan_margin_factor;

        let bounds = ViewportBounds {
            min_translate_x: content.x0 - x_margin,
            max_translate_x: content.x1 + x_margin,
            min_translate_y: content.y0 - y_margin,
            max_translate_y: content.y1 + y_margin,
            translate_x: (width - (content.x1 + content.x0) * scale) / 2.0 + canvas.margins.left,
            translate_y: (height - (content.y1 + content.y0) * scale) / 2.0 + canvas.margins.top,
            min_scale,
            max_scale,
            scale_x: scale,
            scale_y: scale,
        };
        bounds.validate()?;
        tracing::trace!(nodes = nodes.len(), scale, min_scale, max_scale, "fitted graph view");
        Ok(bounds.into())
    }

    /// Bounding box of all nodes padded by the framing radius, or `None`
    /// when there are no nodes.
    fn content_bounds(&self, nodes: &[Point]) -> Result<Option<Rect>, FitError> {
        let r = self.config.node_base_size;
        let mut acc = BoundsAccumulator::default();
        for (index, p) in nodes.iter().enumerate() {
            if !p.is_finite() {
                return Err(FitError::NonFiniteNode { index });
            }
            acc.add(Rect::new(p.x - r, p.y - r, p.x + r, p.y + r));
        }
        Ok(acc.finish())
    }
}

impl ViewportFitter for GraphViewportFitter {
    type Input = GraphZoomInput;

    fn try_fit(&self, input: &GraphZoomInput) -> Result<DefaultZoom, FitError> {
        self.fit_nodes(&input.nodes, &input.canvas)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{GraphViewportFitter, GraphZoomInput};
    use crate::bounds::{DefaultZoom, ViewportBounds};
    use crate::canvas::{CanvasMargins, CanvasMetrics};
    use crate::error::FitError;
    use crate::fitter::ViewportFitter;

    fn fit(
        fitter: &GraphViewportFitter,
        nodes: Vec<Point>,
        canvas: CanvasMetrics,
    ) -> ViewportBounds {
        let zoom = fitter.fit(&GraphZoomInput { nodes, canvas });
        *zoom.bounds().expect("graph should be fitted")
    }

    #[test]
    fn empty_graph_yields_empty_sentinel() {
        let fitter = GraphViewportFitter::default();
        let zoom = fitter.try_fit(&GraphZoomInput::default());
        assert_eq!(zoom, Ok(DefaultZoom::Empty));
    }

    #[test]
    fn two_node_scenario() {
        let fitter = GraphViewportFitter::default().with_node_base_size(10.0);
        let b = fit(
            &fitter,
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            CanvasMetrics::new(200.0, 200.0),
        );

        assert!((b.scale_x - 1.5).abs() < 1e-12);
        assert_eq!(b.scale_x, b.scale_y);
        assert_eq!(b.max_scale, 200.0 / 10.0 / 5.0);
        assert_eq!(b.min_scale, b.scale_x / 5.0);
        assert!((b.min_scale - 0.3).abs() < 1e-12);

        // Bounding box is (-10, -10)..(110, 10); pan limits add 10 extents.
        assert!((b.min_translate_x - (-10.0 - 1200.0)).abs() < 1e-9);
        assert!((b.max_translate_x - (110.0 + 1200.0)).abs() < 1e-9);
        assert!((b.min_translate_y - (-10.0 - 200.0)).abs() < 1e-9);
        assert!((b.max_translate_y - (10.0 + 200.0)).abs() < 1e-9);

        // (200 - 100 * 1.5) / 2
        assert!((b.translate_x - 25.0).abs() < 1e-9);
        assert!((b.translate_y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn initial_scale_capped_at_half_max_zoom() {
        // A single node fits at a large factor; the cap applies instead.
        let fitter = GraphViewportFitter::default().with_node_base_size(10.0);
        let b = fit(&fitter, vec![Point::new(5.0, 5.0)], CanvasMetrics::new(400.0, 300.0));
        let max_scale = 300.0 / 10.0 / 5.0;
        assert_eq!(b.max_scale, max_scale);
        assert!((b.scale_x - max_scale / 2.0 * 0.9).abs() < 1e-12);
        assert!(b.min_scale <= b.scale_x && b.scale_x <= b.max_scale);
    }

    #[test]
    fn content_center_lands_on_canvas_center() {
        let fitter = GraphViewportFitter::default();
        let canvas = CanvasMetrics::new(800.0, 600.0)
            .with_margins(CanvasMargins::new(30.0, 40.0, 0.0, 0.0));
        let nodes = vec![
            Point::new(-250.0, 40.0),
            Point::new(900.0, 310.0),
            Point::new(120.0, -600.0),
        ];
        let b = fit(&fitter, nodes, canvas);

        // Padded bbox is (-350, -700)..(1000, 410).
        let center = Point::new((-350.0 + 1000.0) / 2.0, (-700.0 + 410.0) / 2.0);
        let on_screen = b.world_to_view_point(center);
        assert!((on_screen.x - (400.0 + 40.0)).abs() < 1e-9);
        assert!((on_screen.y - (300.0 + 30.0)).abs() < 1e-9);
    }

    #[test]
    fn initial_translate_within_pan_limits() {
        let fitter = GraphViewportFitter::default();
        let layouts = [
            vec![Point::new(0.0, 0.0)],
            vec![Point::new(0.0, 0.0), Point::new(1_000.0, 500.0)],
            vec![Point::new(-300.0, 200.0), Point::new(20.0, 20.0), Point::new(640.0, -80.0)],
        ];
        for nodes in layouts {
            let b = fit(&fitter, nodes, CanvasMetrics::new(1024.0, 768.0));
            assert!(b.min_translate_x <= b.translate_x && b.translate_x <= b.max_translate_x);
            assert!(b.min_translate_y <= b.translate_y && b.translate_y <= b.max_translate_y);
        }
    }

    #[test]
    fn collapsed_graph_stays_finite() {
        // Coincident nodes with a vanishing radius collapse the bounding box.
        let fitter = GraphViewportFitter::default().with_node_base_size(1e-12);
        let b = fit(
            &fitter,
            vec![Point::new(7.0, 7.0), Point::new(7.0, 7.0)],
            CanvasMetrics::new(100.0, 100.0),
        );
        assert!(b.is_finite());
        assert!(b.scale_x > 0.0 && b.min_scale > 0.0 && b.max_scale > 0.0);

        let zero = GraphViewportFitter::default().with_node_base_size(0.0);
        let zoom = zero.try_fit(&GraphZoomInput {
            nodes: vec![Point::new(7.0, 7.0)],
            canvas: CanvasMetrics::new(100.0, 100.0),
        });
        assert!(matches!(zoom, Err(FitError::NonFiniteBounds { .. })));
    }

    #[test]
    fn non_finite_node_is_reported() {
        let fitter = GraphViewportFitter::default();
        let zoom = fitter.try_fit(&GraphZoomInput {
            nodes: vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)],
            canvas: CanvasMetrics::new(100.0, 100.0),
        });
        assert_eq!(zoom, Err(FitError::NonFiniteNode { index: 1 }));
    }
}
