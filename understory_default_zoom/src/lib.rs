// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_default_zoom --heading-base-level=0

//! Understory Default Zoom: initial camera and pan/zoom limits for diagram views.
//!
//! This crate measures already laid-out diagram geometry and derives how a
//! view should first frame it, plus how far the user may later zoom and pan.
//! It supports two kinds of views:
//! - Node-link graphs ([`GraphViewportFitter`]): nodes are points framed with
//!   a fixed radius, and the view is scaled uniformly.
//! - Layered resource charts ([`ResourceViewportFitter`]): nodes are
//!   horizontal bars stacked in per-topology layers, and the view is scaled
//!   independently along X and Y.
//!
//! Both produce a [`DefaultZoom`]: either [`DefaultZoom::Empty`] when there
//! is nothing to fit, or a [`ViewportBounds`] with the initial translation
//! and scale and the limits a pan/zoom controller clamps gestures to.
//!
//! It does **not** lay out nodes, draw anything, or handle input. Callers
//! are expected to:
//! - Run layout elsewhere and hand in node positions.
//! - Apply [`ViewportBounds::world_to_view`] as the starting camera.
//! - Clamp live gestures with [`ViewportBounds::clamp_scale`] and
//!   [`ViewportBounds::clamp_translate`].
//! - Wrap a fitter in [`CachedFit`] when inputs are polled every frame.
//!
//! ## Graph example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_default_zoom::{CanvasMetrics, GraphViewportFitter};
//!
//! let fitter = GraphViewportFitter::default().with_node_base_size(10.0);
//! let nodes = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
//! let zoom = fitter
//!     .fit_nodes(&nodes, &CanvasMetrics::new(200.0, 200.0))
//!     .unwrap();
//!
//! let bounds = zoom.bounds().unwrap();
//! assert!((bounds.scale_x - 1.5).abs() < 1e-9);
//! assert_eq!(bounds.scale_x, bounds.scale_y);
//! assert_eq!(bounds.max_scale, 4.0);
//! ```
//!
//! ## Resource chart example
//!
//! ```rust
//! use understory_default_zoom::{
//!     CanvasMetrics, LayerPositions, LayoutNode, ResourceViewportFitter,
//! };
//!
//! let mut layers = LayerPositions::new();
//! layers.insert("hosts".into(), 0.0);
//!
//! let fitter = ResourceViewportFitter::default().with_layer_height(20.0);
//! let nodes = [LayoutNode::new(0.0, 50.0, "hosts")];
//! let zoom = fitter
//!     .fit_nodes(&layers, &nodes, &CanvasMetrics::new(100.0, 100.0))
//!     .unwrap();
//!
//! let bounds = zoom.bounds().unwrap();
//! assert_eq!(bounds.scale_x, 2.0);
//! assert!((bounds.scale_y - 3.5).abs() < 1e-9);
//! assert_eq!(bounds.min_scale, 2.0);
//! assert_eq!(bounds.max_scale, 4000.0);
//! ```
//!
//! ## Design notes
//!
//! - All fitting is pure: the result depends only on the inputs and the
//!   fitter's config, so it is safe to cache.
//! - Degenerate geometry (all nodes on one line) is measured with a tiny
//!   positive extent ([`MIN_EXTENT`]) rather than divided by zero.
//! - Results never contain NaN or infinities: [`ViewportFitter::fit`]
//!   returns [`DefaultZoom::Empty`] instead, and
//!   [`ViewportFitter::try_fit`] reports why.
//! - Diagnostics are emitted through `tracing`; no subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod canvas;
mod config;
mod error;
mod extent;
mod fitter;
mod graph;
mod modes;
mod resource;

pub use bounds::{DefaultZoom, ViewportBounds};
pub use canvas::{CanvasMargins, CanvasMetrics};
pub use config::{GraphZoomConfig, ResourceZoomConfig};
pub use error::FitError;
pub use extent::MIN_EXTENT;
pub use fitter::{CachedFit, ViewportFitter};
pub use graph::{GraphViewportFitter, GraphZoomInput};
pub use modes::LayerExtent;
pub use resource::{LayerPositions, LayoutNode, ResourceViewportFitter, ResourceZoomInput};
