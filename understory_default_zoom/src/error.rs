// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Reasons a default zoom could not be derived from the given inputs.
///
/// [`crate::ViewportFitter::fit`] never surfaces these: it logs them and
/// returns [`crate::DefaultZoom::Empty`] instead, so the consumer falls back to
/// an unscaled view. Use [`crate::ViewportFitter::try_fit`] to observe them.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// The canvas has a non-finite or non-positive dimension.
    #[error("canvas size {width}x{height} must be finite and positive")]
    InvalidCanvas {
        /// Canvas width as given.
        width: f64,
        /// Canvas height as given.
        height: f64,
    },
    /// A node carries a NaN or infinite coordinate or width.
    #[error("node {index} has a non-finite position or width")]
    NonFiniteNode {
        /// Position of the node in the input collection.
        index: usize,
    },
    /// A layer offset used for the vertical extent is NaN or infinite.
    #[error("layer position for topology `{topology_id}` is not finite")]
    NonFiniteLayer {
        /// Topology whose layer offset is invalid.
        topology_id: String,
    },
    /// A computed output field is NaN or infinite.
    #[error("computed `{field}` is not finite ({value})")]
    NonFiniteBounds {
        /// Name of the offending field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A computed scale is zero or negative.
    #[error("computed `{field}` must be positive, got {value}")]
    NonPositiveScale {
        /// Name of the offending scale field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The computed zoom range is empty.
    #[error("zoom range is inverted: min {min} > max {max}")]
    InvertedZoomRange {
        /// Computed minimum scale.
        min: f64,
        /// Computed maximum scale.
        max: f64,
    },
}
