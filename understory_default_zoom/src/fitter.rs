// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fitter capability and a last-input cache around it.

use crate::bounds::DefaultZoom;
use crate::error::FitError;

/// Derives a [`DefaultZoom`] from a snapshot of diagram geometry.
///
/// Implementations are pure: the result depends only on `input` and the
/// fitter's own configuration, so it can be cached by [`CachedFit`].
pub trait ViewportFitter {
    /// Owned snapshot of everything the fit depends on.
    type Input: Clone + PartialEq;

    /// Fits `input`, reporting geometry that cannot produce usable bounds.
    ///
    /// An input without nodes yields [`DefaultZoom::Empty`], not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] when the canvas is unusable, the input carries
    /// non-finite values, or the computed bounds fail
    /// [`ViewportBounds::validate`](crate::ViewportBounds::validate).
    fn try_fit(&self, input: &Self::Input) -> Result<DefaultZoom, FitError>;

    /// Fits `input`, falling back to [`DefaultZoom::Empty`] on error.
    fn fit(&self, input: &Self::Input) -> DefaultZoom {
        self.try_fit(input).unwrap_or_else(|err| {
            tracing::warn!(%err, "cannot fit default zoom, using an unscaled view");
            DefaultZoom::Empty
        })
    }
}

/// Caches the most recent fit and recomputes only when the input changes.
///
/// Inputs are compared structurally, so handing in an equal snapshot (for
/// example on every frame) reuses the previous result.
///
/// ```rust
/// use kurbo::Point;
/// use understory_default_zoom::{
///     CachedFit, CanvasMetrics, GraphViewportFitter, GraphZoomInput,
/// };
///
/// let mut cached = CachedFit::new(GraphViewportFitter::default());
/// let input = GraphZoomInput {
///     nodes: vec![Point::new(0.0, 0.0), Point::new(400.0, 0.0)],
///     canvas: CanvasMetrics::new(800.0, 600.0),
/// };
///
/// let first = cached.get(&input);
/// let again = cached.get(&input.clone());
/// assert_eq!(first, again);
/// assert_eq!(cached.generation(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CachedFit<F: ViewportFitter> {
    fitter: F,
    last: Option<(F::Input, DefaultZoom)>,
    generation: u64,
}

impl<F: ViewportFitter> CachedFit<F> {
    /// Wraps `fitter` with an empty cache.
    #[must_use]
    pub fn new(fitter: F) -> Self {
        Self {
            fitter,
            last: None,
            generation: 0,
        }
    }

    /// Returns the wrapped fitter.
    #[must_use]
    pub fn fitter(&self) -> &F {
        &self.fitter
    }

    /// Replaces the wrapped fitter and drops the cached result.
    pub fn set_fitter(&mut self, fitter: F) {
        self.fitter = fitter;
        self.invalidate();
    }

    /// Returns the fit for `input`, recomputing only if it differs from the
    /// previously seen input.
    pub fn get(&mut self, input: &F::Input) -> DefaultZoom {
        if let Some((last_input, zoom)) = &self.last
            && last_input == input
        {
            return *zoom;
        }
        let zoom = self.fitter.fit(input);
        self.generation += 1;
        tracing::trace!(generation = self.generation, "recomputed default zoom");
        self.last = Some((input.clone(), zoom));
        zoom
    }

    /// Returns the cached result without recomputing, if any.
    #[must_use]
    pub fn cached(&self) -> Option<DefaultZoom> {
        self.last.as_ref().map(|(_, zoom)| *zoom)
    }

    /// Drops the cached result so the next [`CachedFit::get`] recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Number of times a fit has been computed.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
