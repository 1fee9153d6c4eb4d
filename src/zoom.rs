//! Zoom animations: a run of frames over viewports that contract
//! toward a fixed center by a constant factor per step.
//!
//! Each step multiplies both corner offsets by `exp(-step_scale)`, so
//! after `n` steps the magnification is `exp(n * step_scale)`.  The
//! run stops once the total magnification reaches `10^exponent`,
//! which takes `ceil(ln 10 * exponent / step_scale)` steps; with the
//! initial unscaled frame that is one more frame than steps.  Frames
//! are rendered lazily, one per `next`, and handed off in order.

use errors::ParamError;
use planes::Viewport;
use render::{Frame, FrameRenderer, RenderParams};
use std::f64::consts::LN_10;

/// A lazy, exactly-sized run of frames zooming toward the viewport
/// center.  Yields `(frame, delay)` pairs; the delay is the constant
/// display duration the caller supplied, in milliseconds, carried
/// through untouched for the consumer's encoder.
#[derive(Debug)]
pub struct ZoomSequence {
    renderer: FrameRenderer,
    viewport: Viewport,
    mult: f64,
    remaining: usize,
    delay: u16,
    threads: usize,
}

impl ZoomSequence {
    /// Validates the parameters and sets up the run.  The zoom step
    /// and the target exponent must both be positive or the run would
    /// never converge.
    pub fn new(
        params: &RenderParams,
        exponent: f64,
        step_scale: f64,
        delay: u16,
        threads: usize,
    ) -> Result<ZoomSequence, ParamError> {
        if step_scale <= 0.0 {
            return Err(ParamError::InvalidZoomStep { value: step_scale });
        }
        if exponent <= 0.0 {
            return Err(ParamError::InvalidZoomStep { value: exponent });
        }
        let renderer = FrameRenderer::new(params)?;
        let viewport = Viewport::with_circle_inscribed(
            params.width,
            params.height,
            params.center,
            params.radius,
        )?;
        let steps = (LN_10 * exponent / step_scale).ceil() as usize;
        Ok(ZoomSequence {
            renderer,
            viewport,
            mult: (-step_scale).exp(),
            remaining: steps + 1,
            delay,
            threads,
        })
    }

    /// The viewport the next frame will be rendered from.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl Iterator for ZoomSequence {
    type Item = (Frame, u16);

    fn next(&mut self) -> Option<(Frame, u16)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let frame = self.renderer.render_threaded(&self.viewport, self.threads);
        self.viewport = self.viewport.scaled(self.mult);
        Some((frame, self.delay))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ZoomSequence {}
