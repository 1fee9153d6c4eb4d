// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the plane mapper, the escape iteration, and the colorizer
//! over every pixel of a buffer to produce finished frames.  Pixels
//! are independent of one another, which is the parallelization seam:
//! the threaded renderer splits the buffer into disjoint row bands
//! and joins once at the end.

use color::ColorPolicy;
use crossbeam;
use errors::ParamError;
use escape::FractalKind;
use image::{Rgba, RgbaImage};
use itertools::iproduct;
use num::Complex;
use planes::{PlaneMapper, Viewport};

/// A finished raster, ready for an encoder.  Exclusively owned by the
/// caller that requested it and never mutated after rendering.
pub type Frame = RgbaImage;

/// Anything that accepts pixel colors at integral coordinates.
/// Rendering through this trait keeps the pixel loop independent of
/// whether the destination is a standalone raster or one frame of an
/// animation.
pub trait PixelSink {
    /// Store `color` at `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>);
}

impl PixelSink for RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.put_pixel(x, y, color);
    }
}

/// Everything a caller specifies to get a frame rendered.
#[derive(Copy, Clone, Debug)]
pub struct RenderParams {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Which recurrence to iterate.
    pub kind: FractalKind,
    /// Center of the region kept in view.
    pub center: Complex<f64>,
    /// Radius of the circle around the center guaranteed to stay in
    /// view.
    pub radius: f64,
    /// Iteration bound before a point is declared in the set.
    pub max_iters: u32,
    /// How escape counts become colors.
    pub policy: ColorPolicy,
}

/// Renders frames of a fixed fractal, size, and coloring, one
/// viewport at a time.
#[derive(Copy, Clone, Debug)]
pub struct FrameRenderer {
    width: usize,
    height: usize,
    kind: FractalKind,
    max_iters: u32,
    policy: ColorPolicy,
}

impl FrameRenderer {
    /// Validates the raster dimensions and the iteration bound.  The
    /// radius is checked separately, where the initial viewport is
    /// derived from it.
    pub fn new(params: &RenderParams) -> Result<FrameRenderer, ParamError> {
        if params.width < 2 || params.height < 2 {
            return Err(ParamError::DegenerateDimension {
                width: params.width,
                height: params.height,
            });
        }
        if params.max_iters < 2 {
            return Err(ParamError::InvalidIterationBound {
                bound: params.max_iters,
            });
        }
        Ok(FrameRenderer {
            width: params.width,
            height: params.height,
            kind: params.kind,
            max_iters: params.max_iters,
            policy: params.policy,
        })
    }

    fn mapper(&self, viewport: &Viewport) -> PlaneMapper {
        PlaneMapper::new(self.width, self.height, *viewport)
            .expect("dimensions were validated at construction")
    }

    /// Renders the viewport into any pixel sink, one pixel at a time
    /// in row-major order.
    pub fn render_into<S: PixelSink>(&self, viewport: &Viewport, sink: &mut S) {
        let mapper = self.mapper(viewport);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let point = mapper.pixel_to_point(x, y);
            let iters = self.kind.iterations(point, self.max_iters);
            sink.set_pixel(x as u32, y as u32, self.policy.colorize(iters, self.max_iters));
        }
    }

    /// Renders the viewport into a fresh frame on the calling thread.
    pub fn render(&self, viewport: &Viewport) -> Frame {
        let mut frame = Frame::new(self.width as u32, self.height as u32);
        self.render_into(viewport, &mut frame);
        frame
    }

    /// Renders the viewport with pixel rows split across `threads`
    /// worker threads.  Every band writes a disjoint slice of the
    /// output and reads no shared mutable state, so the final join is
    /// the only synchronization.  The output is identical to
    /// `render`'s.
    pub fn render_threaded(&self, viewport: &Viewport, threads: usize) -> Frame {
        if threads <= 1 {
            return self.render(viewport);
        }
        let mapper = self.mapper(viewport);
        let mut frame = Frame::new(self.width as u32, self.height as u32);
        let row_len = self.width * 4;
        let band_rows = self.height / threads + 1;
        {
            let bands: Vec<(usize, &mut [u8])> = frame
                .chunks_mut(band_rows * row_len)
                .enumerate()
                .map(|(i, band)| (i * band_rows, band))
                .collect();
            crossbeam::scope(|spawner| {
                for (top, band) in bands {
                    spawner.spawn(move |_| {
                        for (offset, row) in band.chunks_mut(row_len).enumerate() {
                            self.render_row(&mapper, top + offset, row);
                        }
                    });
                }
            })
            .unwrap();
        }
        frame
    }

    fn render_row(&self, mapper: &PlaneMapper, y: usize, row: &mut [u8]) {
        for (x, pixel) in row.chunks_mut(4).enumerate() {
            let point = mapper.pixel_to_point(x, y);
            let iters = self.kind.iterations(point, self.max_iters);
            let Rgba(rgba) = self.policy.colorize(iters, self.max_iters);
            pixel.copy_from_slice(&rgba);
        }
    }
}

/// Renders one frame per `params`, deriving the viewport that keeps
/// the circle of `params.radius` around `params.center` in view.
pub fn render_frame(params: &RenderParams, threads: usize) -> Result<Frame, ParamError> {
    let renderer = FrameRenderer::new(params)?;
    let viewport = Viewport::with_circle_inscribed(
        params.width,
        params.height,
        params.center,
        params.radius,
    )?;
    Ok(renderer.render_threaded(&viewport, threads))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot_params() -> RenderParams {
        RenderParams {
            width: 100,
            height: 100,
            kind: FractalKind::Mandelbrot,
            center: Complex::new(-0.5, 0.0),
            radius: 1.5,
            max_iters: 100,
            policy: ColorPolicy::LogTwoTone,
        }
    }

    #[test]
    fn the_center_of_the_mandelbrot_frame_is_in_the_set() {
        let frame = render_frame(&mandelbrot_params(), 1).unwrap();
        // Pixel (50, 50) maps to a point near (-0.5, 0), inside the
        // main cardioid: it exhausts the bound and renders black.
        assert_eq!(*frame.get_pixel(50, 50), Rgba([0, 0, 0, 0xff]));
    }

    #[test]
    fn julia_frames_differ_from_mandelbrot_frames() {
        let mandel = render_frame(&mandelbrot_params(), 1).unwrap();
        let mut params = mandelbrot_params();
        params.kind = FractalKind::Julia(Complex::new(-0.8696, 0.26));
        let julia = render_frame(&params, 1).unwrap();
        assert!(mandel.into_raw() != julia.into_raw());
    }

    #[test]
    fn threaded_rendering_matches_single_threaded() {
        let renderer = FrameRenderer::new(&mandelbrot_params()).unwrap();
        let viewport =
            Viewport::with_circle_inscribed(100, 100, Complex::new(-0.5, 0.0), 1.5).unwrap();
        let single = renderer.render(&viewport);
        for threads in &[2, 3, 7, 200] {
            let threaded = renderer.render_threaded(&viewport, *threads);
            assert_eq!(&*threaded, &*single);
        }
    }

    #[test]
    fn every_pixel_reaches_the_sink_once() {
        struct Counter {
            writes: usize,
            opaque: bool,
        }
        impl PixelSink for Counter {
            fn set_pixel(&mut self, _x: u32, _y: u32, color: Rgba<u8>) {
                self.writes += 1;
                self.opaque &= color.0[3] == 0xff;
            }
        }
        let mut params = mandelbrot_params();
        params.width = 16;
        params.height = 9;
        let renderer = FrameRenderer::new(&params).unwrap();
        let viewport =
            Viewport::with_circle_inscribed(16, 9, params.center, params.radius).unwrap();
        let mut sink = Counter {
            writes: 0,
            opaque: true,
        };
        renderer.render_into(&viewport, &mut sink);
        assert_eq!(sink.writes, 16 * 9);
        assert!(sink.opaque);
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let mut params = mandelbrot_params();
        params.height = 1;
        assert_eq!(
            render_frame(&params, 1).unwrap_err(),
            ParamError::DegenerateDimension {
                width: 100,
                height: 1
            }
        );
    }

    #[test]
    fn unusable_iteration_bounds_are_rejected() {
        let mut params = mandelbrot_params();
        for bound in 0..2 {
            params.max_iters = bound;
            assert_eq!(
                render_frame(&params, 1).unwrap_err(),
                ParamError::InvalidIterationBound { bound }
            );
        }
    }

    #[test]
    fn nonpositive_radii_are_rejected() {
        let mut params = mandelbrot_params();
        params.radius = 0.0;
        assert_eq!(
            render_frame(&params, 1).unwrap_err(),
            ParamError::InvalidRadius { radius: 0.0 }
        );
    }
}
