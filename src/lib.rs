#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! Renders the Mandelbrot set and filled Julia sets by iterating the
//! quadratic recurrence `z = z^2 + c` per pixel and coloring each
//! pixel by how many steps its orbit needs to leave the disk of
//! radius 2.  Points that survive the iteration bound are considered
//! members of the set and drawn black.
//!
//! The crate maps a rectangular viewport of the complex plane onto a
//! raster, colors escape counts either with a two-tone logarithmic
//! gradient or with a small catalog of cyclic palettes, and can
//! produce either a single frame or a lazy zoom sequence of frames
//! contracting toward the viewport center.
//!
//! ```
//! extern crate fractal;
//! extern crate num;
//!
//! use fractal::{ColorPolicy, FractalKind, RenderParams};
//! use num::Complex;
//!
//! fn main() {
//!     let params = RenderParams {
//!         width: 64,
//!         height: 64,
//!         kind: FractalKind::Mandelbrot,
//!         center: Complex::new(-0.5, 0.0),
//!         radius: 1.5,
//!         max_iters: 100,
//!         policy: ColorPolicy::LogTwoTone,
//!     };
//!     let frame = fractal::render_frame(&params, 1).unwrap();
//!     assert_eq!((frame.width(), frame.height()), (64, 64));
//! }
//! ```

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;

pub mod color;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod zoom;

pub use color::{palette, palette_by_name, ColorPolicy, ColorStop, Palette, PALETTES};
pub use errors::ParamError;
pub use escape::{julia_iters, mandelbrot_iters, FractalKind};
pub use planes::{PlaneMapper, Viewport};
pub use render::{render_frame, Frame, FrameRenderer, PixelSink, RenderParams};
pub use zoom::ZoomSequence;
