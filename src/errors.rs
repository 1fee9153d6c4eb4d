//! Configuration errors reported at the boundary of the public
//! rendering operations.  The numeric core itself is total; every
//! failure mode here is a caller error, detected before any pixel is
//! produced.  A rejected call produces no output.

use failure::Fail;

/// Render parameters that fail boundary validation.
#[derive(Clone, Copy, Debug, Fail, PartialEq)]
pub enum ParamError {
    /// A raster of 0 or 1 pixels on an axis cannot be mapped onto the
    /// plane: each axis interpolates over `width - 1` (respectively
    /// `height - 1`) steps.
    #[fail(
        display = "image dimensions must be at least 2x2, got {}x{}",
        width, height
    )]
    DegenerateDimension {
        /// Requested raster width, in pixels.
        width: usize,
        /// Requested raster height, in pixels.
        height: usize,
    },

    /// A viewport must keep a circle of positive radius in view.
    #[fail(display = "viewport radius must be positive, got {}", radius)]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A zoom run with a non-positive step or exponent would never
    /// converge on its target magnification.
    #[fail(display = "zoom parameters must be positive, got {}", value)]
    InvalidZoomStep {
        /// The rejected step or exponent.
        value: f64,
    },

    /// The escape test needs an iteration bound of at least 2; the
    /// two-tone colorizer scales counts by `bound - 1`.
    #[fail(display = "iteration bound must be at least 2, got {}", bound)]
    InvalidIterationBound {
        /// The rejected bound.
        bound: u32,
    },

    /// A cyclic-palette selector beyond the built-in catalog.
    #[fail(
        display = "no palette with index {}, the catalog holds {}",
        index, len
    )]
    PaletteIndexOutOfRange {
        /// The rejected catalog index.
        index: usize,
        /// Number of palettes in the catalog.
        len: usize,
    },
}
