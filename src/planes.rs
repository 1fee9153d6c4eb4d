//! Geometry between the pixel raster and the complex plane.  The
//! Viewport describes which rectangle of the plane is under view,
//! treating the real part of each corner as the x-component and the
//! imaginary part as the y-component; the PlaneMapper carries pixel
//! coordinates into it.

use errors::ParamError;
use num::Complex;

/// An axis-aligned rectangle on the complex plane, as its top-left
/// and bottom-right corners in screen orientation.  Convention keeps
/// `re(tl) < re(br)` and `im(tl) > im(br)`, though the pixel mapping
/// is a plain affine transform and tolerates either ordering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport(pub Complex<f64>, pub Complex<f64>);

impl Viewport {
    /// The smallest rectangle centered on `center` that keeps the
    /// circle of radius `radius` fully in view while matching the
    /// aspect ratio of a `width` by `height` raster: the longer pixel
    /// axis is scaled up, so the circle stays inscribed along the
    /// shorter one.
    pub fn with_circle_inscribed(
        width: usize,
        height: usize,
        center: Complex<f64>,
        radius: f64,
    ) -> Result<Viewport, ParamError> {
        if radius <= 0.0 {
            return Err(ParamError::InvalidRadius { radius });
        }
        let (mut scale_w, mut scale_h) = (1.0, 1.0);
        if width < height {
            scale_h = (height as f64) / (width as f64);
        } else {
            scale_w = (width as f64) / (height as f64);
        }
        let offset = Complex::new(scale_w * radius, scale_h * radius);
        Ok(Viewport(
            Complex::new(center.re - offset.re, center.im + offset.im),
            Complex::new(center.re + offset.re, center.im - offset.im),
        ))
    }

    /// The midpoint of the two corners.
    pub fn center(&self) -> Complex<f64> {
        (self.0 + self.1) / 2.0
    }

    /// A viewport contracted toward its own center, with both corner
    /// offsets multiplied by `mult`.
    pub fn scaled(&self, mult: f64) -> Viewport {
        let center = self.center();
        Viewport(
            center + (self.0 - center) * mult,
            center + (self.1 - center) * mult,
        )
    }
}

/// Maps pixel coordinates on a raster of known dimensions onto the
/// complex plane framed by a Viewport, interpolating linearly and
/// independently on each axis.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
    viewport: Viewport,
}

impl PlaneMapper {
    /// Constructor.  The raster must be at least 2x2: each axis spans
    /// `width - 1` (respectively `height - 1`) interpolation steps, so
    /// a one-pixel axis has no usable span.
    pub fn new(
        width: usize,
        height: usize,
        viewport: Viewport,
    ) -> Result<PlaneMapper, ParamError> {
        if width < 2 || height < 2 {
            return Err(ParamError::DegenerateDimension { width, height });
        }
        Ok(PlaneMapper {
            width,
            height,
            viewport,
        })
    }

    /// Given the column and row of a pixel, return the complex number
    /// at the equivalent location on the viewport.  Pixel (0, 0) lands
    /// exactly on the top-left corner, and (width-1, height-1) exactly
    /// on the bottom-right.
    pub fn pixel_to_point(&self, x: usize, y: usize) -> Complex<f64> {
        let Viewport(tl, br) = self.viewport;
        Complex::new(
            (x as f64) / ((self.width - 1) as f64) * (br.re - tl.re) + tl.re,
            (y as f64) / ((self.height - 1) as f64) * (br.im - tl.im) + tl.im,
        )
    }
}
