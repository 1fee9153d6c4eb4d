// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The numeric core: escape-time iteration of the quadratic
//! recurrence `z = z^2 + c`.  The Mandelbrot set fixes `z0 = 0` and
//! varies `c` per pixel; a filled Julia set fixes `c` and varies `z0`
//! per pixel.  Either way a point is outside the set once its orbit
//! leaves the disk of radius 2, and the number of steps that took is
//! the pixel's escape count.

use num::Complex;

/// Which of the two quadratic recurrences to iterate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FractalKind {
    /// `z0 = 0`; the pixel's plane point is `c`.
    Mandelbrot,
    /// The pixel's plane point is `z0`; `c` is the fixed constant.
    Julia(Complex<f64>),
}

impl FractalKind {
    /// Escape count of the plane point under this recurrence.
    pub fn iterations(&self, point: Complex<f64>, max_iters: u32) -> u32 {
        match *self {
            FractalKind::Mandelbrot => mandelbrot_iters(point, max_iters),
            FractalKind::Julia(c) => julia_iters(point, c, max_iters),
        }
    }
}

/// Iterates `z = z^2 + c` from `z0` and returns the zero-based index
/// of the step at which `|z| >= 2` first holds, or `max_iters` if the
/// orbit survives that many steps.  A start already outside the disk
/// counts as escaping at step 0.
fn escape_count(z0: Complex<f64>, c: Complex<f64>, max_iters: u32) -> u32 {
    let mut z = z0;
    if z.norm_sqr() >= 4.0 {
        return 0;
    }
    for i in 0..max_iters {
        z = z * z + c;
        if z.norm_sqr() >= 4.0 {
            return i;
        }
    }
    max_iters
}

/// Number of iterations needed to confirm `c` is outside the
/// Mandelbrot set, or `max_iters` if it was never confirmed.
pub fn mandelbrot_iters(c: Complex<f64>, max_iters: u32) -> u32 {
    escape_count(Complex::new(0.0, 0.0), c, max_iters)
}

/// Number of iterations needed to confirm `z0` is outside the filled
/// Julia set with constant `c`, or `max_iters` if it was never
/// confirmed.
pub fn julia_iters(z0: Complex<f64>, c: Complex<f64>, max_iters: u32) -> u32 {
    escape_count(z0, c, max_iters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_origin_never_escapes() {
        for max in &[1, 2, 100, 5000] {
            assert_eq!(mandelbrot_iters(Complex::new(0.0, 0.0), *max), *max);
        }
    }

    #[test]
    fn points_outside_the_disk_escape_at_step_zero() {
        assert_eq!(mandelbrot_iters(Complex::new(2.5, 0.0), 100), 0);
        assert_eq!(mandelbrot_iters(Complex::new(0.0, -3.0), 100), 0);
        assert_eq!(mandelbrot_iters(Complex::new(-2.0, 2.0), 100), 0);
    }

    #[test]
    fn the_disk_boundary_escapes_at_step_zero() {
        // |c| is exactly 2; z1 = c already fails the |z| < 2 test.
        assert_eq!(mandelbrot_iters(Complex::new(2.0, 0.0), 100), 0);
        assert_eq!(mandelbrot_iters(Complex::new(0.0, 2.0), 100), 0);
    }

    #[test]
    fn interior_points_exhaust_the_bound() {
        // -1 is inside the period-2 bulb, i is in the set.
        assert_eq!(mandelbrot_iters(Complex::new(-1.0, 0.0), 250), 250);
        assert_eq!(mandelbrot_iters(Complex::new(0.0, 1.0), 250), 250);
    }

    #[test]
    fn a_slow_escape_is_counted() {
        // c = 1: orbit 0, 1, 2, ... |2| >= 2 on the second step.
        assert_eq!(mandelbrot_iters(Complex::new(1.0, 0.0), 100), 1);
    }

    #[test]
    fn the_count_never_exceeds_the_bound() {
        // 0.25 + epsilon sits just off the cardioid cusp and escapes
        // very slowly.
        let c = Complex::new(0.2501, 0.0);
        assert!(mandelbrot_iters(c, 50) <= 50);
        assert_eq!(mandelbrot_iters(c, 2), 2);
    }

    #[test]
    fn julia_starts_outside_the_disk_escape_at_step_zero() {
        let c = Complex::new(-0.8696, 0.26);
        assert_eq!(julia_iters(Complex::new(3.0, 0.0), c, 100), 0);
    }

    #[test]
    fn julia_and_mandelbrot_are_not_aliased() {
        // Under the Julia recurrence with c = 0, any |z0| < 1 point
        // never escapes; under Mandelbrot the same plane point is fed
        // in as c instead and some of those escape.  Check a point
        // where the two disagree.
        let point = Complex::new(0.5, 0.5);
        let julia = julia_iters(point, Complex::new(0.0, 0.0), 100);
        let mandel = mandelbrot_iters(point, 100);
        assert_eq!(julia, 100);
        assert!(mandel < 100);
    }

    #[test]
    fn kinds_dispatch_to_their_recurrences() {
        let point = Complex::new(0.5, 0.5);
        let c = Complex::new(0.0, 0.0);
        assert_eq!(
            FractalKind::Mandelbrot.iterations(point, 64),
            mandelbrot_iters(point, 64)
        );
        assert_eq!(
            FractalKind::Julia(c).iterations(point, 64),
            julia_iters(point, c, 64)
        );
    }
}
