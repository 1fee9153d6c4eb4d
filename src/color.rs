//! Colorization of escape counts.  Two policies: a two-tone gradient
//! with logarithmic compression, and piecewise-linear interpolation
//! around a small catalog of cyclic palettes.  Points that exhausted
//! the iteration bound are in the set and always drawn opaque black;
//! everything else is an opaque blend.

use errors::ParamError;
use image::Rgba;
use std::f64::consts::E;

/// One fixed color in a palette, as 8-bit RGB intensities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop(pub u8, pub u8, pub u8);

/// An ordered, cyclic run of color stops.  Escape counts walk the
/// stops in order and wrap around past the last; a palette holds at
/// least one stop, typically three or four.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    /// Name used to select the palette from the command line.
    pub name: &'static str,
    /// The stops, in the order the gradient cycles through them.
    pub stops: &'static [ColorStop],
}

/// The built-in palette catalog.  Immutable; callers select an entry
/// by index or name and pass it into the colorizer explicitly.
pub static PALETTES: [Palette; 4] = [
    Palette {
        name: "ember",
        stops: &[
            ColorStop(20, 0, 0),
            ColorStop(255, 80, 0),
            ColorStop(255, 214, 64),
        ],
    },
    Palette {
        name: "glacier",
        stops: &[
            ColorStop(2, 10, 40),
            ColorStop(16, 118, 199),
            ColorStop(171, 228, 255),
        ],
    },
    Palette {
        name: "meadow",
        stops: &[
            ColorStop(4, 18, 4),
            ColorStop(26, 122, 38),
            ColorStop(198, 255, 112),
            ColorStop(240, 255, 224),
        ],
    },
    Palette {
        name: "orchid",
        stops: &[
            ColorStop(24, 0, 38),
            ColorStop(128, 18, 196),
            ColorStop(255, 126, 233),
            ColorStop(255, 240, 255),
        ],
    },
];

/// Looks a palette up by catalog index.
pub fn palette(index: usize) -> Result<&'static Palette, ParamError> {
    PALETTES
        .get(index)
        .ok_or(ParamError::PaletteIndexOutOfRange {
            index,
            len: PALETTES.len(),
        })
}

/// Looks a palette up by name.
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}

const IN_SET: Rgba<u8> = Rgba([0, 0, 0, 0xff]);

// Two-tone endpoints: the blend runs from LOW at counts near zero to
// HIGH at counts near the bound.
const LOW: (f64, f64, f64) = (10.0, 10.0, 40.0);
const HIGH: (f64, f64, f64) = (255.0, 255.0, 0.0);

/// How an escape count becomes a pixel color.  Both policies are pure
/// functions of the count, the bound, and (for Cyclic) the palette.
#[derive(Copy, Clone, Debug)]
pub enum ColorPolicy {
    /// Blend between two fixed endpoint colors, with the blend weight
    /// compressed logarithmically.
    LogTwoTone,
    /// Piecewise-linear interpolation around a cyclic palette.
    Cyclic(&'static Palette),
}

impl ColorPolicy {
    /// Maps an escape count to an opaque color.  A count equal to the
    /// bound means the point never escaped and is drawn black.
    pub fn colorize(&self, iters: u32, max_iters: u32) -> Rgba<u8> {
        if iters == max_iters {
            return IN_SET;
        }
        match *self {
            ColorPolicy::LogTwoTone => log_two_tone(iters, max_iters),
            ColorPolicy::Cyclic(palette) => cyclic(palette, iters),
        }
    }
}

fn log_two_tone(iters: u32, max_iters: u32) -> Rgba<u8> {
    let scale = f64::from(iters) / f64::from(max_iters - 1);
    // Compress toward the low end, smoothing the sparse detail far
    // from the set.
    let scale = (scale * (E - 1.0) + 1.0).ln();
    Rgba([
        (scale * HIGH.0 + (1.0 - scale) * LOW.0) as u8,
        (scale * HIGH.1 + (1.0 - scale) * LOW.1) as u8,
        (scale * HIGH.2 + (1.0 - scale) * LOW.2) as u8,
        0xff,
    ])
}

fn cyclic(palette: &Palette, iters: u32) -> Rgba<u8> {
    let stops = palette.stops;
    let gradients = 256 / stops.len() as u32;
    let index1 = (iters / gradients) as usize % stops.len();
    let index2 = (index1 + 1) % stops.len();
    // Integer truncation in index1 can leave `iters` a full segment
    // ahead of `index1 * gradients` at the wrap point, so the weight
    // is taken against the segment width directly, keeping it in
    // [0, 1).
    let weight = f64::from(iters % gradients) / f64::from(gradients);
    let (from, to) = (stops[index1], stops[index2]);
    Rgba([
        blend(from.0, to.0, weight),
        blend(from.1, to.1, weight),
        blend(from.2, to.2, weight),
        0xff,
    ])
}

fn blend(from: u8, to: u8, weight: f64) -> u8 {
    ((1.0 - weight) * f64::from(from) + weight * f64::from(to)) as u8
}
