extern crate clap;
extern crate failure;
extern crate fractal;
extern crate image;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use fractal::{ColorPolicy, FractalKind, RenderParams, ZoomSequence};
use image::gif::Encoder as GifEncoder;
use image::png::PNGEncoder;
use image::{ColorType, Frame as AnimationFrame};
use num::rational::Ratio;
use num::Complex;
use std::fs::File;
use std::str::FromStr;

/// Given a string and a separator, returns the two values separated
/// by the separator.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const TYPE: &str = "type";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const RADIUS: &str = "radius";
const CONSTANT: &str = "constant";
const ITERATIONS: &str = "iterations";
const PALETTE: &str = "palette";
const THREADS: &str = "threads";
const ZOOM: &str = "zoom";
const ZOOM_STEP: &str = "zoom-step";
const DELAY: &str = "delay";

const TWO_TONE: &str = "twotone";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();
    let mut palettes: Vec<&str> = vec![TWO_TONE];
    palettes.extend(fractal::PALETTES.iter().map(|p| p.name));

    App::new("fractal")
        .version("0.1.0")
        .about(
            "Renders the Mandelbrot set (z' = z^2 + c, z0 = 0, c per pixel) \
             or a filled Julia set (z' = z^2 + c, c fixed, z0 per pixel) to \
             a PNG, or to an animated GIF zooming toward the center.",
        )
        .arg(
            Arg::with_name(TYPE)
                .index(1)
                .possible_values(&["mandelbrot", "julia"])
                .default_value("mandelbrot")
                .help("Which fractal to render"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (PNG, or GIF when --zoom is given)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1920x1080")
                .validator(|s| {
                    validate_pair::<usize>(&s, 'x', "Could not parse output image size")
                })
                .help("Size of the output image"),
        )
        .arg(
            Arg::with_name(CENTER)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Center of the view, as re,im"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("1")
                .validator(|s| validate_number::<f64>(&s, "Could not parse view radius"))
                .help("Radius around the center kept in view"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .long(CONSTANT)
                .short("j")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse julia constant"))
                .help("The c constant for julia sets, as re,im"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range::<u32>(
                        &s,
                        2,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 2 and 1000000",
                    )
                })
                .help("Iterations before a point is declared in the set"),
        )
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value(TWO_TONE)
                .possible_values(&palettes)
                .help("Coloring: the two-tone gradient or a cyclic palette"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of render threads (default: all cores)"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .validator(|s| validate_number::<f64>(&s, "Could not parse zoom exponent"))
                .help("Animate a zoom to 10^N magnification, writing a GIF"),
        )
        .arg(
            Arg::with_name(ZOOM_STEP)
                .long(ZOOM_STEP)
                .takes_value(true)
                .default_value("0.1")
                .validator(|s| validate_number::<f64>(&s, "Could not parse zoom step"))
                .help("Magnification factor per frame, as e^N"),
        )
        .arg(
            Arg::with_name(DELAY)
                .long(DELAY)
                .short("d")
                .takes_value(true)
                .default_value("80")
                .validator(|s| {
                    validate_range::<u16>(
                        &s,
                        1,
                        10_000,
                        "Could not parse frame delay",
                        "Frame delay must be between 1 and 10000 milliseconds",
                    )
                })
                .help("Display time per animation frame, in milliseconds"),
        )
        .get_matches()
}

fn write_png(outfile: &str, frame: &fractal::Frame) -> Result<(), Error> {
    let output = File::create(outfile)?;
    PNGEncoder::new(output).encode(frame, frame.width(), frame.height(), ColorType::RGBA(8))?;
    Ok(())
}

/// Encodes the sequence as an animated GIF, consuming it lazily: each
/// frame is handed to the encoder and dropped before the next one is
/// rendered.
fn write_gif(outfile: &str, sequence: ZoomSequence) -> Result<(), Error> {
    let output = File::create(outfile)?;
    let mut encoder = GifEncoder::new(output);
    for (frame, delay) in sequence {
        encoder.encode_frames(std::iter::once(AnimationFrame::from_parts(
            frame,
            0,
            0,
            Ratio::from_integer(delay),
        )))?;
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (width, height) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("size was validated by the parser");
    let center = parse_complex(matches.value_of(CENTER).unwrap())
        .expect("center was validated by the parser");
    let constant = parse_complex(matches.value_of(CONSTANT).unwrap())
        .expect("constant was validated by the parser");
    let radius = f64::from_str(matches.value_of(RADIUS).unwrap())
        .expect("radius was validated by the parser");
    let max_iters = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("iterations were validated by the parser");
    let threads = match matches.value_of(THREADS) {
        Some(s) => usize::from_str(s).expect("threads were validated by the parser"),
        None => num_cpus::get(),
    };

    let kind = match matches.value_of(TYPE).unwrap() {
        "julia" => FractalKind::Julia(constant),
        _ => FractalKind::Mandelbrot,
    };
    let policy = match matches.value_of(PALETTE).unwrap() {
        TWO_TONE => ColorPolicy::LogTwoTone,
        name => ColorPolicy::Cyclic(
            fractal::palette_by_name(name).expect("palette names are constrained by the parser"),
        ),
    };
    let params = RenderParams {
        width,
        height,
        kind,
        center,
        radius,
        max_iters,
        policy,
    };
    let outfile = matches.value_of(OUTPUT).unwrap();

    match matches.value_of(ZOOM) {
        None => write_png(outfile, &fractal::render_frame(&params, threads)?),
        Some(zoom) => {
            let exponent = f64::from_str(zoom).expect("zoom was validated by the parser");
            let step = f64::from_str(matches.value_of(ZOOM_STEP).unwrap())
                .expect("zoom step was validated by the parser");
            let delay = u16::from_str(matches.value_of(DELAY).unwrap())
                .expect("delay was validated by the parser");
            write_gif(
                outfile,
                ZoomSequence::new(&params, exponent, step, delay, threads)?,
            )
        }
    }
}

fn main() {
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("fractal: {}", e);
        std::process::exit(1);
    }
}
