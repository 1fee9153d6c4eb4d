#[macro_use]
extern crate criterion;
extern crate fractal;
extern crate num;

use criterion::Criterion;
use fractal::{ColorPolicy, FractalKind, RenderParams, PALETTES};
use num::Complex;

fn params(kind: FractalKind, policy: ColorPolicy) -> RenderParams {
    RenderParams {
        width: 160,
        height: 120,
        kind,
        center: Complex::new(-0.5, 0.0),
        radius: 1.5,
        max_iters: 200,
        policy,
    }
}

fn mandelbrot_frame(c: &mut Criterion) {
    let p = params(FractalKind::Mandelbrot, ColorPolicy::LogTwoTone);
    c.bench_function("mandelbrot 160x120", move |b| {
        b.iter(|| fractal::render_frame(&p, 1).unwrap())
    });
}

fn julia_frame(c: &mut Criterion) {
    let p = params(
        FractalKind::Julia(Complex::new(-0.8696, 0.26)),
        ColorPolicy::Cyclic(&PALETTES[0]),
    );
    c.bench_function("julia 160x120", move |b| {
        b.iter(|| fractal::render_frame(&p, 1).unwrap())
    });
}

criterion_group!(benches, mandelbrot_frame, julia_frame);
criterion_main!(benches);
