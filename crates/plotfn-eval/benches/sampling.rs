use criterion::{criterion_group, criterion_main, Criterion};
use plotfn_eval::{plot_term, sample, Context, SampleRange};
use std::hint::black_box;

const TERM: &str = "abs(sin((x + 1)) * (x^2 + x + 1))";

fn benchmark_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    group.bench_function("parse_and_define", |b| {
        let mut ctx = Context::new();
        b.iter(|| ctx.define_function("f", "x", black_box(TERM)).unwrap());
    });

    group.bench_function("single_call", |b| {
        let mut ctx = Context::new();
        ctx.define_function("f", "x", TERM).unwrap();
        b.iter(|| ctx.call("f", black_box(1.5)).unwrap());
    });

    group.bench_function("redraw_720_pixels", |b| {
        let mut ctx = Context::new();
        ctx.define_function("f", "x", TERM).unwrap();
        let range = SampleRange::default();
        b.iter(|| sample(&ctx, "f", black_box(&range)).unwrap());
    });

    group.bench_function("plot_term_720_pixels", |b| {
        let mut ctx = Context::new();
        let range = SampleRange::default();
        b.iter(|| plot_term(&mut ctx, black_box(TERM), &range).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_sampling);
criterion_main!(benches);
