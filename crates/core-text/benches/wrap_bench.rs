use criterion::{Criterion, criterion_group, criterion_main};
use core_text::{width, wrap};
use std::hint::black_box;

fn mixed_text(repeat: usize) -> String {
    "The quick brown fox 素早い茶色の狐 jumps 🦊 over the lazy dog. ".repeat(repeat)
}

fn bench_wrap(c: &mut Criterion) {
    let text = mixed_text(64);
    c.bench_function("wrap_mixed_width_40", |b| {
        b.iter(|| wrap(black_box(&text), black_box(40)))
    });
    c.bench_function("wrap_mixed_width_8", |b| {
        b.iter(|| wrap(black_box(&text), black_box(8)))
    });
}

fn bench_width(c: &mut Criterion) {
    let mixed = mixed_text(64);
    let ascii = "plain ascii text ".repeat(256);
    c.bench_function("width_mixed", |b| b.iter(|| width(black_box(&mixed))));
    c.bench_function("width_ascii_fast_path", |b| {
        b.iter(|| width(black_box(&ascii)))
    });
}

criterion_group!(benches, bench_wrap, bench_width);
criterion_main!(benches);
