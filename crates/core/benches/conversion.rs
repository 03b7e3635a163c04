use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{Hex, Layout, Point2};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let layout =
        Layout::pointy(Point2::splat(32.0), Point2::new(640.0, 360.0)).unwrap();
    group.bench_function("hex to screen", |b| {
        b.iter(|| layout.hex_to_screen(black_box(Hex::new_qr(12, -7))))
    });
    group.bench_function("screen to hex", |b| {
        b.iter(|| layout.screen_to_hex(black_box(Point2::new(123.4, -56.7))))
    });
    group.bench_function("pick tile", |b| {
        b.iter(|| {
            layout
                .screen_to_hex(black_box(Point2::new(123.4, -56.7)))
                .round()
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
