use criterion::{criterion_group, criterion_main, Criterion, black_box};

use emberlog::{render_values, LineBuffer, Render};

fn bench_render_scalar_line(c: &mut Criterion) {
    let mut line = LineBuffer::new();

    c.bench_function("render_scalar_line", |b| {
        b.iter(|| {
            line.clear();
            render_values(
                &mut line,
                &[
                    &black_box("frame ") as &dyn Render,
                    &black_box(128u64),
                    &black_box(" took "),
                    &black_box(16.6f32),
                    &black_box("ms"),
                ],
            );
            line.len()
        });
    });
}

fn bench_render_container(c: &mut Criterion) {
    let mut line = LineBuffer::new();
    let values: Vec<u32> = (0..64).collect();

    c.bench_function("render_container_64", |b| {
        b.iter(|| {
            line.clear();
            render_values(&mut line, &[&black_box(&values) as &dyn Render]);
            line.len()
        });
    });
}

fn bench_render_pairs(c: &mut Criterion) {
    let mut line = LineBuffer::new();
    let entries: Vec<(u32, f32)> = (0..32).map(|i| (i, i as f32 * 0.5)).collect();

    c.bench_function("render_pair_container_32", |b| {
        b.iter(|| {
            line.clear();
            render_values(&mut line, &[&black_box(&entries) as &dyn Render]);
            line.len()
        });
    });
}

criterion_group!(
    benches,
    bench_render_scalar_line,
    bench_render_container,
    bench_render_pairs
);
criterion_main!(benches);
