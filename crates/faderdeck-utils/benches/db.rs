use criterion::{criterion_group, criterion_main, Criterion};
use faderdeck_utils::db::{db_to_linear, linear_to_db};

fn bench_db_roundtrip(c: &mut Criterion) {
    let faders: Vec<f32> = (0..256).map(|i| i as f32 / 255.0).collect();
    c.bench_function("db roundtrip 256", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &gain in &faders {
                acc += db_to_linear(linear_to_db(gain));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_db_roundtrip);
criterion_main!(benches);
