use criterion::{criterion_group, criterion_main, Criterion};
use crypto_core::{crypt_row, AesRng, Label};
use rand::Rng;
use std::time::Duration;

fn bench_crypt_row(c: &mut Criterion) {
    c.bench_function("crypt row, two keys", |b| {
        let mut rng = AesRng::new();
        let row = rng.gen::<Label>();
        let keys = [rng.gen::<Label>(), rng.gen::<Label>()];

        b.iter(|| {
            criterion::black_box(crypt_row(row, &keys));
        });
    });
}

fn bench_rand_label(c: &mut Criterion) {
    c.bench_function("generate label", |b| {
        let mut rng = AesRng::new();

        b.iter(|| {
            criterion::black_box(rng.gen::<Label>());
        });
    });
}

criterion_group! {
    name = row_cipher;
    config = Criterion::default().warm_up_time(Duration::from_millis(100));
    targets = bench_crypt_row, bench_rand_label
}
criterion_main!(row_cipher);
