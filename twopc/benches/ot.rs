use criterion::{criterion_group, criterion_main, Criterion};
use crypto_core::{AesRng, Label, RFC5114_GROUP};
use rand::Rng;
use std::time::Duration;
use twopc::{DhOtChooser, DhOtSender};

fn bench_ot_exchange(c: &mut Criterion) {
    c.bench_function("transfer 8 wire labels", |b| {
        let mut rng = AesRng::new();
        let pairs: Vec<[Label; 2]> = (0..8).map(|_| [rng.gen(), rng.gen()]).collect();
        let choices: Vec<bool> = (0..8).map(|_| rng.gen()).collect();

        b.iter(|| {
            let mut sender = DhOtSender::new(&RFC5114_GROUP);
            let commitment = sender.publish_commitment(&mut rng);
            let chooser =
                DhOtChooser::new(&RFC5114_GROUP, &commitment, &choices, &mut rng).unwrap();
            let transfers = sender
                .deliver(&pairs, &chooser.public_keys(), &mut rng)
                .unwrap();
            criterion::black_box(chooser.ingest(&transfers).unwrap());
        });
    });
}

criterion_group! {
    name = ot;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(100))
        .sample_size(10);
    targets = bench_ot_exchange
}
criterion_main!(ot);
