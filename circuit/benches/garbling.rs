use circuit::{Circuit, GateKind};
use criterion::{criterion_group, criterion_main, Criterion};
use crypto_core::AesRng;
use std::time::Duration;

fn build_formula(rng: &mut AesRng) -> Circuit {
    let mut circ = Circuit::with_wires(7, rng);
    circ.add_gate(GateKind::And, &[0, 1], 4, rng).unwrap();
    circ.add_gate(GateKind::And, &[2, 3], 5, rng).unwrap();
    circ.add_gate(GateKind::Or, &[4, 5], 6, rng).unwrap();
    circ
}

fn bench_garble(c: &mut Criterion) {
    c.bench_function("garble 3-gate circuit", |b| {
        let mut rng = AesRng::new();

        b.iter(|| {
            criterion::black_box(build_formula(&mut rng));
        });
    });
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate 3-gate circuit", |b| {
        let mut rng = AesRng::new();
        let mut circ = build_formula(&mut rng);
        let inputs: Vec<_> = circ
            .get_labels(&[0, 1, 2, 3])
            .unwrap()
            .iter()
            .map(|pair| pair[1])
            .collect();

        b.iter(|| {
            criterion::black_box(circ.evaluate(&inputs).unwrap());
        });
    });
}

criterion_group! {
    name = garbling;
    config = Criterion::default().warm_up_time(Duration::from_millis(100));
    targets = bench_garble, bench_evaluate
}
criterion_main!(garbling);
