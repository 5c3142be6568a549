//! End-to-end demo: Z = A*(!B) + (!C)*D computed between a generator
//! holding A, B and an evaluator holding C, D, with the evaluator's
//! labels resolved by oblivious transfer.
//!
//! cargo run --example demo

use circuit::{Circuit, GateKind};
use crypto_core::{AesRng, RFC5114_GROUP};
use twopc::{Evaluator, Generator};

// 4 input wires, 2 internal, 1 output.
fn build_circuit(rng: &mut AesRng) -> Circuit {
    let mut circ = Circuit::with_wires(7, rng);
    // A*(!B)
    circ.add_gate(
        GateKind::Table(vec![false, false, true, false]),
        &[0, 1],
        4,
        rng,
    )
    .unwrap();
    // (!C)*D
    circ.add_gate(
        GateKind::Table(vec![false, true, false, false]),
        &[2, 3],
        5,
        rng,
    )
    .unwrap();
    circ.add_gate(GateKind::Or, &[4, 5], 6, rng).unwrap();
    circ
}

pub fn main() {
    let mut rng = AesRng::new();

    println!("A B C D : Z");
    for case in 0..16u32 {
        let a = (case >> 3) & 1 == 1;
        let b = (case >> 2) & 1 == 1;
        let c = (case >> 1) & 1 == 1;
        let d = case & 1 == 1;

        let mut generator = Generator::new(build_circuit(&mut rng), &RFC5114_GROUP);
        let commitment = generator.publish_commitment(&mut rng);
        let generator_labels = generator.encode_inputs(&[(0, a), (1, b)]).unwrap();

        let evaluator = Evaluator::new(&RFC5114_GROUP, &commitment, &[c, d], &mut rng).unwrap();
        let transfers = generator
            .deliver(&[2, 3], &evaluator.public_keys(), &mut rng)
            .unwrap();
        let evaluator_labels = evaluator.ingest(&transfers).unwrap();

        let mut circuit = generator.release_circuit();
        let output = circuit
            .evaluate(&[generator_labels, evaluator_labels].concat())
            .unwrap();
        let z = circuit.decode_output(output).unwrap();

        println!(
            "{} {} {} {} : {}",
            a as u8, b as u8, c as u8, d as u8, z as u8
        );
    }
}
