//! Garbled boolean circuits: wires carrying secret label pairs, gates
//! garbled into permuted ciphertext tables, and the brute-force evaluation
//! used by the two-party protocol.

pub mod circuit;
pub mod errors;
pub mod gate;
pub mod wire;

pub use crate::{
    circuit::Circuit,
    errors::{CircuitError, CircuitEvalError},
    gate::{Gate, GateKind},
    wire::Wire,
};
