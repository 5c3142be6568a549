//! Generator and evaluator roles of the two-party protocol.
//!
//! Message turns are modeled as direct calls in the protocol order:
//! commitment, then the chooser's public keys, then the masked label
//! transfers, then evaluation. Serialization over a real channel is the
//! caller's concern.

use circuit::{Circuit, CircuitError};
use crypto_core::{DhGroup, Label};
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use crate::ot::{DhOtChooser, DhOtSender, OtChooserError, OtSenderError, WireTransfer};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    OtSender(#[from] OtSenderError),
}

/// The party that builds and garbles the circuit and holds every label.
pub struct Generator {
    circuit: Circuit,
    ot: DhOtSender,
}

impl Generator {
    pub fn new(circuit: Circuit, group: &DhGroup) -> Self {
        Self {
            circuit,
            ot: DhOtSender::new(group),
        }
    }

    /// First message turn: the transfer commitment.
    pub fn publish_commitment<R: Rng + CryptoRng>(&mut self, rng: &mut R) -> BigUint {
        self.ot.publish_commitment(rng)
    }

    /// The labels for the generator's own input wires, one per
    /// assignment. They go to the evaluator in the clear; a single label
    /// reveals nothing about the bit it encodes.
    pub fn encode_inputs(
        &self,
        assignments: &[(usize, bool)],
    ) -> Result<Vec<Label>, GeneratorError> {
        let ids: Vec<usize> = assignments.iter().map(|&(id, _)| id).collect();
        let pairs = self.circuit.get_labels(&ids)?;

        Ok(pairs
            .iter()
            .zip(assignments.iter())
            .map(|(pair, &(_, value))| pair[value as usize])
            .collect())
    }

    /// Answer the chooser's public keys with masked label pairs for the
    /// evaluator's input wires.
    pub fn deliver<R: Rng + CryptoRng>(
        &self,
        wire_ids: &[usize],
        public_keys: &[BigUint],
        rng: &mut R,
    ) -> Result<Vec<WireTransfer>, GeneratorError> {
        let label_pairs = self.circuit.get_labels(wire_ids)?;
        Ok(self.ot.deliver(&label_pairs, public_keys, rng)?)
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Hand the garbled circuit over for evaluation once every input
    /// label is transferred.
    pub fn release_circuit(self) -> Circuit {
        self.circuit
    }
}

/// The party that resolves its input labels obliviously and evaluates.
pub struct Evaluator {
    chooser: DhOtChooser,
}

impl Evaluator {
    /// Bind the evaluator's private choice bits to the sender's
    /// commitment.
    pub fn new<R: Rng + CryptoRng>(
        group: &DhGroup,
        commitment: &BigUint,
        choices: &[bool],
        rng: &mut R,
    ) -> Result<Self, OtChooserError> {
        Ok(Self {
            chooser: DhOtChooser::new(group, commitment, choices, rng)?,
        })
    }

    /// Second message turn: one public key per chosen wire.
    pub fn public_keys(&self) -> Vec<BigUint> {
        self.chooser.public_keys()
    }

    /// Recover the chosen labels from the generator's payload; evaluation
    /// itself is `Circuit::evaluate` over the resolved labels.
    pub fn ingest(&self, transfers: &[WireTransfer]) -> Result<Vec<Label>, OtChooserError> {
        self.chooser.ingest(transfers)
    }
}
