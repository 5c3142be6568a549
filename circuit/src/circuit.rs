//! A garbled circuit: a wire arena plus gates in evaluation order.

use crate::errors::{CircuitError, CircuitEvalError};
use crate::gate::{Gate, GateKind};
use crate::wire::Wire;
use crypto_core::Label;
use rand::{CryptoRng, Rng};

/// Wires and the gates over them.
///
/// Gates hold indices into the wire arena, never ownership; wires are
/// shared between gates freely. Gates must be appended in a valid
/// topological order — evaluation walks them as stored and trusts the
/// builder rather than re-deriving an order. By convention input wires sit
/// at the front of the arena and the last gate drives the circuit output.
pub struct Circuit {
    wires: Vec<Wire>,
    gates: Vec<Gate>,
}

impl Circuit {
    /// A circuit over `nwires` freshly labeled wires, with no gates yet.
    pub fn with_wires<R: Rng + CryptoRng>(nwires: usize, rng: &mut R) -> Self {
        let wires = (0..nwires).map(|_| Wire::new(rng)).collect();
        Self {
            wires,
            gates: Vec::new(),
        }
    }

    /// Garble one more gate over the arena and append it.
    pub fn add_gate<R: Rng + CryptoRng>(
        &mut self,
        kind: GateKind,
        input_ids: &[usize],
        output_id: usize,
        rng: &mut R,
    ) -> Result<(), CircuitError> {
        let gate = Gate::garble(kind, input_ids, output_id, &self.wires, rng)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Raw label pairs for the given wires.
    ///
    /// Construction-time API for handing labels to the transfer machinery.
    /// It exposes both labels of a wire, so it must never serve a remote
    /// party for wires whose values are secret.
    pub fn get_labels(&self, wire_ids: &[usize]) -> Result<Vec<[Label; 2]>, CircuitError> {
        wire_ids
            .iter()
            .map(|&id| {
                self.wires
                    .get(id)
                    .map(|wire| *wire.labels())
                    .ok_or(CircuitError::WireIndexOutOfRange(id))
            })
            .collect()
    }

    /// Drive the circuit: place `inputs` on wires `0..inputs.len()`, run
    /// every gate in stored order, and return the output wire's label.
    pub fn evaluate(&mut self, inputs: &[Label]) -> Result<Label, CircuitEvalError> {
        let output_id = self
            .gates
            .last()
            .map(|gate| gate.output_id())
            .ok_or(CircuitEvalError::EmptyCircuit)?;
        if inputs.len() > self.wires.len() {
            return Err(CircuitEvalError::InputLengthMismatch {
                nwires: self.wires.len(),
                got: inputs.len(),
            });
        }

        for (wire, label) in self.wires.iter_mut().zip(inputs.iter()) {
            wire.set_active(*label);
        }
        for gate in self.gates.iter() {
            gate.evaluate(&mut self.wires)?;
        }

        self.wires[output_id]
            .active_label()
            .ok_or(CircuitEvalError::UninitializedLabel(output_id))
    }

    /// Map an output label back to its boolean value by membership in the
    /// output wire's pair.
    pub fn decode_output(&self, label: Label) -> Result<bool, CircuitEvalError> {
        let output_id = self
            .gates
            .last()
            .map(|gate| gate.output_id())
            .ok_or(CircuitEvalError::EmptyCircuit)?;

        let labels = self.wires[output_id].labels();
        if label == labels[0] {
            Ok(false)
        } else if label == labels[1] {
            Ok(true)
        } else {
            Err(CircuitEvalError::UnknownOutputLabel)
        }
    }

    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }
}
