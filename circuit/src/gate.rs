//! Garbled gates: a boolean function encoded as a permuted table of
//! ciphertext rows over wire labels.

use crate::errors::{CircuitError, CircuitEvalError};
use crate::wire::Wire;
use crypto_core::{crypt_row, Label};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

const NOT_TABLE: [bool; 2] = [true, false];
const AND_TABLE: [bool; 4] = [false, false, false, true];
const OR_TABLE: [bool; 4] = [false, true, true, true];
const XOR_TABLE: [bool; 4] = [false, true, true, false];

/// The boolean function a gate computes, its truth table carried as data.
///
/// `Table` holds an arbitrary k-ary function as `2^k` output bits. Rows
/// are indexed by the input bits with the first input wire as the highest
/// bit, so `Table(vec![false, false, true, false])` is `a & !b`.
#[derive(Clone, Debug, PartialEq)]
pub enum GateKind {
    Not,
    And,
    Or,
    Xor,
    Table(Vec<bool>),
}

impl GateKind {
    /// Number of input wires this function expects.
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Not => 1,
            GateKind::And | GateKind::Or | GateKind::Xor => 2,
            GateKind::Table(table) => table.len().trailing_zeros() as usize,
        }
    }

    /// All `2^k` output bits.
    pub fn truth_table(&self) -> &[bool] {
        match self {
            GateKind::Not => &NOT_TABLE,
            GateKind::And => &AND_TABLE,
            GateKind::Or => &OR_TABLE,
            GateKind::Xor => &XOR_TABLE,
            GateKind::Table(table) => table,
        }
    }

    /// Plaintext output for the input combination `index`.
    pub fn eval(&self, index: usize) -> bool {
        self.truth_table()[index]
    }
}

/// One garbled gate. Input wires are shared arena references (indices into
/// the circuit's wire pool); the gate exclusively drives its output wire
/// and owns its row table.
#[derive(Clone, Debug)]
pub struct Gate {
    kind: GateKind,
    input_ids: Vec<usize>,
    output_id: usize,
    rows: Vec<Label>,
}

impl Gate {
    /// Garble `kind` over the given wires.
    ///
    /// One row per input combination: the output label the truth table
    /// selects, chain-encrypted under that combination's input labels in
    /// input-wire order. The finished table is shuffled so row position
    /// carries nothing about the underlying function; an evaluator has to
    /// try rows until one decrypts to a known output label.
    pub fn garble<R: Rng + CryptoRng>(
        kind: GateKind,
        input_ids: &[usize],
        output_id: usize,
        wires: &[Wire],
        rng: &mut R,
    ) -> Result<Self, CircuitError> {
        if input_ids.is_empty() {
            return Err(CircuitError::MissingInput);
        }
        for &id in input_ids.iter().chain(std::iter::once(&output_id)) {
            if id >= wires.len() {
                return Err(CircuitError::WireIndexOutOfRange(id));
            }
        }
        let nrows = 1usize << input_ids.len();
        if kind.truth_table().len() != nrows {
            return Err(CircuitError::TruthTableSize {
                expected: nrows,
                got: kind.truth_table().len(),
            });
        }

        let k = input_ids.len();
        let mut rows = Vec::with_capacity(nrows);
        for index in 0..nrows {
            let keys: Vec<Label> = input_ids
                .iter()
                .enumerate()
                .map(|(j, &id)| wires[id].label((index >> (k - 1 - j)) & 1 == 1))
                .collect();
            let output_label = wires[output_id].label(kind.eval(index));
            rows.push(crypt_row(output_label, &keys));
        }
        rows.shuffle(rng);

        Ok(Self {
            kind,
            input_ids: input_ids.to_vec(),
            output_id,
            rows,
        })
    }

    /// Resolve the output wire's active label from the input wires'.
    ///
    /// Tries every row; the row whose plaintext equals one of the output
    /// wire's two labels wins and the search stops. No row matching means
    /// the table and the keys disagree, which a well-formed garbling with
    /// genuine labels can never produce.
    pub fn evaluate(&self, wires: &mut [Wire]) -> Result<(), CircuitEvalError> {
        let keys = self
            .input_ids
            .iter()
            .map(|&id| {
                wires[id]
                    .active_label()
                    .ok_or(CircuitEvalError::UninitializedLabel(id))
            })
            .collect::<Result<Vec<Label>, CircuitEvalError>>()?;

        for row in self.rows.iter() {
            let candidate = crypt_row(*row, &keys);
            if wires[self.output_id].labels().contains(&candidate) {
                wires[self.output_id].set_active(candidate);
                return Ok(());
            }
        }
        Err(CircuitEvalError::GarbledRowMismatch(self.output_id))
    }

    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    pub fn input_ids(&self) -> &[usize] {
        &self.input_ids
    }

    pub fn output_id(&self) -> usize {
        self.output_id
    }

    /// The garbled rows, in their shuffled order.
    pub fn rows(&self) -> &[Label] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::{Gate, GateKind};
    use crate::errors::{CircuitError, CircuitEvalError};
    use crate::wire::Wire;
    use crypto_core::{crypt_row, AesRng, Label};
    use rand::Rng;

    fn wire_pool(n: usize, rng: &mut AesRng) -> Vec<Wire> {
        (0..n).map(|_| Wire::new(rng)).collect()
    }

    fn set_inputs(wires: &mut [Wire], ids: &[usize], bits: &[bool]) {
        for (&id, &bit) in ids.iter().zip(bits.iter()) {
            let label = wires[id].label(bit);
            wires[id].set_active(label);
        }
    }

    #[test]
    fn round_trip_all_kinds_all_inputs() {
        let mut rng = AesRng::new();
        let kinds = [
            GateKind::Not,
            GateKind::And,
            GateKind::Or,
            GateKind::Xor,
            GateKind::Table(vec![false, false, true, false]),
            GateKind::Table(vec![true, false, false, true, false, true, true, false]),
        ];

        for kind in kinds.iter() {
            let k = kind.arity();
            let input_ids: Vec<usize> = (0..k).collect();

            for index in 0..(1usize << k) {
                let mut wires = wire_pool(k + 1, &mut rng);
                let gate = Gate::garble(kind.clone(), &input_ids, k, &wires, &mut rng).unwrap();

                let bits: Vec<bool> = (0..k).map(|j| (index >> (k - 1 - j)) & 1 == 1).collect();
                set_inputs(&mut wires, &input_ids, &bits);
                gate.evaluate(&mut wires).unwrap();

                let expected = wires[k].label(kind.eval(index));
                assert_eq!(wires[k].active_label(), Some(expected));
            }
        }
    }

    #[test]
    fn row_count_is_two_to_the_arity() {
        let mut rng = AesRng::new();

        let wires = wire_pool(2, &mut rng);
        let gate = Gate::garble(GateKind::Not, &[0], 1, &wires, &mut rng).unwrap();
        assert_eq!(gate.rows().len(), 2);

        let wires = wire_pool(3, &mut rng);
        let gate = Gate::garble(GateKind::And, &[0, 1], 2, &wires, &mut rng).unwrap();
        assert_eq!(gate.rows().len(), 4);
    }

    #[test]
    fn row_order_varies_across_garblings() {
        let mut rng = AesRng::new();
        let wires = wire_pool(3, &mut rng);

        // Locate the (true, true) row of a fresh AND garbling each time;
        // with an honest shuffle its position cannot be constant.
        let keys = [wires[0].label(true), wires[1].label(true)];
        let expected = wires[2].label(true);

        let mut positions = Vec::new();
        for _ in 0..32 {
            let gate = Gate::garble(GateKind::And, &[0, 1], 2, &wires, &mut rng).unwrap();
            let pos = gate
                .rows()
                .iter()
                .position(|&row| crypt_row(row, &keys) == expected)
                .unwrap();
            positions.push(pos);
        }
        assert!(positions.iter().any(|&p| p != positions[0]));
    }

    #[test]
    fn corrupted_keys_fail_closed() {
        let mut rng = AesRng::new();
        let mut wires = wire_pool(3, &mut rng);
        let gate = Gate::garble(GateKind::Or, &[0, 1], 2, &wires, &mut rng).unwrap();

        wires[0].set_active(rng.gen::<Label>());
        wires[1].set_active(rng.gen::<Label>());

        assert!(matches!(
            gate.evaluate(&mut wires),
            Err(CircuitEvalError::GarbledRowMismatch(2))
        ));
    }

    #[test]
    fn unset_input_is_an_error() {
        let mut rng = AesRng::new();
        let mut wires = wire_pool(3, &mut rng);
        let gate = Gate::garble(GateKind::Xor, &[0, 1], 2, &wires, &mut rng).unwrap();

        let label = wires[0].label(false);
        wires[0].set_active(label);

        assert!(matches!(
            gate.evaluate(&mut wires),
            Err(CircuitEvalError::UninitializedLabel(1))
        ));
    }

    #[test]
    fn garble_rejects_bad_shapes() {
        let mut rng = AesRng::new();
        let wires = wire_pool(3, &mut rng);

        assert!(matches!(
            Gate::garble(GateKind::And, &[], 2, &wires, &mut rng),
            Err(CircuitError::MissingInput)
        ));
        assert!(matches!(
            Gate::garble(GateKind::And, &[0, 7], 2, &wires, &mut rng),
            Err(CircuitError::WireIndexOutOfRange(7))
        ));
        assert!(matches!(
            Gate::garble(GateKind::Table(vec![true, false]), &[0, 1], 2, &wires, &mut rng),
            Err(CircuitError::TruthTableSize {
                expected: 4,
                got: 2
            })
        ));
    }
}
