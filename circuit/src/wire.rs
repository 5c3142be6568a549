//! Circuit wires and their label pairs.

use crypto_core::Label;
use rand::{CryptoRng, Rng};

/// One wire of a garbled circuit.
///
/// The label pair is fixed at construction and never changes; the active
/// label is the transient value evaluation writes, either externally for
/// input wires or by the owning gate for everything downstream.
#[derive(Clone, Debug)]
pub struct Wire {
    labels: [Label; 2],
    active: Option<Label>,
}

impl Wire {
    /// Draw a fresh label pair from `rng`.
    ///
    /// Evaluation tells the two states of a wire apart only by label
    /// equality, so a collision inside one pair cannot be recovered from.
    pub fn new<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        let labels = [rng.gen::<Label>(), rng.gen::<Label>()];
        assert_ne!(labels[0], labels[1], "wire label collision");
        Self {
            labels,
            active: None,
        }
    }

    /// The label pair; index 0 stands for false, index 1 for true.
    pub fn labels(&self) -> &[Label; 2] {
        &self.labels
    }

    /// The label encoding `value` on this wire.
    pub fn label(&self, value: bool) -> Label {
        self.labels[value as usize]
    }

    pub fn set_active(&mut self, label: Label) {
        self.active = Some(label);
    }

    /// The label this wire carries, `None` while evaluation has not
    /// reached it.
    pub fn active_label(&self) -> Option<Label> {
        self.active
    }
}
