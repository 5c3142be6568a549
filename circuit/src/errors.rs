#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("wire index {0} out of range")]
    WireIndexOutOfRange(usize),

    #[error("gate needs at least one input wire")]
    MissingInput,

    #[error("truth table has {got} entries, expected {expected}")]
    TruthTableSize { expected: usize, got: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CircuitEvalError {
    /// A gate read a wire no earlier gate or input drove.
    #[error("uninitialized label, wire {0}")]
    UninitializedLabel(usize),

    /// No garbled row decrypted to a known output label. The table and the
    /// supplied labels disagree; aborting is the only safe reaction.
    #[error("no garbled row matched an output label, wire {0}")]
    GarbledRowMismatch(usize),

    #[error("{got} input labels for a circuit of {nwires} wires")]
    InputLengthMismatch { nwires: usize, got: usize },

    #[error("circuit has no gates")]
    EmptyCircuit,

    #[error("label does not belong to the output wire")]
    UnknownOutputLabel,
}
