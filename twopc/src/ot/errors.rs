#[derive(Debug, thiserror::Error)]
pub enum OtSenderError {
    #[error("sender invalid input length")]
    InvalidInputLength,

    #[error("deliver called before publish_commitment")]
    CommitmentNotPublished,

    #[error("public key {0} outside the group residue range")]
    InvalidGroupElement(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum OtChooserError {
    #[error("chooser invalid input length")]
    InvalidInputLength,

    #[error("commitment outside the group residue range")]
    InvalidCommitment,

    #[error("transfer {0} outside the group residue range")]
    InvalidGroupElement(usize),
}
