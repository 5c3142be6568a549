//! Diffie-Hellman 1-out-of-2 oblivious transfer.
//!
//! The sender publishes a commitment `C = G^a mod P`. The chooser answers
//! with one public key per wire, constructed so the pair behind it
//! multiplies to `C` while the chooser knows the discrete log of only the
//! chosen branch. Each branch then travels as an ElGamal-style pair
//! `(G^r, label xor H(pk^r))`; opening the unchosen branch would take the
//! discrete log the chooser never had.

use crypto_core::{DhGroup, Label};
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use super::errors::{OtChooserError, OtSenderError};
use super::shared_mask;

/// One masked branch: the sender's ephemeral public part `G^r` and the
/// xored label.
#[derive(Clone, Debug)]
pub struct MaskedLabel {
    pub gr: BigUint,
    pub body: Label,
}

/// Transfer payload for one wire, one entry per branch.
#[derive(Clone, Debug)]
pub struct WireTransfer {
    pub branches: [MaskedLabel; 2],
}

/// Generator-side role of the transfer. Stays idle until the commitment
/// is published; delivering before that is an ordering bug and fails fast.
pub struct DhOtSender {
    group: DhGroup,
    commitment: Option<BigUint>,
}

impl DhOtSender {
    pub fn new(group: &DhGroup) -> Self {
        Self {
            group: group.clone(),
            commitment: None,
        }
    }

    /// Draw the session secret and publish `C = G^a mod P`.
    ///
    /// Nothing after this step needs `a` itself, so only the commitment is
    /// retained.
    pub fn publish_commitment<R: Rng + CryptoRng>(&mut self, rng: &mut R) -> BigUint {
        let a = self.group.random_exponent(rng);
        let c = self.group.pow_generator(&a);
        self.commitment = Some(c.clone());
        c
    }

    /// Encrypt both labels of every wire, one branch per candidate key.
    ///
    /// Branch 0 is keyed by the chooser's transmitted key, branch 1 by
    /// `C * pk^-1 mod P`; whichever discrete log the chooser holds decides
    /// the branch it can open. Both branches are always computed, with the
    /// same operations, so the response leaks nothing about the choice.
    pub fn deliver<R: Rng + CryptoRng>(
        &self,
        label_pairs: &[[Label; 2]],
        public_keys: &[BigUint],
        rng: &mut R,
    ) -> Result<Vec<WireTransfer>, OtSenderError> {
        let commitment = self
            .commitment
            .as_ref()
            .ok_or(OtSenderError::CommitmentNotPublished)?;
        if label_pairs.len() != public_keys.len() {
            return Err(OtSenderError::InvalidInputLength);
        }

        label_pairs
            .iter()
            .zip(public_keys.iter())
            .enumerate()
            .map(|(index, (labels, pk0))| {
                if !self.group.contains(pk0) {
                    return Err(OtSenderError::InvalidGroupElement(index));
                }
                let pk1 = self.group.mul(commitment, &self.group.inverse(pk0));

                Ok(WireTransfer {
                    branches: [
                        self.mask_branch(&labels[0], pk0, rng),
                        self.mask_branch(&labels[1], &pk1, rng),
                    ],
                })
            })
            .collect()
    }

    fn mask_branch<R: Rng + CryptoRng>(
        &self,
        label: &Label,
        public_key: &BigUint,
        rng: &mut R,
    ) -> MaskedLabel {
        let r = self.group.random_exponent(rng);
        let gr = self.group.pow_generator(&r);
        let shared = self.group.pow(public_key, &r);

        MaskedLabel {
            gr,
            body: *label ^ shared_mask(&self.group, &shared),
        }
    }
}

/// Evaluator-side role of the transfer, constructed over the sender's
/// commitment and the private choice bits.
pub struct DhOtChooser {
    group: DhGroup,
    choices: Vec<bool>,
    secrets: Vec<BigUint>,
    public_keys: Vec<[BigUint; 2]>,
}

impl DhOtChooser {
    /// Derive one key pair per choice bit under the sender's commitment.
    ///
    /// The chosen branch's key is `G^k` with `k` kept; the other branch is
    /// forced to `C * (G^k)^-1 mod P`, so the pair multiplies to `C` while
    /// its discrete log stays out of reach.
    pub fn new<R: Rng + CryptoRng>(
        group: &DhGroup,
        commitment: &BigUint,
        choices: &[bool],
        rng: &mut R,
    ) -> Result<Self, OtChooserError> {
        if !group.contains(commitment) {
            return Err(OtChooserError::InvalidCommitment);
        }

        let mut secrets = Vec::with_capacity(choices.len());
        let mut public_keys = Vec::with_capacity(choices.len());
        for &choice in choices.iter() {
            let k = group.random_exponent(rng);
            let chosen = group.pow_generator(&k);
            let other = group.mul(commitment, &group.inverse(&chosen));

            secrets.push(k);
            public_keys.push(if choice {
                [other, chosen]
            } else {
                [chosen, other]
            });
        }

        Ok(Self {
            group: group.clone(),
            choices: choices.to_vec(),
            secrets,
            public_keys,
        })
    }

    /// The keys sent to the sender, one per wire: always the branch-0
    /// slot, so the transmitted value never encodes the choice bit.
    pub fn public_keys(&self) -> Vec<BigUint> {
        self.public_keys.iter().map(|pair| pair[0].clone()).collect()
    }

    /// Open the chosen branch of every transfer and recover its label.
    pub fn ingest(&self, transfers: &[WireTransfer]) -> Result<Vec<Label>, OtChooserError> {
        if transfers.len() != self.choices.len() {
            return Err(OtChooserError::InvalidInputLength);
        }

        transfers
            .iter()
            .zip(self.choices.iter().zip(self.secrets.iter()))
            .enumerate()
            .map(|(index, (transfer, (&choice, k)))| {
                let branch = &transfer.branches[choice as usize];
                if !self.group.contains(&branch.gr) {
                    return Err(OtChooserError::InvalidGroupElement(index));
                }
                let shared = self.group.pow(&branch.gr, k);

                Ok(branch.body ^ shared_mask(&self.group, &shared))
            })
            .collect()
    }
}
