//! The 256-bit wire label type.

use rand::distributions::{Distribution, Standard};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitXor;

/// A 256-bit secret value standing for one boolean state of a wire.
///
/// Labels are drawn uniformly at random; the byte pattern of a label says
/// nothing about whether it encodes 0 or 1. Only the wire that generated
/// the pair can map a label back to a value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label([u8; 32]);

impl Label {
    /// Byte width of a label.
    pub const LEN: usize = 32;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Build a label from a slice, `None` unless it is exactly 32 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl From<[u8; 32]> for Label {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Label {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl BitXor for Label {
    type Output = Label;

    fn bitxor(self, rhs: Label) -> Label {
        let mut out = [0u8; 32];
        for (i, (a, b)) in self.0.iter().zip(rhs.0.iter()).enumerate() {
            out[i] = a ^ b;
        }
        Label(out)
    }
}

impl Distribution<Label> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Label {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Label(bytes)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
