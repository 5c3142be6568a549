//! 1-out-of-2 oblivious transfer over a prime-order Diffie-Hellman group.

pub mod dh;
pub mod errors;

pub use dh::*;
pub use errors::{OtChooserError, OtSenderError};

use crypto_core::{DhGroup, Label};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Symmetric mask for one transferred label, derived from a shared group
/// element. The fixed-width encoding keeps both sides hashing identical
/// bytes for equal elements.
pub(crate) fn shared_mask(group: &DhGroup, shared: &BigUint) -> Label {
    let mut hasher = Sha256::new();
    hasher.update(group.element_bytes(shared));

    let mut mask = [0u8; Label::LEN];
    mask.copy_from_slice(hasher.finalize().as_slice());
    Label::new(mask)
}
