//! Symmetric row encryption for garbled tables, based on AES-256-CTR.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use ctr::Ctr128LE;

use crate::Label;

type RowCipher = Ctr128LE<Aes256>;

// The nonce never varies: every row encryption is keyed by a fresh random
// label, and a label must never key two encryptions of different data.
const ROW_NONCE: [u8; 16] = [0u8; 16];

/// Run `row` through one AES-256-CTR pass per key, in key order.
///
/// CTR xors a key-dependent stream into the data, so applying the same key
/// sequence a second time restores the input. Garbling and ungarbling a
/// row are therefore the same call.
pub fn crypt_row(mut row: Label, keys: &[Label]) -> Label {
    for key in keys.iter() {
        let mut cipher = RowCipher::new(
            GenericArray::from_slice(key.as_bytes()),
            GenericArray::from_slice(&ROW_NONCE),
        );
        cipher.apply_keystream(row.as_mut());
    }
    row
}
