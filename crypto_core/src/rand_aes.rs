//! Random number generation based on AES-256 in counter mode.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use ctr::Ctr128LE;
use rand::rngs::OsRng;
use rand_core::{impls, CryptoRng, Error, RngCore, SeedableRng};

/// Cryptographically secure generator producing the AES-256-CTR keystream
/// of a random key.
#[derive(Clone)]
pub struct AesRng {
    stream: Ctr128LE<Aes256>,
}

impl AesRng {
    /// New generator with a fresh seed from the OS entropy pool.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        AesRng::from_seed(seed)
    }
}

impl Default for AesRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedableRng for AesRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let stream = Ctr128LE::<Aes256>::new(
            GenericArray::from_slice(&seed),
            GenericArray::from_slice(&[0u8; 16]),
        );
        Self { stream }
    }
}

impl RngCore for AesRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = 0;
        }
        self.stream.apply_keystream(dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for AesRng {}
