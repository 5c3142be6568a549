//! Prime-order multiplicative subgroup arithmetic for the oblivious
//! transfer (cf. RFC 5114, <https://tools.ietf.org/html/rfc5114#section-2.1>).

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand::{CryptoRng, Rng};

/// The 1024-bit MODP group with a 160-bit prime-order subgroup from
/// RFC 5114 section 2.1. Public and fixed; both parties hold the same
/// parameters out-of-band.
pub static RFC5114_GROUP: Lazy<DhGroup> = Lazy::new(|| {
    let prime = BigUint::parse_bytes(
        concat!(
            "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D23B61",
            "6073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BF",
            "ACCBDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0",
            "A151AF5F0DC8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371"
        )
        .as_bytes(),
        16,
    )
    .unwrap();
    let generator = BigUint::parse_bytes(
        concat!(
            "A4D1CBD5C3FD34126765A442EFB99905F8104DD258AC507FD6406CFF14266D31",
            "266FEA1E5C41564B777E690F5504F213160217B4B01B886A5E91547F9E2749F4",
            "D7FBD7D3B9A92EE1909D0D2263F80A76A6A24C087A091F531DBF0A0169B6A28A",
            "D662A4D18E73AFA32D779D5918D08BC8858F4DCEF97C2A24855E6EEB22B3B2E5"
        )
        .as_bytes(),
        16,
    )
    .unwrap();
    let order = BigUint::parse_bytes(b"F518AA8781A8DF278ABA4E7D64B7CB9D49462353", 16).unwrap();

    DhGroup::new(prime, generator, order)
});

/// Immutable (prime modulus, generator, subgroup order) triple, plus the
/// modular arithmetic the transfer roles need. Never mutated after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhGroup {
    prime: BigUint,
    generator: BigUint,
    order: BigUint,
}

impl DhGroup {
    /// `generator` must generate a subgroup of order `order` modulo
    /// `prime`.
    pub fn new(prime: BigUint, generator: BigUint, order: BigUint) -> Self {
        assert!(
            generator.modpow(&order, &prime).is_one(),
            "generator does not have the claimed order"
        );
        Self {
            prime,
            generator,
            order,
        }
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// `base^exp mod P`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.prime)
    }

    /// `G^exp mod P`.
    pub fn pow_generator(&self, exp: &BigUint) -> BigUint {
        self.generator.modpow(exp, &self.prime)
    }

    /// `a * b mod P`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.prime
    }

    /// Modular multiplicative inverse, `x^(P-2) mod P`.
    pub fn inverse(&self, x: &BigUint) -> BigUint {
        let exp = &self.prime - 2u32;
        x.modpow(&exp, &self.prime)
    }

    /// Whether `x` is a usable residue, `0 < x < P`.
    pub fn contains(&self, x: &BigUint) -> bool {
        !x.is_zero() && x < &self.prime
    }

    /// Uniform exponent in `[0, Q)`.
    pub fn random_exponent<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.order)
    }

    /// Fixed-width little-endian encoding of a group element.
    ///
    /// The width is the prime's byte length, so equal elements always
    /// serialize to identical bytes on both sides of the protocol.
    pub fn element_bytes(&self, x: &BigUint) -> Vec<u8> {
        let mut bytes = x.to_bytes_le();
        bytes.resize(self.element_width(), 0);
        bytes
    }

    /// Byte width of an encoded group element.
    pub fn element_width(&self) -> usize {
        ((self.prime.bits() + 7) / 8) as usize
    }
}
