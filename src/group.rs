//! This module is an adapter to the big integer backend.
//!
//! The group is the multiplicative group of integers modulo a prime `p`,
//! generated by `g`, with exponents taken modulo `q = p - 1`.
//! All the modular arithmetic the protocol needs is isolated here.

use crypto_bigint::{
    modular::{MontyForm, MontyParams},
    subtle::{Choice, ConditionallySelectable},
    Encoding, NonZero, Odd, RandomMod,
};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::params::GroupConfig;
use crate::uint::{PublicUint, Uint, LIMBS};

/// Public parameters of the group together with the arithmetic over them.
///
/// **Warning:** the security of the proofs is bounded by the group order.
/// The demo parameters (`p = 10007`) are for illustration only;
/// production use requires a group of order at least `2^224`.
///
/// Serialized as a [`GroupConfig`], and validated when deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GroupConfig", into = "GroupConfig")]
pub struct Group {
    modulus: NonZero<Uint>,
    generator: Uint,
    order: NonZero<Uint>,
    /// `order - 1`, the number of admissible non-zero exponents.
    nonzero_exponents: NonZero<Uint>,
    params: MontyParams<LIMBS>,
}

impl Group {
    /// Creates a group from a prime `modulus` and a `generator`.
    ///
    /// Primality of the modulus is not checked; the generator must lie in `[2, modulus - 2]`.
    pub fn new(modulus: Uint, generator: Uint) -> Result<Self, DomainError> {
        if modulus <= Uint::ONE {
            return Err(DomainError::ModulusTooSmall);
        }
        let odd_modulus: Option<Odd<Uint>> = Odd::new(modulus).into();
        let odd_modulus = odd_modulus.ok_or(DomainError::EvenModulus)?;

        let order = modulus.wrapping_sub(&Uint::ONE);
        let max_generator = order.wrapping_sub(&Uint::ONE);
        if generator < Uint::from_u8(2) || generator > max_generator {
            return Err(DomainError::GeneratorOutOfRange);
        }

        // A non-empty generator range implies `order >= 3`, so none of these are zero.
        let modulus: Option<NonZero<Uint>> = NonZero::new(modulus).into();
        let modulus = modulus.ok_or(DomainError::ModulusTooSmall)?;
        let order: Option<NonZero<Uint>> = NonZero::new(order).into();
        let order = order.ok_or(DomainError::ModulusTooSmall)?;
        let nonzero_exponents: Option<NonZero<Uint>> = NonZero::new(max_generator).into();
        let nonzero_exponents = nonzero_exponents.ok_or(DomainError::GeneratorOutOfRange)?;

        Ok(Self {
            modulus,
            generator,
            order,
            nonzero_exponents,
            params: MontyParams::new(odd_modulus),
        })
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &Uint {
        self.modulus.as_ref()
    }

    /// The generator `g`.
    pub fn generator(&self) -> &Uint {
        &self.generator
    }

    /// The group order `q = p - 1`.
    pub fn order(&self) -> &Uint {
        self.order.as_ref()
    }

    pub(crate) fn order_nonzero(&self) -> &NonZero<Uint> {
        &self.order
    }

    /// Returns `(p, g, q)` in their public form.
    pub fn public_parameters(&self) -> (PublicUint, PublicUint, PublicUint) {
        (
            PublicUint::from(*self.modulus()),
            PublicUint::from(self.generator),
            PublicUint::from(*self.order()),
        )
    }

    /// Computes `base^exponent mod p`.
    ///
    /// Runs in time independent of the value of `exponent`.
    pub fn power(&self, base: &Uint, exponent: &Uint) -> Uint {
        let base = *base % self.modulus;
        MontyForm::new(&base, self.params).pow(exponent).retrieve()
    }

    /// Computes `g^exponent mod p`.
    pub fn power_of_generator(&self, exponent: &Uint) -> Uint {
        self.power(&self.generator, exponent)
    }

    /// Computes `a * b mod p`.
    pub fn combine(&self, a: &Uint, b: &Uint) -> Uint {
        let a = MontyForm::new(&(*a % self.modulus), self.params);
        let b = MontyForm::new(&(*b % self.modulus), self.params);
        (a * b).retrieve()
    }

    /// Reduces an exponent modulo `q`.
    pub fn reduce_exponent(&self, exponent: &Uint) -> Uint {
        *exponent % self.order
    }

    /// Computes `a + b mod q`.
    pub fn add_exponents(&self, a: &Uint, b: &Uint) -> Uint {
        let a = self.reduce_exponent(a);
        let b = self.reduce_exponent(b);
        a.add_mod(&b, &self.order)
    }

    /// Computes `a * b mod q`.
    ///
    /// `q` is even, so Montgomery multiplication is not available;
    /// this is a double-and-add over all the bits of `b`.
    pub fn mul_exponents(&self, a: &Uint, b: &Uint) -> Uint {
        let a = self.reduce_exponent(a);
        let b = self.reduce_exponent(b);

        let mut acc = Uint::ZERO;
        for byte in b.to_be_bytes() {
            for shift in (0..8).rev() {
                acc = acc.add_mod(&acc, &self.order);
                let added = acc.add_mod(&a, &self.order);
                let bit = Choice::from((byte >> shift) & 1);
                acc = Uint::conditional_select(&acc, &added, bit);
            }
        }
        acc
    }

    /// Samples an exponent uniformly from `[1, q - 1]`.
    pub fn random_exponent(&self, rng: &mut impl CryptoRngCore) -> Uint {
        Uint::random_mod(rng, &self.nonzero_exponents).wrapping_add(&Uint::ONE)
    }
}
