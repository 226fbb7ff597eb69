//! Derivation of witness exponents from claim material.
//!
//! Every claim type is reduced to the same statement:
//! "I know `x` such that `g^x = X`", where `x` is derived here.

use crate::error::ClaimInvalid;
use crate::group::Group;
use crate::tools::hashing::Hash;
use crate::tools::Secret;
use crate::uint::Uint;

/// The prover's secret exponent, in `[1, q - 1]`.
///
/// Zeroized on drop; never serialized, and its `Debug` output is redacted.
#[derive(Debug, Clone)]
pub struct Witness(Secret<Uint>);

impl Witness {
    /// Reduces `value` modulo the group order and wraps it.
    ///
    /// Fails with [`ClaimInvalid::DegenerateWitness`] if the result is zero,
    /// since a zero exponent makes the proof trivial.
    pub fn new(group: &Group, value: &Uint) -> Result<Self, ClaimInvalid> {
        let secret = Secret::init_with(|| group.reduce_exponent(value));
        if secret.expose_secret() == &Uint::ZERO {
            return Err(ClaimInvalid::DegenerateWitness);
        }
        Ok(Self(secret))
    }

    pub(crate) fn expose_secret(&self) -> &Uint {
        self.0.expose_secret()
    }
}

/// Derives the witness for a password: `SHA-256(password) mod q`.
pub fn derive_password(group: &Group, password: &str) -> Result<Witness, ClaimInvalid> {
    if password.is_empty() {
        return Err(ClaimInvalid::EmptyPassword);
    }
    let digest = Secret::init_with(|| {
        Hash::new()
            .chain_raw_bytes(password)
            .finalize_to_uint(group.order_nonzero())
    });
    Witness::new(group, digest.expose_secret())
}

/// Derives the witness for an age claim: the number of years in excess of `min_age`.
///
/// An age of exactly `min_age` has no excess and fails with [`ClaimInvalid::DegenerateWitness`],
/// not [`ClaimInvalid::Underage`]; a shell should not report it as underage.
pub fn derive_age(
    group: &Group,
    birth_year: i32,
    current_year: i32,
    min_age: i32,
) -> Result<Witness, ClaimInvalid> {
    if birth_year > current_year {
        return Err(ClaimInvalid::BirthYearInFuture {
            birth_year,
            current_year,
        });
    }
    // Widened so that extreme years cannot overflow.
    let age = i64::from(current_year) - i64::from(birth_year);
    if age < i64::from(min_age) {
        return Err(ClaimInvalid::Underage {
            age: i32::try_from(age).unwrap_or(i32::MAX),
            min_age,
        });
    }
    let excess = u64::try_from(age - i64::from(min_age)).map_err(|_| ClaimInvalid::DegenerateWitness)?;
    Witness::new(group, &Uint::from_u64(excess))
}

/// Derives the witness for a range claim: the offset of the secret number from `min`.
///
/// A secret number equal to `min` has a zero offset and fails with [`ClaimInvalid::DegenerateWitness`],
/// even though the range is closed.
pub fn derive_range(
    group: &Group,
    claimed_number: u64,
    secret_number: u64,
    min: u64,
    max: u64,
) -> Result<Witness, ClaimInvalid> {
    if !(min..=max).contains(&claimed_number) {
        return Err(ClaimInvalid::OutOfRange {
            number: claimed_number,
            min,
            max,
        });
    }
    if claimed_number != secret_number {
        return Err(ClaimInvalid::NumberMismatch);
    }
    if !(min..=max).contains(&secret_number) {
        return Err(ClaimInvalid::OutOfRange {
            number: secret_number,
            min,
            max,
        });
    }
    Witness::new(group, &Uint::from_u64(secret_number - min))
}

/// Derives the witness for a membership claim: the (1-based) position of the secret member.
pub fn derive_membership(
    group: &Group,
    claimed_member: &str,
    members: &[impl AsRef<str>],
    secret_member: &str,
) -> Result<Witness, ClaimInvalid> {
    if !members.iter().any(|member| member.as_ref() == claimed_member) {
        return Err(ClaimInvalid::NotAMember {
            member: claimed_member.into(),
        });
    }
    if claimed_member != secret_member {
        return Err(ClaimInvalid::MemberMismatch);
    }
    let index = members
        .iter()
        .position(|member| member.as_ref() == secret_member)
        .ok_or_else(|| ClaimInvalid::NotAMember {
            member: secret_member.into(),
        })?;
    let position = u64::try_from(index)
        .ok()
        .and_then(|index| index.checked_add(1))
        .ok_or(ClaimInvalid::DegenerateWitness)?;
    Witness::new(group, &Uint::from_u64(position))
}
