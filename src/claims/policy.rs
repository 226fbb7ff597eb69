use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The verifier-side settings for all claim types except passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPolicy {
    /// Settings for age claims.
    pub age: AgePolicy,
    /// Settings for range claims.
    pub range: RangePolicy,
    /// Settings for membership claims.
    pub membership: MembershipPolicy,
}

/// An age claim proves the claimant is at least `min_age` years old in `current_year`.
///
/// Claimants aged exactly `min_age` are rejected with
/// [`ClaimInvalid::DegenerateWitness`](crate::ClaimInvalid::DegenerateWitness),
/// since the proven excess would be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AgePolicyRepr")]
pub struct AgePolicy {
    min_age: i32,
    current_year: i32,
}

#[derive(Deserialize)]
struct AgePolicyRepr {
    min_age: i32,
    current_year: i32,
}

impl AgePolicy {
    /// Creates a policy; `current_year` is supplied by the caller since the core has no clock.
    pub fn new(min_age: i32, current_year: i32) -> Result<Self, DomainError> {
        if min_age < 0 {
            return Err(DomainError::NegativeMinimumAge);
        }
        Ok(Self { min_age, current_year })
    }

    /// The minimum age.
    pub fn min_age(&self) -> i32 {
        self.min_age
    }

    /// The year the age is computed for.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }
}

impl TryFrom<AgePolicyRepr> for AgePolicy {
    type Error = DomainError;

    fn try_from(repr: AgePolicyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min_age, repr.current_year)
    }
}

/// A range claim proves knowledge of the secret number within `[min, max]`.
///
/// If the secret number equals `min`, claims of it are rejected with
/// [`ClaimInvalid::DegenerateWitness`](crate::ClaimInvalid::DegenerateWitness),
/// since the proven offset would be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangePolicyRepr")]
pub struct RangePolicy {
    min: u64,
    max: u64,
    secret_number: u64,
}

#[derive(Deserialize)]
struct RangePolicyRepr {
    min: u64,
    max: u64,
    secret_number: u64,
}

impl RangePolicy {
    /// Creates a policy for the closed range `[min, max]`.
    pub fn new(min: u64, max: u64, secret_number: u64) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::EmptyRange);
        }
        if !(min..=max).contains(&secret_number) {
            return Err(DomainError::SecretNumberOutOfRange);
        }
        Ok(Self {
            min,
            max,
            secret_number,
        })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u64 {
        self.max
    }

    pub(crate) fn secret_number(&self) -> u64 {
        self.secret_number
    }
}

impl TryFrom<RangePolicyRepr> for RangePolicy {
    type Error = DomainError;

    fn try_from(repr: RangePolicyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min, repr.max, repr.secret_number)
    }
}

/// A membership claim proves that the claimant is the designated member of a fixed group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MembershipPolicyRepr")]
pub struct MembershipPolicy {
    members: Vec<String>,
    secret_member: String,
}

#[derive(Deserialize)]
struct MembershipPolicyRepr {
    members: Vec<String>,
    secret_member: String,
}

impl MembershipPolicy {
    /// Creates a policy over the ordered list of `members`.
    pub fn new(members: Vec<String>, secret_member: String) -> Result<Self, DomainError> {
        if members.is_empty() {
            return Err(DomainError::NoMembers);
        }
        if !members.contains(&secret_member) {
            return Err(DomainError::SecretMemberNotListed);
        }
        Ok(Self { members, secret_member })
    }

    /// The members, in order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub(crate) fn secret_member(&self) -> &str {
        &self.secret_member
    }
}

impl TryFrom<MembershipPolicyRepr> for MembershipPolicy {
    type Error = DomainError;

    fn try_from(repr: MembershipPolicyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.members, repr.secret_member)
    }
}
