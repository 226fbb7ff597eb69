use alloc::string::String;

use serde::Serialize;

/// Errors returned by the crate.
#[derive(displaydoc::Display, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid public parameters: {0}
    Domain(DomainError),
    /// Claim rejected: {0}
    ClaimInvalid(ClaimInvalid),
    /// Unsupported claim type `{0}`
    UnsupportedClaim(String),
    /// Verification failed in round {round}
    VerificationFailed {
        /// The (1-based) round whose check did not hold.
        round: usize,
    },
}

impl core::error::Error for Error {}

impl From<DomainError> for Error {
    fn from(source: DomainError) -> Self {
        Self::Domain(source)
    }
}

impl From<ClaimInvalid> for Error {
    fn from(source: ClaimInvalid) -> Self {
        Self::ClaimInvalid(source)
    }
}

/// Malformed group parameters or proof configuration.
///
/// These are detected when the corresponding objects are constructed,
/// so they can only happen at startup.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// the modulus must be greater than 1
    ModulusTooSmall,
    /// the modulus must be an odd prime
    EvenModulus,
    /// the generator must lie in `[2, modulus - 2]`
    GeneratorOutOfRange,
    /// the number of rounds must be positive
    NoRounds,
    /// the range lower bound exceeds the upper bound
    EmptyRange,
    /// the secret number lies outside of the configured range
    SecretNumberOutOfRange,
    /// the membership list is empty
    NoMembers,
    /// the secret member is not in the membership list
    SecretMemberNotListed,
    /// the minimum age must not be negative
    NegativeMinimumAge,
    /// the password was registered over a different group
    PasswordGroupMismatch,
}

impl core::error::Error for DomainError {}

/// A violated claim precondition.
///
/// Reported before any protocol round runs.
#[derive(displaydoc::Display, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClaimInvalid {
    /// the password is empty
    EmptyPassword,
    /// the claim payload `{payload}` could not be parsed
    MalformedPayload {
        /// The raw payload as received.
        payload: String,
    },
    /// the birth year {birth_year} is after the current year {current_year}
    BirthYearInFuture {
        /// Submitted birth year.
        birth_year: i32,
        /// Current year of the policy.
        current_year: i32,
    },
    /// the age {age} is below the minimum of {min_age}
    Underage {
        /// Age computed from the submitted birth year.
        age: i32,
        /// Required minimum age.
        min_age: i32,
    },
    /// the number {number} lies outside of `[{min}, {max}]`
    OutOfRange {
        /// The number being checked.
        number: u64,
        /// Lower bound of the range (inclusive).
        min: u64,
        /// Upper bound of the range (inclusive).
        max: u64,
    },
    /// the claimed number does not match the secret number
    NumberMismatch,
    /// `{member}` is not a member of the group
    NotAMember {
        /// The claimed member.
        member: String,
    },
    /// the claimed member does not match the secret member
    MemberMismatch,
    /// the derived witness is zero modulo the group order
    DegenerateWitness,
}

impl core::error::Error for ClaimInvalid {}
