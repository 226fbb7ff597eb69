//! Demonstration parameters, scaled down so that every value fits on a screen.
//!
//! **Not secure**: the group order is about `2^13`, so a cheating prover
//! can brute-force the witness instantly. Use for illustration and testing only.

use alloc::string::String;
use alloc::vec::Vec;

use crate::claims::{AgePolicy, ClaimPolicy, MembershipPolicy, RangePolicy};
use crate::error::DomainError;
use crate::group::Group;
use crate::uint::Uint;

/// The demo modulus `p`.
pub const DEMO_MODULUS: u64 = 10007;

/// The demo generator `g` (a primitive root modulo [`DEMO_MODULUS`]).
pub const DEMO_GENERATOR: u64 = 5;

/// The password registered by the demo.
pub const DEMO_PASSWORD: &str = "SecurePassword123";

/// The minimum age of the demo age policy.
pub const DEMO_MIN_AGE: i32 = 18;

/// The inclusive bounds of the demo range policy.
pub const DEMO_RANGE: (u64, u64) = (1000, 5000);

/// The secret number of the demo range policy.
pub const DEMO_SECRET_NUMBER: u64 = 3500;

/// The members of the demo membership policy, in order.
pub const DEMO_MEMBERS: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Eve"];

/// The secret member of the demo membership policy.
pub const DEMO_SECRET_MEMBER: &str = "Charlie";

/// The demo group `p = 10007`, `g = 5`, `q = 10006`.
pub fn demo_group() -> Group {
    Group::new(Uint::from_u64(DEMO_MODULUS), Uint::from_u64(DEMO_GENERATOR)).expect("Correct by construction")
}

/// The demo claim policy, evaluated for ages in `current_year`.
pub fn demo_policy(current_year: i32) -> Result<ClaimPolicy, DomainError> {
    let (min, max) = DEMO_RANGE;
    Ok(ClaimPolicy {
        age: AgePolicy::new(DEMO_MIN_AGE, current_year)?,
        range: RangePolicy::new(min, max, DEMO_SECRET_NUMBER)?,
        membership: MembershipPolicy::new(
            DEMO_MEMBERS.iter().copied().map(String::from).collect::<Vec<_>>(),
            DEMO_SECRET_MEMBER.into(),
        )?,
    })
}
