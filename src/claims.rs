//! Claim evaluation: precondition checks, witness derivation and proof runs.

mod dispatcher;
mod password;
mod policy;
mod request;

pub use dispatcher::ClaimDispatcher;
pub use password::PasswordClaimContext;
pub use policy::{AgePolicy, ClaimPolicy, MembershipPolicy, RangePolicy};
pub use request::{ClaimKind, ClaimRequest};
