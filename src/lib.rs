#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::indexing_slicing))]

/*!
## Parameters

[`params::demo`]: the toy group `p = 10007`, `g = 5` and the demo claim policy.
Other groups are configured through [`GroupConfig`].
*/

extern crate alloc;

mod claims;
mod commitment;
mod error;
mod group;
mod sigma;
mod tools;
mod transcript;
mod uint;
mod witness;

pub mod params;

pub use claims::{
    AgePolicy, ClaimDispatcher, ClaimKind, ClaimPolicy, ClaimRequest, MembershipPolicy, PasswordClaimContext,
    RangePolicy,
};
pub use commitment::PublicKey;
pub use error::{ClaimInvalid, DomainError, Error};
pub use group::Group;
pub use params::{GroupConfig, ProofConfig, DEFAULT_ROUNDS};
pub use sigma::{
    ChallengedRound, ClaimOutcome, CommittedRound, ProofOrchestrator, RespondedRound, RoundReport, Verdict,
};
pub use transcript::{Event, EventKind, Transcript};
pub use uint::{ParseUintError, PublicUint, Uint};
pub use witness::{derive_age, derive_membership, derive_password, derive_range, Witness};
