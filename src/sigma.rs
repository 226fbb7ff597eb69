//! The interactive Schnorr sigma-protocol.
//!
//! Proves knowledge of `x` such that `g^x = X` without revealing `x`.
//! Each round is three moves:
//!
//! 1. the prover commits to a fresh nonce `k` by sending `t = g^k`;
//! 2. the verifier replies with a random challenge `e`;
//! 3. the prover responds with `s = k + e x mod q`,
//!
//! and the verifier accepts if `g^s == t X^e`.
//! The challenge is sampled by the verifier (no Fiat-Shamir),
//! so a prover not knowing `x` passes a round with probability about `1/q`.

mod orchestrator;
mod round;

pub use orchestrator::{ClaimOutcome, ProofOrchestrator, Verdict};
pub use round::{ChallengedRound, CommittedRound, RespondedRound, RoundReport};
