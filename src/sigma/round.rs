//! A single commit-challenge-respond-verify cycle.
//!
//! The states are encoded as types, so a round can only be driven forward,
//! and each state is consumed by the transition out of it.

use rand_core::CryptoRngCore;

use crate::commitment::PublicKey;
use crate::group::Group;
use crate::tools::Secret;
use crate::uint::{PublicUint, Uint};
use crate::witness::Witness;

/// The prover has sampled a nonce `k` and published `t = g^k`.
#[derive(Debug)]
pub struct CommittedRound<'a> {
    group: &'a Group,
    round: usize,
    nonce: Secret<Uint>,
    commitment: Uint,
}

impl<'a> CommittedRound<'a> {
    /// Samples a fresh nonce and commits to it.
    pub fn commit(rng: &mut impl CryptoRngCore, group: &'a Group, round: usize) -> Self {
        let nonce = Secret::init_with(|| group.random_exponent(rng));
        let commitment = group.power_of_generator(nonce.expose_secret());
        Self {
            group,
            round,
            nonce,
            commitment,
        }
    }

    /// The commitment `t`.
    pub fn commitment(&self) -> PublicUint {
        self.commitment.into()
    }

    /// The verifier's move: samples the challenge, independently of the commitment.
    pub fn challenge(self, rng: &mut impl CryptoRngCore) -> ChallengedRound<'a> {
        let challenge = self.group.random_exponent(rng);
        ChallengedRound {
            committed: self,
            challenge,
        }
    }
}

/// The verifier has sent a challenge `e`.
#[derive(Debug)]
pub struct ChallengedRound<'a> {
    committed: CommittedRound<'a>,
    challenge: Uint,
}

impl<'a> ChallengedRound<'a> {
    /// The challenge `e`.
    pub fn challenge(&self) -> PublicUint {
        self.challenge.into()
    }

    /// The prover's move: `s = (k + e x) mod q`. The nonce is dropped (and zeroized) here.
    pub fn respond(self, witness: &Witness) -> RespondedRound<'a> {
        let CommittedRound {
            group,
            round,
            nonce,
            commitment,
        } = self.committed;
        let blinded = Secret::init_with(|| group.mul_exponents(&self.challenge, witness.expose_secret()));
        let response = group.add_exponents(nonce.expose_secret(), blinded.expose_secret());
        RespondedRound {
            group,
            round,
            commitment,
            challenge: self.challenge,
            response,
        }
    }
}

/// The prover has sent the response `s`; only public values remain.
#[derive(Debug, Clone)]
pub struct RespondedRound<'a> {
    group: &'a Group,
    round: usize,
    commitment: Uint,
    challenge: Uint,
    response: Uint,
}

impl RespondedRound<'_> {
    /// The response `s`.
    pub fn response(&self) -> PublicUint {
        self.response.into()
    }

    /// The verifier's check: `g^s == t X^e mod p`.
    pub fn verify(self, public_key: &PublicKey) -> RoundReport {
        let group = self.group;
        let left = group.power_of_generator(&self.response);
        let right = group.combine(&self.commitment, &group.power(public_key.as_uint(), &self.challenge));
        RoundReport {
            round: self.round,
            commitment: self.commitment.into(),
            challenge: self.challenge.into(),
            response: self.response.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// The terminal state of a round: all public values and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    /// `t = g^k mod p`
    pub commitment: PublicUint,
    /// `e`
    pub challenge: PublicUint,
    /// `s = (k + e x) mod q`
    pub response: PublicUint,
    /// `g^s mod p`
    pub left: PublicUint,
    /// `t X^e mod p`
    pub right: PublicUint,
}

impl RoundReport {
    /// Runs a full round between an honest verifier and a prover holding `witness`.
    pub fn run(
        rng: &mut impl CryptoRngCore,
        group: &Group,
        round: usize,
        witness: &Witness,
        public_key: &PublicKey,
    ) -> Self {
        CommittedRound::commit(rng, group, round)
            .challenge(rng)
            .respond(witness)
            .verify(public_key)
    }

    /// Returns `true` if the round verified.
    pub fn passed(&self) -> bool {
        self.left == self.right
    }
}
