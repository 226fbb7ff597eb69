use rand_core::CryptoRngCore;
use serde::Serialize;

use super::round::RoundReport;
use crate::commitment::PublicKey;
use crate::error::{ClaimInvalid, Error};
use crate::group::Group;
use crate::params::ProofConfig;
use crate::transcript::{Event, Transcript};
use crate::witness::Witness;

/// The user-facing category of a finished claim evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every round verified.
    Accepted,
    /// A round failed to verify.
    ProofFailed,
    /// The claim was rejected before running the protocol.
    ClaimInvalid,
}

/// The terminal result of a proof run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    accepted: bool,
    transcript: Transcript,
    failure: Option<Error>,
}

impl ClaimOutcome {
    pub(crate) fn rejected(reason: ClaimInvalid) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Event::ClaimRejected { reason: reason.clone() });
        Self {
            accepted: false,
            transcript,
            failure: Some(Error::ClaimInvalid(reason)),
        }
    }

    /// Returns `true` if the proof was accepted.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// The record of the run.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Why the claim was not accepted, if it was not.
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// The category of the result, for choosing a message to show.
    pub fn verdict(&self) -> Verdict {
        match &self.failure {
            None => Verdict::Accepted,
            Some(Error::ClaimInvalid(_)) => Verdict::ClaimInvalid,
            Some(_) => Verdict::ProofFailed,
        }
    }

    /// Splits the outcome into its transcript and the failure, if any.
    pub fn into_parts(self) -> (Transcript, Option<Error>) {
        (self.transcript, self.failure)
    }
}

/// Runs a configured number of sigma-protocol rounds and records them.
#[derive(Debug, Clone, Copy)]
pub struct ProofOrchestrator<'a> {
    group: &'a Group,
    config: ProofConfig,
}

impl<'a> ProofOrchestrator<'a> {
    /// Creates an orchestrator over `group`.
    pub fn new(group: &'a Group, config: ProofConfig) -> Self {
        Self { group, config }
    }

    /// Proves knowledge of `witness` against `public_key`.
    ///
    /// Stops at the first round that fails to verify.
    pub fn run(&self, rng: &mut impl CryptoRngCore, witness: &Witness, public_key: &PublicKey) -> ClaimOutcome {
        let (modulus, generator, order) = self.group.public_parameters();
        let mut transcript = Transcript::new();
        transcript.push(Event::Parameters {
            modulus,
            generator,
            order,
            public_key: public_key.value(),
        });

        for round in 1..=self.config.rounds() {
            transcript.push(Event::RoundStarted { round });
            let report = RoundReport::run(rng, self.group, round, witness, public_key);
            record_round(&mut transcript, &report);

            if !report.passed() {
                tracing::debug!(round, "round failed to verify");
                transcript.push(Event::RoundFailed { round });
                return ClaimOutcome {
                    accepted: false,
                    transcript,
                    failure: Some(Error::VerificationFailed { round }),
                };
            }

            tracing::trace!(round, "round verified");
            transcript.push(Event::RoundPassed { round });
        }

        tracing::debug!(rounds = self.config.rounds(), "proof accepted");
        ClaimOutcome {
            accepted: true,
            transcript,
            failure: None,
        }
    }
}

fn record_round(transcript: &mut Transcript, report: &RoundReport) {
    let round = report.round;
    transcript.push(Event::Commitment {
        round,
        commitment: report.commitment,
    });
    transcript.push(Event::Challenge {
        round,
        challenge: report.challenge,
    });
    transcript.push(Event::Response {
        round,
        response: report.response,
    });
    transcript.push(Event::Verification {
        round,
        left: report.left,
        right: report.right,
    });
}
