//! Structured record of a proof run.
//!
//! Events carry only public values and are free of presentation;
//! rendering them is left to the caller.

use alloc::vec::Vec;

use serde::Serialize;

use crate::error::ClaimInvalid;
use crate::group::Group;
use crate::uint::PublicUint;

/// Coarse classification of transcript events, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Public setup information.
    Info,
    /// Start of a protocol round.
    RoundStart,
    /// A protocol message (commitment, challenge or response).
    Step,
    /// The verifier's check.
    Verification,
    /// A round passed.
    Success,
    /// A round failed, or the claim was rejected.
    Error,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The public parameters and the value the proof is checked against.
    Parameters {
        /// `p`
        modulus: PublicUint,
        /// `g`
        generator: PublicUint,
        /// `q`
        order: PublicUint,
        /// `X = g^x mod p`
        public_key: PublicUint,
    },
    /// A round begins.
    RoundStarted {
        /// 1-based round number.
        round: usize,
    },
    /// The prover committed to a nonce: `t = g^k mod p`.
    Commitment {
        /// 1-based round number.
        round: usize,
        /// `t`
        commitment: PublicUint,
    },
    /// The verifier sent a challenge `e`.
    Challenge {
        /// 1-based round number.
        round: usize,
        /// `e`
        challenge: PublicUint,
    },
    /// The prover responded with `s = (k + e x) mod q`.
    Response {
        /// 1-based round number.
        round: usize,
        /// `s`
        response: PublicUint,
    },
    /// The verifier compared `g^s mod p` with `t X^e mod p`.
    Verification {
        /// 1-based round number.
        round: usize,
        /// `g^s mod p`
        left: PublicUint,
        /// `t X^e mod p`
        right: PublicUint,
    },
    /// Both sides of the check were equal.
    RoundPassed {
        /// 1-based round number.
        round: usize,
    },
    /// The sides of the check differed; the run stops here.
    RoundFailed {
        /// 1-based round number.
        round: usize,
    },
    /// The claim failed its preconditions; no round was run.
    ClaimRejected {
        /// What was wrong with the claim.
        reason: ClaimInvalid,
    },
}

impl Event {
    /// The display category of the event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Parameters { .. } => EventKind::Info,
            Self::RoundStarted { .. } => EventKind::RoundStart,
            Self::Commitment { .. } | Self::Challenge { .. } | Self::Response { .. } => EventKind::Step,
            Self::Verification { .. } => EventKind::Verification,
            Self::RoundPassed { .. } => EventKind::Success,
            Self::RoundFailed { .. } | Self::ClaimRejected { .. } => EventKind::Error,
        }
    }

    /// The round the event belongs to, if any.
    pub fn round(&self) -> Option<usize> {
        match self {
            Self::RoundStarted { round }
            | Self::Commitment { round, .. }
            | Self::Challenge { round, .. }
            | Self::Response { round, .. }
            | Self::Verification { round, .. }
            | Self::RoundPassed { round }
            | Self::RoundFailed { round } => Some(*round),
            Self::Parameters { .. } | Self::ClaimRejected { .. } => None,
        }
    }
}

/// The ordered, append-only list of events of one proof run.
///
/// Only the crate can append; a finished transcript handed out to the caller is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    events: Vec<Event>,
}

impl Transcript {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events in chronological order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in chronological order.
    pub fn iter(&self) -> core::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// The number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no event was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The number of rounds that were started.
    pub fn rounds_started(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::RoundStarted { .. }))
            .count()
    }

    /// Independently re-checks every recorded round against `group`.
    ///
    /// Returns `true` if the recorded parameters match the group, each recorded
    /// verification is consistent with the recorded commitment, challenge and response,
    /// and every pass/fail verdict agrees with its verification.
    /// A transcript with no parameters event (a rejected claim) has nothing to check and passes.
    pub fn recheck(&self, group: &Group) -> bool {
        let mut public_key = None;
        let mut commitment = None;
        let mut challenge = None;
        let mut response = None;
        let mut last_check = None;

        for event in &self.events {
            match event {
                Event::Parameters {
                    modulus,
                    generator,
                    order,
                    public_key: key,
                } => {
                    if (*modulus, *generator, *order) != group.public_parameters() {
                        return false;
                    }
                    public_key = Some(*key);
                }
                Event::RoundStarted { .. } => {
                    commitment = None;
                    challenge = None;
                    response = None;
                    last_check = None;
                }
                Event::Commitment { commitment: t, .. } => commitment = Some(*t),
                Event::Challenge { challenge: e, .. } => challenge = Some(*e),
                Event::Response { response: s, .. } => response = Some(*s),
                Event::Verification { left, right, .. } => {
                    let (Some(key), Some(t), Some(e), Some(s)) = (public_key, commitment, challenge, response) else {
                        return false;
                    };
                    let expected_left = group.power_of_generator(s.as_ref());
                    let expected_right = group.combine(t.as_ref(), &group.power(key.as_ref(), e.as_ref()));
                    if left.as_ref() != &expected_left || right.as_ref() != &expected_right {
                        return false;
                    }
                    last_check = Some(left == right);
                }
                Event::RoundPassed { .. } => {
                    if last_check != Some(true) {
                        return false;
                    }
                }
                Event::RoundFailed { .. } => {
                    if last_check != Some(false) {
                        return false;
                    }
                }
                Event::ClaimRejected { .. } => {}
            }
        }
        true
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Event;
    type IntoIter = core::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
