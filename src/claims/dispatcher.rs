use rand_core::CryptoRngCore;

use super::password::PasswordClaimContext;
use super::policy::ClaimPolicy;
use super::request::ClaimRequest;
use crate::commitment::PublicKey;
use crate::error::{ClaimInvalid, DomainError};
use crate::group::Group;
use crate::params::ProofConfig;
use crate::sigma::{ClaimOutcome, ProofOrchestrator};
use crate::witness::{derive_age, derive_membership, derive_password, derive_range, Witness};

/// Evaluates claims of all supported types against a fixed configuration.
///
/// Immutable after construction; share it between concurrent callers with an `Arc`.
#[derive(Debug, Clone)]
pub struct ClaimDispatcher {
    group: Group,
    policy: ClaimPolicy,
    password: PasswordClaimContext,
    config: ProofConfig,
}

impl ClaimDispatcher {
    /// Creates a dispatcher.
    ///
    /// `password` must have been set up over `group`,
    /// otherwise fails with [`DomainError::PasswordGroupMismatch`].
    pub fn new(
        group: Group,
        policy: ClaimPolicy,
        password: PasswordClaimContext,
        config: ProofConfig,
    ) -> Result<Self, DomainError> {
        if !password.belongs_to(&group) {
            return Err(DomainError::PasswordGroupMismatch);
        }
        Ok(Self {
            group,
            policy,
            password,
            config,
        })
    }

    /// The group the proofs run in.
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// The claim policy.
    pub fn policy(&self) -> &ClaimPolicy {
        &self.policy
    }

    /// The registered password.
    pub fn password_context(&self) -> &PasswordClaimContext {
        &self.password
    }

    /// The proof settings.
    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    /// Checks the claim's preconditions, then proves it interactively.
    ///
    /// A claim failing its preconditions is rejected without running any round.
    pub fn evaluate_claim(&self, rng: &mut impl CryptoRngCore, request: &ClaimRequest) -> ClaimOutcome {
        let kind = request.kind();
        tracing::debug!(%kind, "evaluating claim");

        let (witness, public_key) = match self.prepare(request) {
            Ok(prepared) => prepared,
            Err(reason) => {
                tracing::warn!(%kind, %reason, "claim rejected");
                return ClaimOutcome::rejected(reason);
            }
        };

        let outcome = ProofOrchestrator::new(&self.group, self.config).run(rng, &witness, &public_key);
        tracing::debug!(%kind, verdict = ?outcome.verdict(), "claim evaluated");
        outcome
    }

    /// Derives the witness and the public key the proof is checked against.
    fn prepare(&self, request: &ClaimRequest) -> Result<(Witness, PublicKey), ClaimInvalid> {
        let group = &self.group;
        let witness = match request {
            ClaimRequest::Password { password } => {
                // Checked against the registered key, not one derived from the attempt.
                let witness = derive_password(group, password)?;
                return Ok((witness, *self.password.public_key()));
            }
            ClaimRequest::Age { birth_year } => {
                let age = &self.policy.age;
                derive_age(group, *birth_year, age.current_year(), age.min_age())?
            }
            ClaimRequest::Range { claimed_number } => {
                let range = &self.policy.range;
                derive_range(
                    group,
                    *claimed_number,
                    range.secret_number(),
                    range.min(),
                    range.max(),
                )?
            }
            ClaimRequest::Membership { claimed_member } => {
                let membership = &self.policy.membership;
                derive_membership(
                    group,
                    claimed_member,
                    membership.members(),
                    membership.secret_member(),
                )?
            }
        };
        let public_key = PublicKey::publish(group, &witness);
        Ok((witness, public_key))
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_core::{OsRng, SeedableRng};

    use super::ClaimDispatcher;
    use crate::claims::{ClaimRequest, PasswordClaimContext};
    use crate::error::{ClaimInvalid, DomainError, Error};
    use crate::group::Group;
    use crate::params::demo::{demo_group, demo_policy, DEMO_PASSWORD};
    use crate::params::ProofConfig;
    use crate::sigma::Verdict;
    use crate::transcript::{Event, EventKind};
    use crate::uint::Uint;

    const CURRENT_YEAR: i32 = 2025;

    fn dispatcher() -> ClaimDispatcher {
        let group = demo_group();
        let password = PasswordClaimContext::setup(&group, DEMO_PASSWORD).unwrap();
        ClaimDispatcher::new(
            group,
            demo_policy(CURRENT_YEAR).unwrap(),
            password,
            ProofConfig::default(),
        )
        .unwrap()
    }

    fn assert_rejected(dispatcher: &ClaimDispatcher, request: ClaimRequest, reason: ClaimInvalid) {
        let outcome = dispatcher.evaluate_claim(&mut OsRng, &request);
        assert!(!outcome.accepted());
        assert_eq!(outcome.verdict(), Verdict::ClaimInvalid);
        assert_eq!(outcome.failure(), Some(&Error::ClaimInvalid(reason.clone())));
        assert_eq!(outcome.transcript().rounds_started(), 0);
        assert_eq!(outcome.transcript().events(), [Event::ClaimRejected { reason }]);
    }

    #[test_log::test]
    fn correct_password() {
        let dispatcher = dispatcher();
        let request = ClaimRequest::Password {
            password: DEMO_PASSWORD.into(),
        };
        let outcome = dispatcher.evaluate_claim(&mut OsRng, &request);
        assert!(outcome.accepted());
        assert_eq!(outcome.transcript().rounds_started(), 3);
        assert!(outcome.transcript().recheck(dispatcher.group()));
    }

    #[test_log::test]
    fn wrong_password() {
        let dispatcher = dispatcher();
        let request = ClaimRequest::Password {
            password: "wrong".into(),
        };
        let outcome = dispatcher.evaluate_claim(&mut ChaCha8Rng::seed_from_u64(42), &request);
        assert!(!outcome.accepted());
        assert_eq!(outcome.verdict(), Verdict::ProofFailed);

        let rounds = outcome.transcript().rounds_started();
        assert!(rounds >= 1);
        assert_eq!(outcome.failure(), Some(&Error::VerificationFailed { round: rounds }));
        assert_eq!(outcome.transcript().events().last().map(Event::kind), Some(EventKind::Error));
        assert!(outcome.transcript().recheck(dispatcher.group()));
    }

    #[test]
    fn empty_password() {
        assert_rejected(
            &dispatcher(),
            ClaimRequest::Password { password: "".into() },
            ClaimInvalid::EmptyPassword,
        );
    }

    #[test]
    fn age_claims() {
        let dispatcher = dispatcher();

        let outcome = dispatcher.evaluate_claim(&mut OsRng, &ClaimRequest::Age { birth_year: 1990 });
        assert!(outcome.accepted());

        assert_rejected(
            &dispatcher,
            ClaimRequest::Age { birth_year: 2008 },
            ClaimInvalid::Underage { age: 17, min_age: 18 },
        );
        assert_rejected(
            &dispatcher,
            ClaimRequest::Age { birth_year: 2030 },
            ClaimInvalid::BirthYearInFuture {
                birth_year: 2030,
                current_year: CURRENT_YEAR,
            },
        );
        // Exactly the minimum age leaves nothing to prove.
        assert_rejected(
            &dispatcher,
            ClaimRequest::Age { birth_year: 2007 },
            ClaimInvalid::DegenerateWitness,
        );
    }

    #[test]
    fn range_claims() {
        let dispatcher = dispatcher();

        let outcome = dispatcher.evaluate_claim(&mut OsRng, &ClaimRequest::Range { claimed_number: 3500 });
        assert!(outcome.accepted());
        assert_eq!(outcome.transcript().rounds_started(), 3);

        assert_rejected(
            &dispatcher,
            ClaimRequest::Range { claimed_number: 3000 },
            ClaimInvalid::NumberMismatch,
        );
        assert_rejected(
            &dispatcher,
            ClaimRequest::Range { claimed_number: 6000 },
            ClaimInvalid::OutOfRange {
                number: 6000,
                min: 1000,
                max: 5000,
            },
        );
    }

    #[test]
    fn membership_claims() {
        let dispatcher = dispatcher();

        let request = ClaimRequest::Membership {
            claimed_member: "Charlie".into(),
        };
        assert!(dispatcher.evaluate_claim(&mut OsRng, &request).accepted());

        assert_rejected(
            &dispatcher,
            ClaimRequest::Membership {
                claimed_member: "Mallory".into(),
            },
            ClaimInvalid::NotAMember {
                member: "Mallory".into(),
            },
        );
        assert_rejected(
            &dispatcher,
            ClaimRequest::Membership {
                claimed_member: "Alice".into(),
            },
            ClaimInvalid::MemberMismatch,
        );
    }

    #[test]
    fn round_count_follows_config() {
        let group = demo_group();
        let password = PasswordClaimContext::setup(&group, DEMO_PASSWORD).unwrap();
        let dispatcher = ClaimDispatcher::new(
            group,
            demo_policy(CURRENT_YEAR).unwrap(),
            password,
            ProofConfig::new(7).unwrap(),
        )
        .unwrap();
        let outcome = dispatcher.evaluate_claim(
            &mut OsRng,
            &ClaimRequest::Password {
                password: DEMO_PASSWORD.into(),
            },
        );
        assert!(outcome.accepted());
        assert_eq!(outcome.transcript().rounds_started(), 7);
    }

    #[test]
    fn password_must_match_group() {
        let other = Group::new(Uint::from_u64(10007), Uint::from_u64(7)).unwrap();
        let password = PasswordClaimContext::setup(&other, DEMO_PASSWORD).unwrap();
        let result = ClaimDispatcher::new(
            demo_group(),
            demo_policy(CURRENT_YEAR).unwrap(),
            password,
            ProofConfig::default(),
        );
        assert_eq!(result.err(), Some(DomainError::PasswordGroupMismatch));
    }
}
