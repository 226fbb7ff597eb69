use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, SeedableRng};
use sigma_claims::{
    derive_password,
    params::demo::{demo_group, demo_policy, DEMO_PASSWORD},
    ClaimDispatcher, ClaimInvalid, ClaimRequest, Error, Event, PasswordClaimContext, ProofConfig,
    ProofOrchestrator, PublicKey, PublicUint, Uint, Verdict, Witness,
};

fn dispatcher(rounds: usize) -> ClaimDispatcher {
    let group = demo_group();
    let password = PasswordClaimContext::setup(&group, DEMO_PASSWORD).unwrap();
    ClaimDispatcher::new(
        group,
        demo_policy(2025).unwrap(),
        password,
        ProofConfig::new(rounds).unwrap(),
    )
    .unwrap()
}

fn evaluate(dispatcher: &ClaimDispatcher, kind: &str, payload: &str) -> sigma_claims::ClaimOutcome {
    let request = ClaimRequest::parse(kind, payload).unwrap();
    dispatcher.evaluate_claim(&mut OsRng, &request)
}

#[test]
fn known_vector() {
    let group = demo_group();
    let context = PasswordClaimContext::setup(&group, DEMO_PASSWORD).unwrap();
    assert_eq!(context.public_key().value(), PublicUint::from_u64(4578));
    assert_eq!(context.public_key().to_string(), "4578");
}

#[test]
fn scenarios() {
    let dispatcher = dispatcher(3);

    let outcome = evaluate(&dispatcher, "password", DEMO_PASSWORD);
    assert_eq!(outcome.verdict(), Verdict::Accepted);
    assert_eq!(outcome.transcript().rounds_started(), 3);

    let outcome = evaluate(&dispatcher, "password", "wrong");
    assert_eq!(outcome.verdict(), Verdict::ProofFailed);
    let round = outcome.transcript().rounds_started();
    assert_eq!(outcome.failure(), Some(&Error::VerificationFailed { round }));
    assert!(matches!(outcome.transcript().events().last(), Some(Event::RoundFailed { .. })));

    let outcome = evaluate(&dispatcher, "age", "2008");
    assert_eq!(outcome.verdict(), Verdict::ClaimInvalid);
    assert_eq!(outcome.transcript().rounds_started(), 0);

    let outcome = evaluate(&dispatcher, "range", "3500");
    assert_eq!(outcome.verdict(), Verdict::Accepted);
    let (transcript, failure) = outcome.into_parts();
    assert_eq!(failure, None);
    assert!(transcript.recheck(dispatcher.group()));

    let outcome = evaluate(&dispatcher, "membership", "Mallory");
    assert_eq!(
        outcome.failure(),
        Some(&Error::ClaimInvalid(ClaimInvalid::NotAMember {
            member: "Mallory".into()
        }))
    );
    assert_eq!(outcome.transcript().rounds_started(), 0);
}

#[test]
fn shell_input_errors() {
    assert_eq!(
        ClaimRequest::parse("iris", "blue"),
        Err(Error::UnsupportedClaim("iris".into()))
    );
    assert!(matches!(
        ClaimRequest::parse("age", "last year"),
        Err(Error::ClaimInvalid(ClaimInvalid::MalformedPayload { .. }))
    ));
}

#[test]
fn derivation_is_idempotent() {
    let group = demo_group();
    let first = derive_password(&group, DEMO_PASSWORD).unwrap();
    let second = derive_password(&group, DEMO_PASSWORD).unwrap();
    assert_eq!(PublicKey::publish(&group, &first), PublicKey::publish(&group, &second));
}

#[test]
fn correctness_identity() {
    // g^((k + e x) mod q) == g^k (g^x)^e mod p
    let group = demo_group();
    let mut rng = ChaCha8Rng::seed_from_u64(1234567890);
    for _ in 0..100 {
        let k = group.random_exponent(&mut rng);
        let e = group.random_exponent(&mut rng);
        let x = group.random_exponent(&mut rng);
        let s = group.add_exponents(&k, &group.mul_exponents(&e, &x));
        let public_key = group.power_of_generator(&x);
        assert_eq!(
            group.power_of_generator(&s),
            group.combine(&group.power_of_generator(&k), &group.power(&public_key, &e))
        );
    }
}

#[test]
fn soundness() {
    let group = demo_group();
    let witness = derive_password(&group, DEMO_PASSWORD).unwrap();
    let public_key = PublicKey::publish(&group, &witness);
    let orchestrator = ProofOrchestrator::new(&group, ProofConfig::new(1).unwrap());

    let mut rng = ChaCha8Rng::seed_from_u64(1234567890);
    let trials = 2000;
    let mut passes = 0;
    for _ in 0..trials {
        let guess = rng.gen_range(1..10006u64);
        if guess == 3449 {
            continue;
        }
        let impostor = Witness::new(&group, &Uint::from_u64(guess)).unwrap();
        if orchestrator.run(&mut rng, &impostor, &public_key).accepted() {
            passes += 1;
        }
    }
    // A wrong witness passes a round with probability well below 1/1000 for this group.
    assert!(passes <= 10, "{passes} of {trials} wrong witnesses were accepted");
}
