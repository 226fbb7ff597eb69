//! Interactive console demo: pick a claim, enter it, watch the proof run.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::OsRng;
use sigma_claims::{
    params::demo::{demo_group, demo_policy, DEMO_MEMBERS, DEMO_MIN_AGE, DEMO_PASSWORD, DEMO_RANGE},
    ClaimDispatcher, ClaimKind, ClaimOutcome, ClaimRequest, Event, PasswordClaimContext, ProofConfig, Verdict,
};
use tracing_subscriber::EnvFilter;

const SECONDS_PER_YEAR: u64 = 31_556_952;

fn current_year() -> i32 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    1970 + i32::try_from(seconds / SECONDS_PER_YEAR).unwrap_or_default()
}

fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render_event(event: &Event) {
    match event {
        Event::Parameters {
            modulus,
            generator,
            order,
            public_key,
        } => {
            println!("Public parameters: p={modulus}, g={generator}, q={order}");
            println!("Verifier's public key: {public_key}");
        }
        Event::RoundStarted { round } => println!("\n--- Round {round} ---"),
        Event::Commitment { commitment, .. } => println!("Prover sends commitment: t = {commitment}"),
        Event::Challenge { challenge, .. } => println!("Verifier sends challenge: e = {challenge}"),
        Event::Response { response, .. } => println!("Prover responds: s = (k + e * x) mod q = {response}"),
        Event::Verification { left, right, .. } => {
            println!("Verifier checks: g^s mod p = {left}");
            println!("          vs. t * X^e mod p = {right}");
        }
        Event::RoundPassed { .. } => println!("Round verified."),
        Event::RoundFailed { .. } => println!("Round FAILED to verify!"),
        Event::ClaimRejected { reason } => println!("Claim rejected: {reason}"),
    }
}

fn render_outcome(kind: ClaimKind, outcome: &ClaimOutcome) {
    println!("\nRunning the {kind} proof...");
    for event in outcome.transcript() {
        render_event(event);
    }
    match outcome.verdict() {
        Verdict::Accepted => println!("\nSUCCESS: the {kind} claim was proven."),
        Verdict::ProofFailed => println!("\nFAILED: the proof is invalid."),
        Verdict::ClaimInvalid => println!("\nFAILED: the claim does not hold, no proof was attempted."),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let group = demo_group();
    let password = PasswordClaimContext::setup(&group, DEMO_PASSWORD)?;
    let year = current_year();
    let dispatcher = ClaimDispatcher::new(group, demo_policy(year)?, password, ProofConfig::default())?;

    println!("-------------------------------------------------------------");
    println!("Interactive zero-knowledge claims demo");
    println!("Prove a claim to the verifier without revealing the secret behind it.");
    println!("-------------------------------------------------------------");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        println!("\nClaims:");
        for (index, kind) in ClaimKind::ALL.iter().enumerate() {
            println!("  {}. {kind}", index + 1);
        }
        println!("  q. quit");

        let Some(choice) = prompt(&mut input, "Choose a claim: ")? else {
            break;
        };
        let kind = match choice.trim() {
            "q" | "quit" => break,
            "1" => ClaimKind::Password,
            "2" => ClaimKind::Age,
            "3" => ClaimKind::Range,
            "4" => ClaimKind::Membership,
            other => match other.parse::<ClaimKind>() {
                Ok(kind) => kind,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
        };

        let question = match kind {
            ClaimKind::Password => {
                println!("Hint: The correct password is '{DEMO_PASSWORD}'. Try it after a wrong attempt!");
                "Enter your password to attempt authentication: ".to_string()
            }
            ClaimKind::Age => format!("Enter your birth year (must be at least {DEMO_MIN_AGE} in {year}): "),
            ClaimKind::Range => format!(
                "Enter the secret number (between {} and {}): ",
                DEMO_RANGE.0, DEMO_RANGE.1
            ),
            ClaimKind::Membership => format!("Enter your name (one of {}): ", DEMO_MEMBERS.join(", ")),
        };
        let Some(payload) = prompt(&mut input, &question)? else {
            break;
        };

        match ClaimRequest::parse(kind.as_str(), &payload) {
            Ok(request) => render_outcome(kind, &dispatcher.evaluate_claim(&mut OsRng, &request)),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
