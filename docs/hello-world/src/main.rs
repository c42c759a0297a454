// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Consumer example for the billingsig crates.
//!
//! `verify` runs the same policy a purchase flow would. `sign` mints a receipt signature
//! with the published fixture key so the verify path can be tried end to end.

use billingsig::{verify_purchase_detailed, PurchaseOutcome, SignatureAlgorithm, ValidationResult, VerificationSettings};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Read a file to a string or exit with a clear error.
fn read(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("failed to read {path}: {e}");
        std::process::exit(2);
    })
}

fn print_result(r: &ValidationResult) {
    println!("is_valid: {}", if r.is_valid { "true" } else { "false" });
    println!("algorithm: {}", r.algorithm);
    if let Some(bits) = r.key_bits {
        println!("key_bits: {bits}");
    }
    if let Some(f) = &r.failure {
        println!("failure: {}: {}", f.code, f.message);
    }
}

fn print_outcome(outcome: &PurchaseOutcome) {
    match outcome {
        PurchaseOutcome::SentinelBypass(sentinel) => println!("sentinel: {sentinel}"),
        PurchaseOutcome::MissingData => println!("missing data"),
        PurchaseOutcome::InvalidKey(e) => println!("invalid key: {e}"),
        PurchaseOutcome::Checked(r) => print_result(r),
    }
}

fn get_arg_value(args: &[String], name: &str) -> Option<String> {
    let mut i = 0usize;
    while i < args.len() {
        if args[i] == name {
            return args.get(i + 1).cloned();
        }
        i += 1;
    }
    None
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn usage_and_exit(exe: &str) -> ! {
    eprintln!("Usage:");
    eprintln!(
        "  {exe} verify --public-key <file> --payload <file> --signature <file> [--receipt-id <id>] [--algorithm <name>] [--allow-test-sentinels] [--reject-invalid-keys]"
    );
    eprintln!("  {exe} sign --payload <file>");
    std::process::exit(2);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let exe = args.first().map(|s| s.as_str()).unwrap_or("billingsig_hello_world");
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("");
    if mode.is_empty() {
        usage_and_exit(exe);
    }

    if mode == "verify" {
        let key_path = get_arg_value(&args, "--public-key").unwrap_or_default();
        let payload_path = get_arg_value(&args, "--payload").unwrap_or_default();
        let signature_path = get_arg_value(&args, "--signature").unwrap_or_default();
        let receipt_id = get_arg_value(&args, "--receipt-id").unwrap_or_default();
        let algorithm = get_arg_value(&args, "--algorithm").unwrap_or_default();

        // Missing files are allowed: the policy decides what empty inputs mean.
        let public_key = if key_path.is_empty() { String::new() } else { read(&key_path) };
        let payload = if payload_path.is_empty() { String::new() } else { read(&payload_path) };
        let signature = if signature_path.is_empty() { String::new() } else { read(&signature_path) };

        let mut settings = VerificationSettings::default()
            .with_test_sentinels(has_flag(&args, "--allow-test-sentinels"));
        if has_flag(&args, "--reject-invalid-keys") {
            settings = settings.rejecting_invalid_keys();
        }
        if !algorithm.is_empty() {
            let alg = SignatureAlgorithm::from_name(&algorithm).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(2);
            });
            settings = settings.with_signature_algorithm(alg);
        }

        let outcome = verify_purchase_detailed(
            &settings,
            &receipt_id,
            public_key.trim(),
            &payload,
            signature.trim(),
        )
        .unwrap_or_else(|e| {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        });
        print_outcome(&outcome);

        let verdict = outcome.is_accepted();
        println!("verified: {verdict}");
        std::process::exit(if verdict { 0 } else { 3 });
    }

    if mode == "sign" {
        let payload_path = get_arg_value(&args, "--payload").unwrap_or_default();
        if payload_path.is_empty() {
            usage_and_exit(exe);
        }

        let payload = read(&payload_path);
        let signature = billingsig_test_utils::sign_data(&payload).unwrap_or_else(|e| {
            eprintln!("signing failed: {e}");
            std::process::exit(1);
        });
        println!("{signature}");
        eprintln!("public key: {}", billingsig_test_utils::FIXTURE_PUBLIC_KEY_BASE64);
        std::process::exit(0);
    }

    usage_and_exit(exe);
}
