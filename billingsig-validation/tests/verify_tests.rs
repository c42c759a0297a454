// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification tests.
//!
//! Covers the recorded SHA1withRSA vector, single-byte mutations of payload and signature,
//! wrong issuer keys and the deterministic failure codes.

mod common;

use billingsig_test_utils::{generate_key_pair, public_key_base64, sign_data, sign_sha1, sign_sha256};
use billingsig_validation::{decode_public_key, verify, verify_with, FailureCode, PublicKey, SignatureAlgorithm};
use common::*;

fn fixture_key() -> PublicKey {
    decode_public_key(FIXTURE_PUBLIC_KEY_BASE64).unwrap()
}

#[test]
fn recorded_signature_verifies() {
    assert!(verify(&fixture_key(), PAYLOAD, PAYLOAD_SIGNATURE));
}

#[test]
fn success_reports_key_size() {
    let res = verify_with(
        SignatureAlgorithm::Sha1WithRsa,
        &fixture_key(),
        PAYLOAD.as_bytes(),
        PAYLOAD_SIGNATURE,
    );
    assert!(res.is_valid);
    assert!(res.failure.is_none());
    assert_eq!(res.algorithm, SignatureAlgorithm::Sha1WithRsa);
    assert_eq!(res.key_bits, Some(2048));
}

#[test]
fn line_wrapped_signature_verifies() {
    let wrapped = billingsig_test_utils::wrap_base64(PAYLOAD_SIGNATURE);
    assert!(verify(&fixture_key(), PAYLOAD, &wrapped));
}

#[test]
fn unpadded_signature_verifies() {
    let unpadded = PAYLOAD_SIGNATURE.trim_end_matches('=');
    assert_ne!(unpadded, PAYLOAD_SIGNATURE);
    assert!(verify(&fixture_key(), PAYLOAD, unpadded));
}

#[test]
fn partially_padded_signature_is_rejected() {
    let partial = &PAYLOAD_SIGNATURE[..PAYLOAD_SIGNATURE.len() - 1];
    assert!(partial.ends_with('='));
    let res = verify_with(SignatureAlgorithm::Sha1WithRsa, &fixture_key(), PAYLOAD.as_bytes(), partial);
    assert!(!res.is_valid);
    assert_eq!(res.error_code(), Some(FailureCode::BadSignatureEncoding));
    assert!(res.key_bits.is_none());
}

#[test]
fn truncated_signature_text_is_rejected() {
    let truncated = &PAYLOAD_SIGNATURE[..PAYLOAD_SIGNATURE.len() - 1];
    assert!(!verify(&fixture_key(), PAYLOAD, truncated));
}

#[test]
fn any_payload_byte_change_is_rejected() {
    let key = fixture_key();
    let bytes = PAYLOAD.as_bytes();
    for i in 0..bytes.len() {
        let mut mutated = bytes.to_vec();
        // Stay within printable ASCII so the payload remains valid UTF-8.
        mutated[i] = if mutated[i] == b'a' { b'b' } else { b'a' };
        let mutated = String::from_utf8(mutated).unwrap();
        assert!(!verify(&key, &mutated, PAYLOAD_SIGNATURE), "accepted payload mutated at {i}");
    }
}

#[test]
fn any_signature_byte_change_is_rejected() {
    let key = fixture_key();
    let len = b64_decode(PAYLOAD_SIGNATURE).len();
    assert_eq!(len, 256);
    for i in 0..len {
        let mutated = flip_byte(PAYLOAD_SIGNATURE, i);
        assert!(!verify(&key, PAYLOAD, &mutated), "accepted signature mutated at {i}");
    }
}

#[test]
fn payload_whitespace_is_significant() {
    let reserialized = r#"{"orderId": "X", "productId": "sku1"}"#;
    assert!(!verify(&fixture_key(), reserialized, PAYLOAD_SIGNATURE));
}

#[test]
fn signature_from_other_key_pair_is_rejected() {
    let (other_private, _) = generate_key_pair(2048).unwrap();
    let sig = sign_sha1(&other_private, PAYLOAD);
    assert!(!verify(&fixture_key(), PAYLOAD, &sig));
}

#[test]
fn valid_signature_against_wrong_public_key_is_rejected() {
    let (_, other_public) = generate_key_pair(2048).unwrap();
    let other_key = decode_public_key(&public_key_base64(&other_public).unwrap()).unwrap();
    assert!(!verify(&other_key, PAYLOAD, PAYLOAD_SIGNATURE));
}

#[test]
fn round_trip_through_fixture_signer() {
    let payload = r#"{"orderId":"GPA.1234","productId":"coins_100","purchaseState":0}"#;
    let sig = sign_data(payload).unwrap();
    assert!(verify(&fixture_key(), payload, &sig));
    assert!(!verify(&fixture_key(), r#"{"orderId":"GPA.1234"}"#, &sig));
}

#[test]
fn non_ascii_payload_is_hashed_as_utf8() {
    let payload = r#"{"productId":"münzen_100","title":"コイン"}"#;
    let sig = sign_data(payload).unwrap();
    assert!(verify(&fixture_key(), payload, &sig));
}

#[test]
fn malformed_base64_signature_reports_encoding_failure() {
    let res = verify_with(SignatureAlgorithm::Sha1WithRsa, &fixture_key(), PAYLOAD.as_bytes(), "%%%");
    assert!(!res.is_valid);
    assert_eq!(res.error_code(), Some(FailureCode::BadSignatureEncoding));
}

#[test]
fn short_signature_reports_bad_signature() {
    let short = b64_encode(&b64_decode(PAYLOAD_SIGNATURE)[..255]);
    let res = verify_with(SignatureAlgorithm::Sha1WithRsa, &fixture_key(), PAYLOAD.as_bytes(), &short);
    assert!(!res.is_valid);
    assert_eq!(res.error_code(), Some(FailureCode::BadSignature));
}

#[test]
fn empty_signature_is_rejected() {
    let res = verify_with(SignatureAlgorithm::Sha1WithRsa, &fixture_key(), PAYLOAD.as_bytes(), "");
    assert!(!res.is_valid);
    assert_eq!(res.error_code(), Some(FailureCode::BadSignature));
}

#[test]
fn algorithm_strategies_do_not_cross_verify() {
    let (private_key, public_key) = generate_key_pair(2048).unwrap();
    let key = decode_public_key(&public_key_base64(&public_key).unwrap()).unwrap();

    let sha1_sig = sign_sha1(&private_key, PAYLOAD);
    let sha256_sig = sign_sha256(&private_key, PAYLOAD);

    assert!(verify_with(SignatureAlgorithm::Sha1WithRsa, &key, PAYLOAD.as_bytes(), &sha1_sig).is_valid);
    assert!(verify_with(SignatureAlgorithm::Sha256WithRsa, &key, PAYLOAD.as_bytes(), &sha256_sig).is_valid);

    let crossed = verify_with(SignatureAlgorithm::Sha256WithRsa, &key, PAYLOAD.as_bytes(), &sha1_sig);
    assert!(!crossed.is_valid);
    assert_eq!(crossed.error_code(), Some(FailureCode::BadSignature));
    assert!(!verify_with(SignatureAlgorithm::Sha1WithRsa, &key, PAYLOAD.as_bytes(), &sha256_sig).is_valid);
}
