// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Receipt signature verification.
//!
//! The verifier fails closed: malformed Base64, signatures of the wrong size for the key,
//! and cryptographic mismatches all produce a rejection plus one error-level log event.
//! Success is silent.
//!
//! The signed bytes are the receipt payload exactly as received. `&str` guarantees UTF-8,
//! so the payload is hashed as `payload.as_bytes()` with no re-serialization.

use rsa::pkcs1v15;
use sha1::Sha1;
use sha2::Sha256;
use signature::Verifier;

use crate::validation_result::FailureCode;
use crate::{base64_text, PublicKey, SignatureAlgorithm, ValidationResult, LOG_TAG};

/// Verify a Base64 SHA1withRSA signature over `signed_payload`.
///
/// Returns `true` only when the signature checks out against `public_key`.
pub fn verify(public_key: &PublicKey, signed_payload: &str, encoded_signature: &str) -> bool {
    verify_with(
        SignatureAlgorithm::default(),
        public_key,
        signed_payload.as_bytes(),
        encoded_signature,
    )
    .is_valid
}

/// Verify a Base64 signature over `signed_payload` with an explicit scheme.
pub fn verify_with(
    algorithm: SignatureAlgorithm,
    public_key: &PublicKey,
    signed_payload: &[u8],
    encoded_signature: &str,
) -> ValidationResult {
    let signature_bytes = match base64_text::decode(encoded_signature) {
        Ok(b) => b,
        Err(e) => {
            return reject(
                algorithm,
                FailureCode::BadSignatureEncoding,
                format!("bad signature encoding: {e}"),
            )
        }
    };

    match verify_signature(algorithm, public_key, signed_payload, &signature_bytes) {
        Ok(()) => ValidationResult::accepted(algorithm, public_key.bits()),
        Err(msg) => reject(algorithm, FailureCode::BadSignature, msg),
    }
}

fn reject(algorithm: SignatureAlgorithm, code: FailureCode, message: String) -> ValidationResult {
    tracing::error!(target: LOG_TAG, code = %code, algorithm = %algorithm, "{message}");
    ValidationResult::rejected(algorithm, code, message)
}

/// Dispatch to the per-scheme verifier.
fn verify_signature(
    algorithm: SignatureAlgorithm,
    public_key: &PublicKey,
    msg: &[u8],
    sig: &[u8],
) -> Result<(), String> {
    match algorithm {
        SignatureAlgorithm::Sha1WithRsa => verify_rsa_pkcs1_sha1(public_key, msg, sig),
        SignatureAlgorithm::Sha256WithRsa => verify_rsa_pkcs1_sha256(public_key, msg, sig),
    }
}

/// Verify SHA1withRSA (RSASSA-PKCS1-v1_5 + SHA-1).
fn verify_rsa_pkcs1_sha1(key: &PublicKey, msg: &[u8], sig: &[u8]) -> Result<(), String> {
    let vk = pkcs1v15::VerifyingKey::<Sha1>::new(key.as_rsa().clone());
    let signature = pkcs1v15::Signature::try_from(sig)
        .map_err(|e| format!("bad SHA1withRSA signature bytes: {e}"))?;
    vk.verify(msg, &signature)
        .map_err(|_| "signature verification failed".to_string())
}

/// Verify SHA256withRSA (RSASSA-PKCS1-v1_5 + SHA-256).
fn verify_rsa_pkcs1_sha256(key: &PublicKey, msg: &[u8], sig: &[u8]) -> Result<(), String> {
    let vk = pkcs1v15::VerifyingKey::<Sha256>::new(key.as_rsa().clone());
    let signature = pkcs1v15::Signature::try_from(sig)
        .map_err(|e| format!("bad SHA256withRSA signature bytes: {e}"))?;
    vk.verify(msg, &signature)
        .map_err(|_| "signature verification failed".to_string())
}
