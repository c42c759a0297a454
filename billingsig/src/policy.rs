// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Receipt verification policy.
//!
//! Two terminal paths, no retries:
//! 1) Payload, key or signature missing: accept only a sandbox sentinel with the bypass
//!    enabled, otherwise reject.
//! 2) Everything present: decode the key, then verify the signature.
//!
//! A key that cannot be decoded is a setup error and is returned as `Err` unless the
//! settings ask for it to be folded into a rejection.

use std::sync::Arc;

use billingsig_validation::{decode_public_key, verify_with, KeyError, PublicKey, ValidationResult, LOG_TAG};

use crate::{TestSentinel, VerificationSettings};

/// How a receipt was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Required data was missing and the receipt id is an allowed sandbox sentinel.
    SentinelBypass(TestSentinel),
    /// Required data was missing.
    MissingData,
    /// The public key was unusable and the settings fold that into a rejection.
    InvalidKey(KeyError),
    /// The signature was checked.
    Checked(ValidationResult),
}

impl PurchaseOutcome {
    pub fn is_accepted(&self) -> bool {
        match self {
            PurchaseOutcome::SentinelBypass(_) => true,
            PurchaseOutcome::MissingData | PurchaseOutcome::InvalidKey(_) => false,
            PurchaseOutcome::Checked(r) => r.is_valid,
        }
    }
}

/// Verify one purchase receipt.
///
/// * `receipt_id` - purchase identifier, only consulted for sandbox sentinel matching.
/// * `public_key_b64` - Base64 X.509 SubjectPublicKeyInfo from the store console.
/// * `signed_payload` - receipt JSON exactly as delivered by the backend.
/// * `signature_b64` - Base64 signature delivered alongside the receipt.
///
/// Returns `Ok(true)` for an authentic receipt (or an allowed sentinel), `Ok(false)` for
/// anything else, and `Err` only when the public key itself is unusable.
pub fn verify_purchase(
    settings: &VerificationSettings,
    receipt_id: &str,
    public_key_b64: &str,
    signed_payload: &str,
    signature_b64: &str,
) -> Result<bool, KeyError> {
    verify_purchase_detailed(settings, receipt_id, public_key_b64, signed_payload, signature_b64)
        .map(|outcome| outcome.is_accepted())
}

/// [`verify_purchase`], reporting which path decided the receipt.
pub fn verify_purchase_detailed(
    settings: &VerificationSettings,
    receipt_id: &str,
    public_key_b64: &str,
    signed_payload: &str,
    signature_b64: &str,
) -> Result<PurchaseOutcome, KeyError> {
    verify_purchase_with(
        settings,
        receipt_id,
        public_key_b64,
        signed_payload,
        signature_b64,
        |encoded| decode_public_key(encoded).map(Arc::new),
    )
}

/// Policy core with a pluggable key source, shared with [`crate::PurchaseVerifier`].
pub(crate) fn verify_purchase_with<F>(
    settings: &VerificationSettings,
    receipt_id: &str,
    public_key_b64: &str,
    signed_payload: &str,
    signature_b64: &str,
    resolve_key: F,
) -> Result<PurchaseOutcome, KeyError>
where
    F: FnOnce(&str) -> Result<Arc<PublicKey>, KeyError>,
{
    if signed_payload.is_empty() || public_key_b64.is_empty() || signature_b64.is_empty() {
        return Ok(missing_data_outcome(settings, receipt_id));
    }

    let key = match resolve_key(public_key_b64) {
        Ok(k) => k,
        Err(e) if settings.reject_invalid_keys => {
            tracing::error!(target: LOG_TAG, error = %e, "Purchase verification failed: unusable public key.");
            return Ok(PurchaseOutcome::InvalidKey(e));
        }
        Err(e) => return Err(e),
    };

    Ok(PurchaseOutcome::Checked(verify_with(
        settings.signature_algorithm,
        &key,
        signed_payload.as_bytes(),
        signature_b64,
    )))
}

fn missing_data_outcome(settings: &VerificationSettings, receipt_id: &str) -> PurchaseOutcome {
    if settings.allow_test_sentinels {
        if let Some(sentinel) = TestSentinel::from_receipt_id(receipt_id) {
            // Error level: this path skips every cryptographic check.
            tracing::error!(target: LOG_TAG, %sentinel, "Testing static response: {receipt_id}");
            return PurchaseOutcome::SentinelBypass(sentinel);
        }
    }
    tracing::error!(target: LOG_TAG, "Purchase verification failed: missing data.");
    PurchaseOutcome::MissingData
}
