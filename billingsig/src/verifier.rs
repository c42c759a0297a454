// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use billingsig_validation::KeyError;

use crate::policy::{verify_purchase_with, PurchaseOutcome};
use crate::{KeyCache, VerificationSettings};

/// [`crate::verify_purchase`] bound to fixed settings, with decoded keys cached.
///
/// `Send + Sync`; share one instance across purchase flows.
#[derive(Debug, Default)]
pub struct PurchaseVerifier {
    settings: VerificationSettings,
    keys: KeyCache,
}

impl PurchaseVerifier {
    pub fn new(settings: VerificationSettings) -> Self {
        Self {
            settings,
            keys: KeyCache::new(),
        }
    }

    pub fn settings(&self) -> &VerificationSettings {
        &self.settings
    }

    /// Same contract as [`crate::verify_purchase`].
    pub fn verify_purchase(
        &self,
        receipt_id: &str,
        public_key_b64: &str,
        signed_payload: &str,
        signature_b64: &str,
    ) -> Result<bool, KeyError> {
        self.verify_purchase_detailed(receipt_id, public_key_b64, signed_payload, signature_b64)
            .map(|outcome| outcome.is_accepted())
    }

    /// Same contract as [`crate::verify_purchase_detailed`].
    pub fn verify_purchase_detailed(
        &self,
        receipt_id: &str,
        public_key_b64: &str,
        signed_payload: &str,
        signature_b64: &str,
    ) -> Result<PurchaseOutcome, KeyError> {
        verify_purchase_with(
            &self.settings,
            receipt_id,
            public_key_b64,
            signed_payload,
            signature_b64,
            |encoded| self.keys.get_or_decode(encoded),
        )
    }

    /// Number of distinct keys decoded so far.
    pub fn cached_keys(&self) -> usize {
        self.keys.len()
    }
}
