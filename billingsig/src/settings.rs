// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use billingsig_validation::SignatureAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationSettings {
    /// If true, receipts for the reserved sandbox product ids are accepted when the
    /// payload, key or signature is missing. Never enable this in a released build.
    pub(crate) allow_test_sentinels: bool,

    /// Scheme the billing backend signs receipts with.
    pub(crate) signature_algorithm: SignatureAlgorithm,

    /// If true, an undecodable public key rejects the receipt instead of returning
    /// [`billingsig_validation::KeyError`] to the caller.
    pub(crate) reject_invalid_keys: bool,
}

impl VerificationSettings {
    /// Settings for the current build profile: the sentinel bypass follows
    /// `debug_assertions`, everything else is default.
    pub fn for_build() -> Self {
        Self::default().with_test_sentinels(cfg!(debug_assertions))
    }

    /// Enable or disable the sandbox sentinel bypass.
    pub fn with_test_sentinels(mut self, allow: bool) -> Self {
        self.allow_test_sentinels = allow;
        self
    }

    /// Verify with a scheme other than SHA1withRSA.
    pub fn with_signature_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = algorithm;
        self
    }

    /// Treat undecodable key material as a rejected receipt.
    pub fn rejecting_invalid_keys(mut self) -> Self {
        self.reject_invalid_keys = true;
        self
    }

    pub fn allow_test_sentinels(&self) -> bool {
        self.allow_test_sentinels
    }

    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.signature_algorithm
    }

    pub fn reject_invalid_keys(&self) -> bool {
        self.reject_invalid_keys
    }
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            allow_test_sentinels: false,
            signature_algorithm: SignatureAlgorithm::default(),
            reject_invalid_keys: false,
        }
    }
}
