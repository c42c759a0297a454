// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Configuration-fatal errors.
//!
//! Anything in this enum means the integration is broken (bad key material, missing
//! algorithm), not that a particular receipt is forged. Receipt-level failures never
//! surface as errors; see [`crate::signature_verifier`].

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The encoded key is not valid Base64, not a SubjectPublicKeyInfo, or not an RSA key.
    #[error("invalid public key format: {0}")]
    InvalidKeyFormat(String),

    /// The requested key or signature algorithm is not provided by this build.
    #[error("algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),
}
