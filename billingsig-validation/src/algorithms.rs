// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

use crate::KeyError;

/// Key families understood by the key loader.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyAlgorithm {
    /// RSA (`rsaEncryption`, OID 1.2.840.113549.1.1.1).
    #[default]
    Rsa,
}

impl KeyAlgorithm {
    /// SubjectPublicKeyInfo algorithm OID for this family.
    pub const fn oid(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "1.2.840.113549.1.1.1",
        }
    }

    /// Key factory name, e.g. `"RSA"`.
    pub const fn name(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
        }
    }

    /// Resolve a key factory name. Unknown names are an environment defect.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name {
            "RSA" => Ok(KeyAlgorithm::Rsa),
            other => Err(KeyError::AlgorithmUnavailable(format!("no key factory for '{other}'"))),
        }
    }
}

/// Signature schemes accepted for receipts.
///
/// Billing backends sign receipts with SHA1withRSA, so that is the default. SHA-1 stays
/// here only to match the issuer; new issuers should pick [`SignatureAlgorithm::Sha256WithRsa`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SignatureAlgorithm {
    /// SHA-1 digest, RSASSA-PKCS1-v1_5.
    #[default]
    Sha1WithRsa,
    /// SHA-256 digest, RSASSA-PKCS1-v1_5.
    Sha256WithRsa,
}

impl SignatureAlgorithm {
    /// Standard algorithm name, e.g. `"SHA1withRSA"`.
    pub const fn name(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1WithRsa => "SHA1withRSA",
            SignatureAlgorithm::Sha256WithRsa => "SHA256withRSA",
        }
    }

    /// The key family this scheme verifies with.
    pub const fn key_algorithm(self) -> KeyAlgorithm {
        match self {
            SignatureAlgorithm::Sha1WithRsa | SignatureAlgorithm::Sha256WithRsa => KeyAlgorithm::Rsa,
        }
    }

    /// Resolve a standard algorithm name.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name {
            "SHA1withRSA" => Ok(SignatureAlgorithm::Sha1WithRsa),
            "SHA256withRSA" => Ok(SignatureAlgorithm::Sha256WithRsa),
            other => Err(KeyError::AlgorithmUnavailable(format!("no signature provider for '{other}'"))),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
