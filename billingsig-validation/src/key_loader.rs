// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Public key decoding.
//!
//! Store consoles publish the receipt verification key as Base64 text of a DER X.509
//! SubjectPublicKeyInfo. Decoding is strict: the SPKI must parse completely and name the
//! RSA algorithm before the RSA backend sees it.
//!
//! Failures are logged once here and returned as [`KeyError`]; callers treat them as a
//! broken integration rather than a bad receipt.

use rsa::pkcs8::DecodePublicKey as _;
use rsa::traits::PublicKeyParts as _;
use rsa::RsaPublicKey;
use x509_parser::prelude::FromDer as _;

use crate::{base64_text, KeyAlgorithm, KeyError, LOG_TAG};

/// A decoded receipt verification key.
///
/// Immutable once built; clone it freely or share it between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: RsaPublicKey,
}

impl PublicKey {
    pub fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Rsa
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.key.size() * 8
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self { key }
    }
}

/// Decode a Base64 (standard alphabet) X.509 SubjectPublicKeyInfo into an RSA key.
pub fn decode_public_key(encoded: &str) -> Result<PublicKey, KeyError> {
    let result = base64_text::decode(encoded)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("bad Base64: {e}")))
        .and_then(|der| parse_rsa_spki(&der));

    match result {
        Ok(key) => Ok(PublicKey { key }),
        Err(e) => {
            tracing::error!(target: LOG_TAG, error = %e, public_key = %encoded, "public key decoding failed");
            Err(e)
        }
    }
}

/// Decode a DER X.509 SubjectPublicKeyInfo into an RSA key.
pub fn decode_public_key_der(der: &[u8]) -> Result<PublicKey, KeyError> {
    match parse_rsa_spki(der) {
        Ok(key) => Ok(PublicKey { key }),
        Err(e) => {
            tracing::error!(target: LOG_TAG, error = %e, der_len = der.len(), "public key decoding failed");
            Err(e)
        }
    }
}

fn parse_rsa_spki(der: &[u8]) -> Result<RsaPublicKey, KeyError> {
    let (rest, spki) = x509_parser::x509::SubjectPublicKeyInfo::from_der(der)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("bad SubjectPublicKeyInfo: {e}")))?;
    if !rest.is_empty() {
        return Err(KeyError::InvalidKeyFormat(format!(
            "{} trailing bytes after SubjectPublicKeyInfo",
            rest.len()
        )));
    }

    let expected = KeyAlgorithm::Rsa.oid();
    let oid = spki.algorithm.algorithm.to_string();
    if oid != expected {
        return Err(KeyError::InvalidKeyFormat(format!(
            "unexpected public key algorithm OID: expected {expected}, got {oid}"
        )));
    }

    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| KeyError::InvalidKeyFormat(format!("bad RSA public key: {e}")))
}
