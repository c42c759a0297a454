// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Verifier outcome with enough detail for diagnostics.
//!
//! The boolean entry points only expose `is_valid`; this keeps the reason a receipt was
//! rejected available to tests and tooling.

use std::fmt;

use crate::SignatureAlgorithm;

/// Which check rejected a receipt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureCode {
    /// The Base64 signature text could not be decoded.
    BadSignatureEncoding,
    /// Signature bytes were malformed for the key or did not match the payload.
    BadSignature,
}

impl FailureCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureCode::BadSignatureEncoding => "BAD_SIGNATURE_ENCODING",
            FailureCode::BadSignature => "BAD_SIGNATURE",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub code: FailureCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Scheme the receipt was checked against.
    pub algorithm: SignatureAlgorithm,
    /// Modulus size of the verifying key; set when verification ran to completion.
    pub key_bits: Option<usize>,
    /// Set exactly when `is_valid` is false.
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    pub(crate) fn accepted(algorithm: SignatureAlgorithm, key_bits: usize) -> Self {
        Self {
            is_valid: true,
            algorithm,
            key_bits: Some(key_bits),
            failure: None,
        }
    }

    pub(crate) fn rejected(algorithm: SignatureAlgorithm, code: FailureCode, message: String) -> Self {
        Self {
            is_valid: false,
            algorithm,
            key_bits: None,
            failure: Some(ValidationFailure { code, message }),
        }
    }

    pub fn error_code(&self) -> Option<FailureCode> {
        self.failure.as_ref().map(|f| f.code)
    }
}
