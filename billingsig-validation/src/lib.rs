// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key decoding and signature verification for store-issued billing receipts.
//!
//! Two layers live here:
//! - [`decode_public_key`] turns the Base64 X.509 SubjectPublicKeyInfo handed out by the
//!   store console into an RSA [`PublicKey`].
//! - [`verify`] / [`verify_with`] check a Base64 signature over the exact receipt payload.
//!
//! Key problems are configuration errors and come back as [`KeyError`]. Everything that can
//! go wrong with an individual receipt is folded into a rejection.

pub mod algorithms;
pub mod error;
pub mod key_loader;
pub mod signature_verifier;
pub mod validation_result;

mod base64_text;

pub use algorithms::{KeyAlgorithm, SignatureAlgorithm};
pub use error::KeyError;
pub use key_loader::{decode_public_key, decode_public_key_der, PublicKey};
pub use signature_verifier::{verify, verify_with};
pub use validation_result::{FailureCode, ValidationFailure, ValidationResult};

/// Target used for every log event emitted by the billingsig crates.
pub const LOG_TAG: &str = "billingsig";
