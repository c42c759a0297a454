// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Purchase receipt verification facade.
//!
//! This crate is the primary entry point for purchase flows: [`verify_purchase`] takes the
//! receipt as delivered by the billing backend and returns an accept/reject verdict.
//!
//! Design note: key decoding and signature checks live in `billingsig-validation` and are
//! re-exported here so callers only depend on one crate.

mod key_cache;
mod policy;
mod sentinel;
mod settings;
mod verifier;

pub use key_cache::KeyCache;
pub use policy::{verify_purchase, verify_purchase_detailed, PurchaseOutcome};
pub use sentinel::TestSentinel;
pub use settings::VerificationSettings;
pub use verifier::PurchaseVerifier;

pub use billingsig_validation::{
    decode_public_key, verify, verify_with, FailureCode, KeyAlgorithm, KeyError, PublicKey,
    SignatureAlgorithm, ValidationFailure, ValidationResult, LOG_TAG,
};
