// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `billingsig-validation` integration tests.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub use billingsig_test_utils::vectors::*;
pub use billingsig_test_utils::FIXTURE_PUBLIC_KEY_BASE64;

pub fn b64_decode(text: &str) -> Vec<u8> {
    STANDARD.decode(text).unwrap()
}

pub fn b64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Flip one bit of the byte at `index` in a Base64 blob.
pub fn flip_byte(encoded: &str, index: usize) -> String {
    let mut bytes = b64_decode(encoded);
    bytes[index] ^= 0x01;
    b64_encode(&bytes)
}
