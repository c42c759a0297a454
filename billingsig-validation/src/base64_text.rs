// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Base64 text as it arrives from store consoles and billing responses.
//!
//! Keys copied from a console and signatures produced by line-wrapping encoders may carry
//! CR/LF and spaces, and some integrations strip the trailing `=`. The alphabet is the
//! standard one. Padding is either complete or absent; a partial pad is rejected.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine as _;

pub(crate) fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        decode_compact(&compact)
    } else {
        decode_compact(text)
    }
}

fn decode_compact(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    if text.ends_with('=') {
        STANDARD.decode(text)
    } else {
        STANDARD_NO_PAD.decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_text() {
        assert_eq!(decode("aGVs\r\nbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn decodes_unpadded_text() {
        assert_eq!(decode("aGVsbG8").unwrap(), b"hello");
        assert_eq!(decode("aGk").unwrap(), b"hi");
        assert_eq!(decode("aGk=").unwrap(), b"hi");
    }

    #[test]
    fn rejects_partial_padding() {
        assert_eq!(decode("aA==").unwrap(), b"h");
        assert!(decode("aA=").is_err());
    }

    #[test]
    fn rejects_url_safe_alphabet() {
        // 0xfb 0xff encodes to "-_8=" in the URL-safe alphabet.
        assert!(decode("-_8=").is_err());
        assert_eq!(decode("+/8=").unwrap(), vec![0xfb, 0xff]);
    }
}
