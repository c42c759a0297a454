// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test-only receipt signing.
//!
//! This crate exists to keep the production verification crates free of any signing
//! capability while still letting tests and demos mint correctly signed receipts.
//!
//! The embedded private key is a published fixture. It protects nothing and must never be
//! linked into a released application.

pub mod log_capture;
pub mod vectors;

pub use log_capture::{capture_logs, LogCapture};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use billingsig_validation::SignatureAlgorithm;
use rsa::pkcs1v15;
use rsa::pkcs8::{DecodePrivateKey as _, EncodePublicKey as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::Sha256;
use signature::{SignatureEncoding as _, Signer as _};

/// Base64 PKCS#8 encoding of the 2048-bit fixture signing key.
pub const FIXTURE_PRIVATE_KEY_BASE64: &str = "MIIEvAIBADANBgkqhkiG9w0BAQEFAASCBKYwggSiAgEAAoIBAQDtIS1XtZPW8kp1LV8GCyRiT5zyPphRrqTPw3AtsPsSQoaH7ShxKax17gF7CtAOKMcLTPoLGzezwqSzYkLvk1NlS9FBE3lPX0+jajBNdOuRPn5mHae3n/SWPtGczIHqpgx5V5sOHihSaPhiQt1DdCM6kuMZ6nXGMi6c68mukyI2RC5GXcQ0FuTARsMrNKq5dcyeCN+THY/Id+KtsTZ0NVeQbzkbnjYpIF84cXUBCkQ7uGJGDPxvklO5J7ig51hzXVYbhs3GculxR6HzHAT23FyKkOvPpxQV9voPeUvzM8jPJnGLAivT4bQ7uKx768gxo/Qk4Dz3V6qu4FUQjtY8LJPRAgMBAAECggEATUdYrZLhYVWI6nMk2qVa8Ccd8Nxxa31M/OCmeF2LFUJU8YtaeLaqG6y7EsxNTbAAXjBx9JikKJMwdb16LvWGYia5RUoBaNqY65q5rySBeM4zBzh25iLc5PIIAd+sHzqKKilgwNMXNPQ8rlk4HrmEmZwxIssEItlL05wMGDafGaux8OVBlLqRMIGAQjaKjGc66SgFxkiiiolUlQRcvm7szXC/wXi28f7JNImFXeH5FwhHB41fbHF7eHci2/9PRCTI6pawiiSVJqj3g0A7TNuYXSB9AtZdHX1iOr72N33P/MvWwnapGXkKDm6TX+my6XTQY0qZc1MtPlEuWKMUWsgweQKBgQD/DhNkBhaY8DpOflgksmJFumG2po8CK9eGQreUs/NoE1nKxItQAVLjohVd8+aoTuiG2IUCX9Pe5OYOAOjNQ4owvFx5KBty6lhGXaOOrRUbfRtn3PYTgDsc+n75AIkn6UyabaDEIY8EmyC8wr3PX/fEod5vf1J+mKSMLn13gj1KXwKBgQDuAhlMeYMXA0sJyUhwCKMa6dnBEoxKNjHDclLDfpPVf47ogA+P2MTvKnOn7EfwfLmiU/KqbYM+8KgJRyaofMyWvoIB873PI0G/l/d8DW3rMv1K8zPLrgknUpKDMt0rFzxlSm5tYFwvSTseOUZLPvEJLcYUKfuf2uWk82gdI8ovzwKBgFBYeclHlbTF8Egrys58lzKJ/SARpfk0IGe9+qDQczv05JNYiN5CHH9y3rJDFAUvHlbkPDo8P7z2dHYy2SNYRF8H50WPWd5AbmB0PQLECWMobQqx856/BWAilP8RqSM2fhgjssI2JBx6VbzAyBRckeuSZkTPYghZQ3SZbJLKJ06XAoGAJy6XRZy3dQFoyAqn7zGs0FBxNbS8/bagSKG4eFCNO9eNCj+S0EaKXSkq8xkV2sRdtxiE2YO/2Iu7zhM1jQVGlQZ11qZut/wA5e65omV/k/nH8x/Ihh53iU6xqgGkoWRo3+/57+2uH2a54cbiCJ8rBSzQ8B7dOrrJlXcwy6NJtMcCgYAdM7gR+aVFXsedq1QEXvpnggua70VPu56xHJ8GCh1zrDu9UubkZQ9bB74kNakzvhGBmLRs+Grp6wLIm66C4MgmlUbxDnOWQLkmHvBDVn9z60RE/MTxADLqlGWDkuUpSZHN1WSfKlRpj/VeLVpAREWYBSXqjWZA5sD/GKG8l6OTJg==";

/// Base64 X.509 SubjectPublicKeyInfo matching [`FIXTURE_PRIVATE_KEY_BASE64`].
pub const FIXTURE_PUBLIC_KEY_BASE64: &str = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA7SEtV7WT1vJKdS1fBgskYk+c8j6YUa6kz8NwLbD7EkKGh+0ocSmsde4BewrQDijHC0z6Cxs3s8Kks2JC75NTZUvRQRN5T19Po2owTXTrkT5+Zh2nt5/0lj7RnMyB6qYMeVebDh4oUmj4YkLdQ3QjOpLjGep1xjIunOvJrpMiNkQuRl3ENBbkwEbDKzSquXXMngjfkx2PyHfirbE2dDVXkG85G542KSBfOHF1AQpEO7hiRgz8b5JTuSe4oOdYc11WG4bNxnLpcUeh8xwE9txcipDrz6cUFfb6D3lL8zPIzyZxiwIr0+G0O7ise+vIMaP0JOA891eqruBVEI7WPCyT0QIDAQAB";

#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("bad fixture key encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("bad fixture key: {0}")]
    Key(String),
}

/// Decode the embedded fixture private key.
pub fn fixture_private_key() -> Result<RsaPrivateKey, FixtureError> {
    let der = STANDARD.decode(FIXTURE_PRIVATE_KEY_BASE64)?;
    RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| FixtureError::Key(e.to_string()))
}

/// Base64 SubjectPublicKeyInfo for an arbitrary public key.
pub fn public_key_base64(key: &RsaPublicKey) -> Result<String, FixtureError> {
    let der = key
        .to_public_key_der()
        .map_err(|e| FixtureError::Key(e.to_string()))?;
    Ok(STANDARD.encode(der.as_bytes()))
}

/// Generate a throwaway key pair, e.g. to produce signatures from the "wrong" issuer.
pub fn generate_key_pair(bits: usize) -> Result<(RsaPrivateKey, RsaPublicKey), FixtureError> {
    let mut rng = rsa::rand_core::OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, bits).map_err(|e| FixtureError::Key(e.to_string()))?;
    let public_key = private_key.to_public_key();
    Ok((private_key, public_key))
}

/// Base64 SubjectPublicKeyInfo of the fixture key, derived from the private key.
pub fn fixture_public_key_base64() -> Result<String, FixtureError> {
    public_key_base64(&fixture_private_key()?.to_public_key())
}

/// SHA1withRSA over the UTF-8 payload with the fixture key, Base64 encoded.
pub fn sign_data(signed_data: &str) -> Result<String, FixtureError> {
    sign_data_with(SignatureAlgorithm::Sha1WithRsa, signed_data)
}

/// Sign the UTF-8 payload with the fixture key using `algorithm`, Base64 encoded.
pub fn sign_data_with(algorithm: SignatureAlgorithm, signed_data: &str) -> Result<String, FixtureError> {
    let key = fixture_private_key()?;
    let signature = match algorithm {
        SignatureAlgorithm::Sha1WithRsa => sign_sha1(&key, signed_data),
        SignatureAlgorithm::Sha256WithRsa => sign_sha256(&key, signed_data),
    };
    tracing::debug!(target: billingsig_validation::LOG_TAG, %algorithm, signature = %signature, "signed fixture payload");
    Ok(signature)
}

/// SHA1withRSA over the UTF-8 payload, Base64 encoded.
pub fn sign_sha1(key: &RsaPrivateKey, signed_data: &str) -> String {
    let signing_key = pkcs1v15::SigningKey::<Sha1>::new(key.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(signed_data.as_bytes());
    STANDARD.encode(signature.to_bytes())
}

/// SHA256withRSA over the UTF-8 payload, Base64 encoded.
pub fn sign_sha256(key: &RsaPrivateKey, signed_data: &str) -> String {
    let signing_key = pkcs1v15::SigningKey::<Sha256>::new(key.clone());
    let signature: pkcs1v15::Signature = signing_key.sign(signed_data.as_bytes());
    STANDARD.encode(signature.to_bytes())
}

/// Wrap Base64 text at 76 columns with LF, the way MIME-style encoders emit it.
pub fn wrap_base64(text: &str) -> String {
    text.as_bytes()
        .chunks(76)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
