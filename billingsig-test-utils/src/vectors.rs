// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Recorded receipts signed with the fixture key.
//!
//! PKCS#1 v1.5 signatures are deterministic, so these are exact expected outputs of the
//! fixture signer as well as known-good verifier inputs.

/// Receipt payload signed by the fixture key.
pub const PAYLOAD: &str = r#"{"orderId":"X","productId":"sku1"}"#;

/// SHA1withRSA signature of [`PAYLOAD`].
pub const PAYLOAD_SIGNATURE: &str = "E1xhWFfIQI1AVeVQT9qGEbn+Zf0WI/TNuC4zeYBeuhHUsSOnW8xQCh7uxbjmylrOv/5Vlk9UlEBlZvUbLViDhhiGJ9AarDZl8ZoPc3uS1ZUYf1vsedkHungJ2zUZajWbvv4OsCHVLDjXUX4YnDiafWDUmvGwyUUR+Zu+e6cwsICs/Qvr45VHw7i7MfsmKskjmgGyNzH8Vj2jRIhcJzm3XHcp5PHP5qSrwedmwfjwHoPotboLNgdzdKtk78QT58dlqOufHHnzxmSCgRuwL4zhsc5bozHg2Xkr6mXCnjV9q227b/LcmDgfUCKw80WTY7PVFC8E+3kQyAQOaEEhOYFFKw==";

/// SHA256withRSA signature of [`PAYLOAD`].
pub const PAYLOAD_SIGNATURE_SHA256: &str = "MqYd5ns6HTx0vOwEyUHS9WybhsuY2WBjUtmxEbnMR1QkqNLEaC9XnoiLoWa4botnsTt7V31cghckgIAhPQBOKYfat2CwWIy1tw88tAN41MvQBEs8m9DuqQVctO0fX8iWKT6gFs6bALF9Fho2E52r2kDl3DxQpNnoWgwUtro5kvM4o7y9LwQTbs+4LnQ+lp2EWhMaiJm+j8nZvEZpsqcuFifiNK+HgZjpDvAWRAfqSort+PJSjs6hTYDR1sKlla/FRCd0rjaQOx/gBIzwKfcecFdUpxoVCw88iIYf8Hcatiqf0SY/ehBLOU1qV6JeDK0EAaR/qorj55VFBU1upbI9/w==";

/// A P-256 SubjectPublicKeyInfo: structurally valid, wrong key family.
pub const EC_P256_PUBLIC_KEY_BASE64: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEgllxDSVmyd8mgBwoEyEP3bIC0qfzpTxHkvJQz9VNU2kc21PUUr/BmMVuEMuA2AIjkn7mOQXXcu1S+dUJ/TRq7A==";
