// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use billingsig_validation::{decode_public_key, KeyError, PublicKey};

/// Decoded public keys keyed by their Base64 text.
///
/// The store key is constant for the life of an application, so decoding it once is
/// enough. Only successful decodes are stored; a bad key fails (and logs) every time.
#[derive(Debug, Default)]
pub struct KeyCache {
    keys: RwLock<HashMap<String, Arc<PublicKey>>>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached key for `encoded`, decoding and caching it on first use.
    pub fn get_or_decode(&self, encoded: &str) -> Result<Arc<PublicKey>, KeyError> {
        if let Some(key) = self.keys.read().unwrap_or_else(PoisonError::into_inner).get(encoded) {
            return Ok(Arc::clone(key));
        }

        let key = Arc::new(decode_public_key(encoded)?);
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        let cached = keys.entry(encoded.to_string()).or_insert(key);
        Ok(Arc::clone(cached))
    }

    pub fn len(&self) -> usize {
        self.keys.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.keys.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
