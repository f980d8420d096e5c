//! JSON Web Key Set model and key selection by key id.

use serde::Deserialize;

use crate::error::KeyNotFound;

/// A JSON Web Key Set as published by an issuer. Keys keep their published order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeySet {
    keys: Vec<Key>,
}

/// One public key from a [KeySet].
///
/// Members missing from the JSON decode as empty strings, so a structurally incomplete key still
/// decodes and is rejected by [crate::verify()] with a precise error. Unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Key {
    kty: String,
    kid: String,
    #[serde(rename = "use")]
    key_use: String,
    alg: String,
    n: String,
    e: String,
}

impl KeySet {
    /// Builds a key set from already decoded keys.
    pub fn new(keys: Vec<Key>) -> Self {
        KeySet { keys }
    }

    /// The keys in published order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the first key whose `kid` equals `kid` exactly.
    ///
    /// An empty `kid` never matches, and neither does an all-empty key.
    pub fn find(&self, kid: &str) -> Option<&Key> {
        if kid.is_empty() {
            return None;
        }
        self.keys
            .iter()
            .filter(|key| !key.is_empty())
            .find(|key| key.kid == kid)
    }

    /// Like [KeySet::find], but a miss is a [KeyNotFound] error.
    pub fn select(&self, kid: &str) -> Result<&Key, KeyNotFound> {
        self.find(kid).ok_or_else(|| KeyNotFound {
            kid: kid.to_owned(),
        })
    }
}

impl Key {
    /// Builds an RSA signing key from its base64url-encoded modulus and exponent.
    pub fn rsa(kid: impl Into<String>, n: impl Into<String>, e: impl Into<String>) -> Self {
        Key {
            kty: String::from("RSA"),
            kid: kid.into(),
            key_use: String::from("sig"),
            alg: String::from("RS256"),
            n: n.into(),
            e: e.into(),
        }
    }

    /// Key type, `RSA` for every key this crate can verify with.
    pub fn kty(&self) -> &str {
        &self.kty
    }

    /// Key id.
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// Intended use (`sig`), empty when not published.
    pub fn key_use(&self) -> &str {
        &self.key_use
    }

    /// Algorithm hint, empty when not published.
    pub fn alg(&self) -> &str {
        &self.alg
    }

    /// Base64url-encoded modulus.
    pub fn n(&self) -> &str {
        &self.n
    }

    /// Base64url-encoded public exponent.
    pub fn e(&self) -> &str {
        &self.e
    }

    /// True for the zero value, every member empty.
    pub fn is_empty(&self) -> bool {
        self == &Key::default()
    }
}
