#![warn(missing_docs)]
//!
//! This crate verifies the signature of an [OpenID Connect](https://openid.net/specs/openid-connect-core-1_0.html) ID token against the issuer's published [JSON Web Key Set](https://datatracker.ietf.org/doc/html/rfc7517#section-5). Only RS256 (RSASSA-PKCS1-v1_5 with SHA-256) and RSA keys are supported.
//!
//! Parsing the compact token and validating its claims (issuer, audience, expiry, nonce) are left to the caller, as is discovering the JWKS url. Key sets are fetched on every call; put a cache in front of [Verifier::verify_with_key_set] if you need one.
//!
//! ## Usage
//!
//! ```no_run
//! use idtoken_verify::{IdToken, Verifier};
//!
//! async fn check(compact: &str, jwks_url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut segments = compact.splitn(3, '.');
//!     let (raw_header, raw_payload, raw_signature) =
//!         match (segments.next(), segments.next(), segments.next()) {
//!             (Some(h), Some(p), Some(s)) => (h, p, s),
//!             _ => return Err("not a compact JWS".into()),
//!         };
//!     let header = jsonwebtoken::decode_header(compact)?;
//!
//!     let token = IdToken::new(header, raw_header, raw_payload, raw_signature);
//!     Verifier::new()?.validate_signature(&token, jwks_url).await?;
//!     Ok(())
//! }
//! ```
//!
use jsonwebtoken as jwt;
use tracing::{debug, warn};

mod config;
mod error;
mod fetch;
mod keyset;
mod verify;

#[cfg(test)]
mod test_support;

pub use config::{Config, ExponentPolicy, DEFAULT_TIMEOUT};
pub use error::{Error, FetchError, KeyNotFound, VerificationError};
pub use fetch::Fetcher;
pub use keyset::{Key, KeySet};
pub use verify::{verify, verify_with};

/// An ID token already split into its segments. The raw segments must be exactly as received.
#[derive(Debug, Clone)]
pub struct IdToken<'a> {
    /// Decoded JOSE header
    pub header: jwt::Header,
    /// Base64url header segment
    pub raw_header: &'a str,
    /// Base64url payload segment
    pub raw_payload: &'a str,
    /// Base64url signature segment
    pub raw_signature: &'a str,
}

impl<'a> IdToken<'a> {
    /// Creates an [IdToken] from its decoded header and raw segments.
    pub fn new(
        header: jwt::Header,
        raw_header: &'a str,
        raw_payload: &'a str,
        raw_signature: &'a str,
    ) -> Self {
        IdToken {
            header,
            raw_header,
            raw_payload,
            raw_signature,
        }
    }

    /// The bytes the issuer signed: `raw_header.raw_payload`.
    pub fn signed_content(&self) -> String {
        format!("{}.{}", self.raw_header, self.raw_payload)
    }
}

/// Verifier is the main entry point. Create with [Verifier::new] or [Verifier::with_config].
///
/// Holds no per-call state; clone it or share it across tasks freely.
#[derive(Debug, Clone)]
pub struct Verifier {
    fetcher: Fetcher,
    exponent_policy: ExponentPolicy,
}

impl Verifier {
    /// Creates a [Verifier] with the default [Config].
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(Config::default())
    }

    /// Creates a [Verifier] with the given [Config].
    pub fn with_config(config: Config) -> Result<Self, FetchError> {
        Ok(Verifier {
            fetcher: Fetcher::new(&config)?,
            exponent_policy: config.exponent_policy,
        })
    }

    /// Fetches the key set at `jwks_url` and verifies `token`'s signature with the key its header names.
    ///
    /// Each stage stops the call on failure and its error kind is kept: [Error::Fetch] for the
    /// key set request, [Error::KeyNotFound] when the header's `kid` is missing or unpublished,
    /// [Error::Verification] for the key and signature checks. A header algorithm other than
    /// RS256 fails verification before any request is made.
    pub async fn validate_signature(&self, token: &IdToken<'_>, jwks_url: &str) -> Result<(), Error> {
        check_algorithm(token)?;
        let keys = self.fetcher.fetch(jwks_url).await?;
        self.select_and_verify(token, &keys)
    }

    /// Verifies `token`'s signature with the key its header names in an already fetched key set.
    pub fn verify_with_key_set(&self, token: &IdToken<'_>, keys: &KeySet) -> Result<(), Error> {
        check_algorithm(token)?;
        self.select_and_verify(token, keys)
    }

    // Callers check the header algorithm first.
    fn select_and_verify(&self, token: &IdToken<'_>, keys: &KeySet) -> Result<(), Error> {
        let kid = token.header.kid.as_deref().unwrap_or_default();
        let key = keys.select(kid).map_err(|e| {
            warn!(kid, published = keys.keys().len(), "no JWK for token kid");
            e
        })?;

        verify::verify_with(
            key,
            token.signed_content().as_bytes(),
            token.raw_signature,
            self.exponent_policy,
        )
        .map_err(|e| {
            warn!(kid, error = %e, "failed to verify id_token signature");
            e
        })?;

        debug!(kid, "verified id_token signature");
        Ok(())
    }
}

fn check_algorithm(token: &IdToken<'_>) -> Result<(), VerificationError> {
    if token.header.alg != jwt::Algorithm::RS256 {
        warn!(alg = ?token.header.alg, "id_token is not signed with RS256");
        return Err(VerificationError::VerificationFailed);
    }
    Ok(())
}
