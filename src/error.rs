use thiserror::Error;

/// Failure to retrieve or decode a JSON Web Key Set.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The JWKS url is not an absolute `http`/`https` url.
    #[error("invalid JWKS url {url:?}: {reason}")]
    InvalidUrl {
        /// The url as supplied by the caller
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request failed, timed out, or returned an error status. See [FetchError::is_timeout].
    #[error("failed to GET JWKS endpoint: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body is not a JSON Web Key Set.
    #[error("failed to decode JWKS response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when the request was abandoned because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if e.is_timeout())
    }
}

/// The key set holds no key for the requested key id.
///
/// Callers may treat this as retryable at a higher layer (the issuer may have rotated its keys).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no JWK found for kid {kid:?}")]
pub struct KeyNotFound {
    /// The key id that was looked up
    pub kid: String,
}

/// Failure to verify a signature with a selected key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The key material cannot form an RSA public key.
    #[error("malformed JWK: {0}")]
    MalformedKey(&'static str),

    /// The signature segment is not base64url without padding.
    #[error("malformed signature: {0}")]
    MalformedSignature(base64::DecodeError),

    /// The signature does not verify. The cause is deliberately not reported.
    #[error("signature verification failed")]
    VerificationFailed,
}

/// Any failure of [crate::Verifier::validate_signature], keeping the failing stage's kind.
#[derive(Debug, Error)]
pub enum Error {
    /// Key set retrieval failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The token's key id is not in the key set
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFound),

    /// Key reconstruction or signature verification failed
    #[error(transparent)]
    Verification(#[from] VerificationError),
}
