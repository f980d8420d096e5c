use std::time::Duration;

/// Upper bound on one JWKS request, connect through end of body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Which RSA public exponent to verify with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExponentPolicy {
    /// Always use 65537, ignoring the key's `e`. Safe only for issuers known to use the standard exponent.
    #[default]
    Standard,

    /// Decode the exponent from the key's `e` member.
    FromKey,
}

/// Settings for [crate::Verifier] and [crate::Fetcher].
///
/// ```rust
/// use std::time::Duration;
/// use idtoken_verify::{Config, ExponentPolicy};
///
/// let config = Config::default()
///     .with_timeout(Duration::from_secs(2))
///     .with_exponent_policy(ExponentPolicy::FromKey);
/// assert!(config.require_success_status);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bound on the JWKS request
    pub timeout: Duration,

    /// Reject non-2xx JWKS responses instead of decoding their bodies
    pub require_success_status: bool,

    /// Exponent used to rebuild RSA public keys
    pub exponent_policy: ExponentPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout: DEFAULT_TIMEOUT,
            require_success_status: true,
            exponent_policy: ExponentPolicy::Standard,
        }
    }
}

impl Config {
    /// Sets the JWKS request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether non-2xx JWKS responses are rejected.
    pub fn with_require_success_status(mut self, require: bool) -> Self {
        self.require_success_status = require;
        self
    }

    /// Sets the RSA exponent policy.
    pub fn with_exponent_policy(mut self, policy: ExponentPolicy) -> Self {
        self.exponent_policy = policy;
        self
    }
}
