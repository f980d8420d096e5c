//! Retrieval of an issuer's JSON Web Key Set.

use reqwest::header::ACCEPT;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::FetchError;
use crate::keyset::KeySet;

/// Fetches key sets with one bounded GET per call. No retries, no caching.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    require_success_status: bool,
}

impl Fetcher {
    /// Creates a fetcher whose requests are bounded by `config.timeout`.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Fetcher {
            client,
            require_success_status: config.require_success_status,
        })
    }

    /// GETs `jwks_url` and decodes the body as a [KeySet].
    ///
    /// The response body is dropped on every return path.
    pub async fn fetch(&self, jwks_url: &str) -> Result<KeySet, FetchError> {
        let url = parse_jwks_url(jwks_url)?;
        debug!(jwks_url = %url, "fetching JWKS");

        let response = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;

        let response = if self.require_success_status {
            response
                .error_for_status()
                .map_err(|e| network_error(&url, e))?
        } else {
            response
        };

        let body = response.bytes().await.map_err(|e| network_error(&url, e))?;

        let keys: KeySet = serde_json::from_slice(&body).map_err(|e| {
            warn!(jwks_url = %url, error = %e, "failed to decode JWKS response");
            FetchError::Decode(e)
        })?;

        debug!(jwks_url = %url, keys = keys.keys().len(), "fetched JWKS");
        Ok(keys)
    }
}

fn network_error(url: &Url, e: reqwest::Error) -> FetchError {
    warn!(jwks_url = %url, timeout = e.is_timeout(), error = %e, "failed to GET JWKS endpoint");
    FetchError::Network(e)
}

fn parse_jwks_url(jwks_url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: jwks_url.to_owned(),
        reason,
    };

    let url = Url::parse(jwks_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme {:?}", scheme))),
    }
}
