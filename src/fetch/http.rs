//! Remote template retrieval over HTTP.

use super::retry::{retry_with_backoff, AttemptError, RetryPolicy};
use crate::error::{GenError, Result};
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Capability to read a remote template.
///
/// Injected into the generator so everything above the network layer can be
/// exercised without network access.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Blocking HTTP fetcher with retry and exponential backoff.
///
/// Connection errors, timeouts, `429` and `5xx` responses are retried; other
/// client errors fail immediately.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, policy: RetryPolicy) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenError::Precondition(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, policy })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GenError::Fetch {
                location: url.to_string(),
                reason: format!("unsupported URL scheme '{}'", url.scheme()),
            });
        }

        retry_with_backoff(&self.policy, url.as_str(), || {
            let response = self.client.get(url.clone()).send().map_err(|e| {
                if e.is_builder() {
                    AttemptError::permanent(e.to_string())
                } else {
                    AttemptError::transient(e.to_string())
                }
            })?;

            let status = response.status();
            if status.is_success() {
                return response
                    .text()
                    .map_err(|e| AttemptError::transient(format!("failed to read body: {e}")));
            }

            if is_transient(status) {
                Err(AttemptError::transient(format!("HTTP {status}")))
            } else {
                Err(AttemptError::permanent(format!("HTTP {status}")))
            }
        })
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}
