//! HTTP retrieval of license texts referenced by bare URLs.
//!
//! [`Fetcher::fetch`] returns `Ok(Some(body))` on success, `Ok(None)` when the server
//! answers with an unusable status or an empty body, and `Err` on network failures.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Option<String>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout_secs: f64, user_agent: &str) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(timeout_secs.max(0.0))
            .with_context(|| format!("invalid fetch timeout: {timeout_secs} seconds"))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_fractional_timeout() {
        assert!(HttpFetcher::new(0.25, "ThirdPartyNoticeFetcher/1.0").is_ok());
    }

    #[test]
    fn test_out_of_range_timeout_is_an_error() {
        for secs in [1e20, f64::INFINITY] {
            let err = HttpFetcher::new(secs, "ThirdPartyNoticeFetcher/1.0").err().unwrap();
            assert!(err.to_string().starts_with("invalid fetch timeout"));
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let fetcher = HttpFetcher::new(2.0, "ThirdPartyNoticeFetcher/1.0").unwrap();
        // Nothing listens on the loopback discard port.
        assert!(fetcher.fetch("http://127.0.0.1:9/LICENSE").await.is_err());
    }
}
