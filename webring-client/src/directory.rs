use crate::error::{ClientError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use webring_core::SiteRecord;

/// Fetches the member directory over HTTP. Tries the primary endpoint
/// first; the fallback endpoint is contacted only after the primary's
/// failure is observed, and only once.
pub struct DirectoryFetcher {
    client: Client,
    primary: Url,
    fallback: Url,
}

impl DirectoryFetcher {
    pub fn new(primary: Url, fallback: Url) -> Self {
        Self::with_timeout(primary, fallback, 10)
    }

    pub fn with_timeout(primary: Url, fallback: Url, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("webring-client/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            primary,
            fallback,
        }
    }

    /// Fetch and parse the directory. A network error or an out-of-range
    /// status on the primary triggers the single fallback request; a body
    /// that passed the status check but does not parse is terminal and the
    /// fallback is not consulted for it.
    pub async fn fetch(&self) -> Result<Vec<SiteRecord>> {
        let body = match self.fetch_body(&self.primary).await {
            Ok(body) => body,
            Err(primary_err) => {
                warn!("Primary directory fetch failed: {}", primary_err);
                match self.fetch_body(&self.fallback).await {
                    Ok(body) => body,
                    Err(fallback_err) => {
                        return Err(ClientError::DirectoryUnavailable {
                            primary: Box::new(primary_err),
                            fallback: Box::new(fallback_err),
                        });
                    }
                }
            }
        };

        let sites: Vec<SiteRecord> = serde_json::from_str(&body)?;
        debug!("Fetched a directory of {} members", sites.len());
        Ok(sites)
    }

    async fn fetch_body(&self, url: &Url) -> Result<String> {
        debug!("Fetching directory from {}", url);
        let response = self.client.get(url.clone()).send().await?;

        // Success is any status in [200, 400)
        let status = response.status().as_u16();
        if !(200..400).contains(&status) {
            return Err(ClientError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
