//! CapitolTrades scrape pipeline: fetch the profile page, then extract
//! headline stats and the trade-history table from its markup.

pub mod stats;
pub mod trades;

#[cfg(test)]
mod trades_tests;

use reqwest::Client;

use crate::constants::scrape::{FETCH_TIMEOUT, USER_AGENT};
use crate::error::ScrapeError;

/// Outbound HTTP client for the profile page. Every dashboard/reports view
/// triggers a fresh fetch; nothing is cached or deduplicated.
#[derive(Clone)]
pub struct ScrapeClient {
    client: Client,
    profile_url: String,
}

impl ScrapeClient {
    pub fn new(profile_url: String) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("reqwest client");

        Self { client, profile_url }
    }

    /// Returns the response body regardless of HTTP status. A 404 or 500
    /// body is still parseable input downstream; only network-level
    /// failures (timeout, DNS, refused connection) are errors.
    pub async fn fetch_profile_page(&self) -> Result<String, ScrapeError> {
        let resp = self.client.get(&self.profile_url).send().await?;
        Ok(resp.text().await?)
    }
}
