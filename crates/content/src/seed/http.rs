//! Seed document fetched over HTTP.

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{SeedDocument, SeedError, SeedSource};

/// Fetches the seed document with a `GET` to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSeed {
    client: Client,
    url: Url,
}

impl HttpSeed {
    /// Create a seed source with a default client.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Create a seed source reusing an existing client.
    #[must_use]
    pub const fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// The seed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl SeedSource for HttpSeed {
    async fn fetch(&self) -> Result<SeedDocument, SeedError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::Status(status.as_u16()));
        }
        let raw = response.text().await?;
        debug!(url = %self.url, bytes = raw.len(), "Fetched seed document");
        SeedDocument::from_json(&raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_configured_url() {
        let url = Url::parse("https://example.com/seed/data.json").unwrap();
        let seed = HttpSeed::new(url.clone());
        assert_eq!(seed.url(), &url);
    }
}
