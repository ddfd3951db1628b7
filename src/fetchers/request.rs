use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetchers::Fetcher;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// One HTTP session for the whole run.
///
/// The client keeps its connection pool and cookie jar across pages.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::new(&config.user_agent, config.timeout())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        let response = self.client.get(url.as_str()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text()?;
        debug!("Received {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
