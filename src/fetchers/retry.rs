use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetchers::Fetcher;
use log::{debug, error, info, warn};
use std::thread::sleep;
use std::time::Duration;
use url::Url;

/// Retries a fetcher a fixed number of times with a fixed delay.
pub struct RetryingFetcher<F> {
    inner: F,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<F: Fetcher> RetryingFetcher<F> {
    /// `max_attempts` counts the first try; zero is treated as one.
    pub fn new(inner: F, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    pub fn from_config(inner: F, config: &ScraperConfig) -> Self {
        Self::new(inner, config.max_attempts, config.retry_delay())
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl<F: Fetcher> Fetcher for RetryingFetcher<F> {
    fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            debug!(
                "Fetching {} (attempt {}/{})",
                url, attempt, self.max_attempts
            );

            match self.inner.fetch(url) {
                Ok(body) => {
                    info!("Fetched {} on attempt {}", url, attempt);
                    return Ok(body);
                }
                Err(e) => {
                    warn!(
                        "Attempt {}/{} for {} failed: {}",
                        attempt, self.max_attempts, url, e
                    );
                    last_error = Some(e.to_string());

                    if attempt < self.max_attempts {
                        info!("Retrying in {:?}...", self.retry_delay);
                        sleep(self.retry_delay);
                    }
                }
            }
        }

        error!(
            "Failed to fetch {} after {} attempts.",
            url, self.max_attempts
        );
        Err(ScrapeError::RetriesExhausted {
            url: url.to_string(),
            attempts: self.max_attempts,
            last_error: last_error.unwrap_or_default(),
        })
    }
}
