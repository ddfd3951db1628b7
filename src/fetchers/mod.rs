use crate::error::ScrapeError;
use url::Url;

mod request;
mod retry;

pub use request::HttpFetcher;
pub use retry::RetryingFetcher;

/// A single GET of one page, returning the body text.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<String, ScrapeError>;
}
