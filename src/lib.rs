pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod writer;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use model::{Recipe, RecipeField};
pub use pipelines::{Paginator, ScrapeReport, Termination};
pub use writer::write_recipes;

use crate::fetchers::{HttpFetcher, RetryingFetcher};
use log::debug;
use url::Url;

/// Scrape every listing page reachable from `start_url`.
///
/// Only setup problems (bad URL, bad selectors, HTTP client) are errors;
/// fetch failures during the run end pagination and are reported in
/// [`ScrapeReport::termination`].
pub fn scrape(start_url: &str, config: &ScraperConfig) -> Result<ScrapeReport, ScrapeError> {
    let start_url = Url::parse(start_url)?;
    debug!("{:#?}", config);

    let fetcher = RetryingFetcher::from_config(HttpFetcher::from_config(config)?, config);
    let paginator = Paginator::new(fetcher, config)?;

    Ok(paginator.run(start_url))
}
