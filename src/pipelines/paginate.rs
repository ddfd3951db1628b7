use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extractors::{NextPageLocator, PageExtractor, PostRejection};
use crate::fetchers::Fetcher;
use crate::model::Recipe;
use log::{error, info, warn};
use scraper::Html;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;
use url::Url;

/// Why the page loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The last page had no next-page link
    NoNextPage,
    /// The next-page link pointed at a page already scraped in this run
    AlreadyVisited(Url),
    /// A page could not be fetched even after retrying
    FetchFailed { url: Url, error: String },
}

/// A post that was dropped, with the page it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedPost {
    pub page_url: Url,
    pub rejection: PostRejection,
}

/// Everything collected by one run
#[derive(Debug)]
pub struct ScrapeReport {
    /// Recipes in page order, then document order within each page
    pub recipes: Vec<Recipe>,
    pub pages_fetched: usize,
    pub discarded: Vec<DiscardedPost>,
    pub termination: Termination,
}

enum State {
    Fetching(Url),
    Extracting { url: Url, body: String },
    LocatingNext { url: Url, document: Html },
    Done(Termination),
}

/// Follows next-page links from a start URL, collecting recipes.
pub struct Paginator<F> {
    fetcher: F,
    extractor: PageExtractor,
    locator: NextPageLocator,
    page_delay: Duration,
}

impl<F: Fetcher> Paginator<F> {
    pub fn new(fetcher: F, config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            extractor: PageExtractor::new(&config.selectors)?,
            locator: NextPageLocator::new(&config.selectors.next_page_class)?,
            page_delay: config.page_delay(),
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Run until there is no next page, a page repeats, or a fetch fails.
    ///
    /// Fetch failures end the run but keep what was already collected.
    pub fn run(&self, start_url: Url) -> ScrapeReport {
        let mut visited = HashSet::new();
        let mut recipes = Vec::new();
        let mut discarded = Vec::new();
        let mut pages_fetched = 0;

        let mut state = State::Fetching(start_url);
        loop {
            state = match state {
                State::Fetching(url) => {
                    if !visited.insert(url.clone()) {
                        warn!("Next page {} was already scraped; stopping", url);
                        State::Done(Termination::AlreadyVisited(url))
                    } else {
                        if visited.len() > 1 {
                            sleep(self.page_delay);
                        }

                        info!("Scraping page: {}", url);
                        match self.fetcher.fetch(&url) {
                            Ok(body) => {
                                pages_fetched += 1;
                                State::Extracting { url, body }
                            }
                            Err(e) => {
                                error!("Giving up on {}: {}", url, e);
                                State::Done(Termination::FetchFailed {
                                    url,
                                    error: e.to_string(),
                                })
                            }
                        }
                    }
                }
                State::Extracting { url, body } => {
                    let document = Html::parse_document(&body);
                    let extraction = self.extractor.extract_document(&document);
                    recipes.extend(extraction.recipes);
                    discarded.extend(extraction.rejections.into_iter().map(|rejection| {
                        DiscardedPost {
                            page_url: url.clone(),
                            rejection,
                        }
                    }));
                    State::LocatingNext { url, document }
                }
                State::LocatingNext { url, document } => {
                    match self.locator.find_in_document(&document, &url) {
                        Some(next) => State::Fetching(next),
                        None => State::Done(Termination::NoNextPage),
                    }
                }
                State::Done(termination) => {
                    info!(
                        "Finished after {} page(s) with {} recipe(s)",
                        pages_fetched,
                        recipes.len()
                    );
                    return ScrapeReport {
                        recipes,
                        pages_fetched,
                        discarded,
                        termination,
                    };
                }
            };
        }
    }
}
