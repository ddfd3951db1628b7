use super::{compile_selector, PostExtractor, PostRejection};
use crate::config::SelectorConfig;
use crate::error::ScrapeError;
use crate::model::Recipe;
use log::{debug, info, warn};
use scraper::{Html, Selector};

/// What one listing page yielded
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    /// Number of post containers found on the page
    pub posts_found: usize,
    /// Complete recipes, in document order
    pub recipes: Vec<Recipe>,
    /// One entry per discarded post
    pub rejections: Vec<PostRejection>,
}

/// Finds every recipe post on a listing page and extracts it.
pub struct PageExtractor {
    post: Selector,
    extractor: PostExtractor,
}

impl PageExtractor {
    pub fn new(selectors: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            post: compile_selector(&selectors.post.to_css())?,
            extractor: PostExtractor::new(selectors)?,
        })
    }

    pub fn extract_all(&self, body: &str) -> PageExtraction {
        self.extract_document(&Html::parse_document(body))
    }

    /// A page without posts yields an empty extraction, not an error.
    pub fn extract_document(&self, document: &Html) -> PageExtraction {
        let mut extraction = PageExtraction::default();

        for (index, post) in document.select(&self.post).enumerate() {
            extraction.posts_found += 1;
            match self.extractor.extract(post, index) {
                Ok(recipe) => {
                    debug!("Extracted recipe '{}' by {}", recipe.title, recipe.author);
                    extraction.recipes.push(recipe);
                }
                Err(rejection) => {
                    warn!("Skipping {}", rejection);
                    extraction.rejections.push(rejection);
                }
            }
        }

        info!("Found {} posts on this page.", extraction.posts_found);
        extraction
    }
}
