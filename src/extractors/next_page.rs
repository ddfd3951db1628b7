use super::{compile_selector, element_text};
use crate::error::ScrapeError;
use log::debug;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Link texts that mark a "next page" anchor, matched case-insensitively
const NEXT_LINK_WORDS: &[&str] = &["next", "more"];

/// Locates the link to the following listing page.
pub struct NextPageLocator {
    rel_next: Selector,
    next_class: Option<Selector>,
    anchors: Selector,
}

impl NextPageLocator {
    pub fn new(next_page_class: &str) -> Result<Self, ScrapeError> {
        let next_class = if next_page_class.trim().is_empty() {
            None
        } else {
            let classes: String = next_page_class
                .split_whitespace()
                .map(|class| format!(".{class}"))
                .collect();
            Some(compile_selector(&format!("a{classes}[href]"))?)
        };

        Ok(Self {
            rel_next: compile_selector(r#"a[rel~="next"][href], link[rel~="next"][href]"#)?,
            next_class,
            anchors: compile_selector("a[href]")?,
        })
    }

    pub fn find_next(&self, body: &str, base_url: &Url) -> Option<Url> {
        self.find_in_document(&Html::parse_document(body), base_url)
    }

    /// Strategies in priority order: `rel="next"`, the next-page class, then
    /// anchor text. Returns `None` when none match, which ends pagination.
    pub fn find_in_document(&self, document: &Html, base_url: &Url) -> Option<Url> {
        if let Some(url) = first_resolvable(document.select(&self.rel_next), base_url) {
            debug!("Next page via rel=\"next\": {}", url);
            return Some(url);
        }

        if let Some(selector) = &self.next_class {
            if let Some(url) = first_resolvable(document.select(selector), base_url) {
                debug!("Next page via class: {}", url);
                return Some(url);
            }
        }

        let by_text = document.select(&self.anchors).filter(|anchor| {
            let text = element_text(*anchor).to_lowercase();
            NEXT_LINK_WORDS.iter().any(|word| text.contains(word))
        });
        if let Some(url) = first_resolvable(by_text, base_url) {
            debug!("Next page via link text: {}", url);
            return Some(url);
        }

        debug!("No next page link found");
        None
    }
}

fn first_resolvable<'a>(
    candidates: impl Iterator<Item = ElementRef<'a>>,
    base_url: &Url,
) -> Option<Url> {
    candidates
        .filter_map(|element| element.value().attr("href"))
        .find_map(|href| resolve(href, base_url))
}

/// Absolute http(s) URL for `href`, without its fragment.
/// Links back to the current page itself are skipped.
fn resolve(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(mut url) if matches!(url.scheme(), "http" | "https") => {
            url.set_fragment(None);
            let mut current = base_url.clone();
            current.set_fragment(None);
            if url == current {
                debug!("Ignoring in-page next link '{}'", href);
                return None;
            }
            Some(url)
        }
        Ok(url) => {
            debug!("Ignoring non-http next link: {}", url);
            None
        }
        Err(e) => {
            debug!("Ignoring unresolvable next link '{}': {}", href, e);
            None
        }
    }
}
