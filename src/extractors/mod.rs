use crate::error::ScrapeError;
use scraper::{ElementRef, Node, Selector};

mod next_page;
mod page;
mod post;

pub use next_page::NextPageLocator;
pub use page::{PageExtraction, PageExtractor};
pub use post::{PostExtractor, PostRejection, RejectReason};

/// Elements whose boundaries count as line breaks in list fields
const BLOCK_ELEMENTS: &[&str] = &[
    "br", "p", "div", "li", "ul", "ol", "tr", "td", "h1", "h2", "h3", "h4", "h5", "h6",
    "pre", "blockquote", "section", "article",
];

pub(crate) fn compile_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{e:?}"),
    })
}

/// Split text into trimmed, non-empty lines.
///
/// Joining the result with `\n` and splitting again yields the same lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// All descendant text, trimmed
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Descendant text with a line break at every block boundary and `<br>`
pub(crate) fn block_text(element: ElementRef) -> String {
    let mut out = String::new();
    push_block_text(element, &mut out);
    out
}

fn push_block_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let is_block = BLOCK_ELEMENTS.contains(&child_element.value().name());
            if is_block {
                out.push('\n');
            }
            push_block_text(child_element, out);
            if is_block {
                out.push('\n');
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}
