use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default config file looked up in the current directory (extension optional)
pub const DEFAULT_CONFIG_NAME: &str = "homebrew_scraper";

/// Main scraper configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScraperConfig {
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Total attempts per page, first try included
    pub max_attempts: u32,
    /// Fixed delay between attempts for the same page, in milliseconds
    pub retry_delay_ms: u64,
    /// Fixed delay between successive pages, in milliseconds
    pub page_delay_ms: u64,
    /// Where each field lives in the post markup
    pub selectors: SelectorConfig,
}

/// A tag plus class pair, e.g. `div` + `recipe-title`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    pub tag: String,
    pub class: String,
}

impl FieldSelector {
    pub fn new(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: class.to_string(),
        }
    }

    /// CSS form of the pair; a class with spaces becomes a compound selector
    pub fn to_css(&self) -> String {
        let mut css = self.tag.trim().to_string();
        for class in self.class.split_whitespace() {
            css.push('.');
            css.push_str(class);
        }
        css
    }
}

/// Logical field name -> selector mapping for one target site
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    /// Container of one recipe post
    pub post: FieldSelector,
    pub title: FieldSelector,
    pub author: FieldSelector,
    pub date: FieldSelector,
    pub ingredients: FieldSelector,
    pub instructions: FieldSelector,
    /// Class carried by a "next page" anchor
    pub next_page_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            post: FieldSelector::new("div", "recipe-post"),
            title: FieldSelector::new("div", "recipe-title"),
            author: FieldSelector::new("div", "recipe-author"),
            date: FieldSelector::new("div", "recipe-date"),
            ingredients: FieldSelector::new("div", "recipe-ingredients"),
            instructions: FieldSelector::new("div", "recipe-instructions"),
            next_page_class: "next-page".to_string(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            page_delay_ms: default_page_delay_ms(),
            selectors: SelectorConfig::default(),
        }
    }
}

// Default value functions
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    3000
}

fn default_page_delay_ms() -> u64 {
    1000
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with HOMEBREW_SCRAPER__ prefix
    /// 2. The given config file, or homebrew_scraper.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: HOMEBREW_SCRAPER__SELECTORS__TITLE__CLASS
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

/// Load configuration from file and environment variables
///
/// An explicit `path` must exist; the implicit default file may be missing.
pub fn load_config(path: Option<&Path>) -> Result<ScraperConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: HOMEBREW_SCRAPER__SELECTORS__POST__CLASS
        .add_source(
            Environment::with_prefix("HOMEBREW_SCRAPER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
