// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::Category;

/// What to do when a single restaurant page cannot be scraped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failed link. Nothing is written.
    #[default]
    FailFast,
    /// Record the failure, keep scraping, and report it with the summary.
    KeepGoing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub out: PathBuf,
    /// Subset to crawl. Always processed in `Category::ALL` order.
    pub categories: Vec<Category>,
    pub policy: FailurePolicy,
    pub api_key: String,
    pub geocode_endpoint: String,
    pub base_url: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
            categories: Category::ALL.to_vec(),
            policy: FailurePolicy::FailFast,
            api_key: s!(),
            geocode_endpoint: s!(GEOCODE_ENDPOINT),
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl RunOptions {
    /// Defaults plus the geocoding key from the environment (`.env` honoured).
    /// A missing key is not an error: lookups go out with an empty key and
    /// come back as unresolved positions.
    pub fn from_env() -> Self {
        // .env is optional
        let _ = dotenvy::dotenv();
        Self {
            api_key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Selected categories in fixed processing order, deduplicated.
    pub fn ordered_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.categories.contains(c))
            .collect()
    }

    pub fn listing_url(&self, category: Category) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, category.listing_path())
    }
}
