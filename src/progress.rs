// src/progress.rs
use crate::data::Category;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// A category crawl starts; `total` restaurant links were found on its listing.
    fn begin(&mut self, _category: Category, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// About to scrape one restaurant page.
    fn item_start(&mut self, _name: &str) {}

    /// A restaurant page was skipped under the keep-going policy.
    fn item_failed(&mut self, _name: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
