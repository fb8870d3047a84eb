// src/scrape/mod.rs
mod crawl;
mod detail;

pub use crawl::{crawl, CrawlOutcome, LinkFailure};
pub use detail::extract;
