// src/scrape/crawl.rs

use tracing::{error, info};
use url::Url;

use super::detail::{self, detail_url};
use crate::config::options::FailurePolicy;
use crate::core::net::Fetch;
use crate::data::{Category, Position, Restaurant};
use crate::error::Result;
use crate::geocode::Geocoder;
use crate::progress::Progress;
use crate::specs::listing;

/// A restaurant page that could not be scraped under `FailurePolicy::KeepGoing`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkFailure {
    pub category: Category,
    pub name: String,
    pub url: String,
    pub error: String,
}

/// Raw single-category records in listing order (not deduplicated), plus
/// any links that were skipped.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub records: Vec<Restaurant>,
    pub failures: Vec<LinkFailure>,
}

/// Scrape every restaurant linked from one category listing page.
///
/// Per link: geocode its heading, then fetch and parse the restaurant page.
/// The listing fetch itself always aborts on failure; per-link failures abort
/// or are collected depending on `policy`.
pub fn crawl(
    net: &dyn Fetch,
    geocoder: &mut Geocoder,
    base: &Url,
    listing_url: &str,
    category: Category,
    policy: FailurePolicy,
    progress: &mut dyn Progress,
) -> Result<CrawlOutcome> {
    let body = net.get(listing_url)?.into_page(listing_url)?;
    let links = listing::parse(&body)?;
    info!(%category, listing_url, links = links.len(), "listing scanned");

    progress.begin(category, links.len());

    let mut out = CrawlOutcome::default();
    for link in &links {
        progress.item_start(&link.name);

        let position = match link.location.as_deref() {
            Some(location) => geocoder.resolve(net, location),
            None => Position::unknown(),
        };

        match detail::extract(net, base, link, category, position) {
            Ok(record) => out.records.push(record),
            Err(e) if policy == FailurePolicy::KeepGoing => {
                let url = detail_url(base, &link.href)
                    .map(|u| s!(u.as_str()))
                    .unwrap_or_else(|_| link.href.clone());
                error!(%category, name = %link.name, %url, error = %e, "restaurant skipped");
                progress.item_failed(&link.name, &e.to_string());
                out.failures.push(LinkFailure {
                    category,
                    name: link.name.clone(),
                    url,
                    error: e.to_string(),
                });
            }
            Err(e) => {
                error!(%category, name = %link.name, error = %e, "restaurant failed, aborting");
                return Err(e);
            }
        }
    }
    Ok(out)
}
