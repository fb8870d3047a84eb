// src/runner.rs
use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::{
    config::options::RunOptions,
    core::net::Fetch,
    data::{Category, Restaurant},
    directory,
    error::{Error, Result},
    file,
    geocode::Geocoder,
    progress::{NullProgress, Progress},
    scrape::{self, LinkFailure},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out: PathBuf,
    pub restaurants: usize,
    /// External geocoding requests actually made (cache misses).
    pub geocode_lookups: usize,
    /// Links skipped under `FailurePolicy::KeepGoing`. Always empty under `FailFast`.
    pub failures: Vec<LinkFailure>,
}

/// Canonical directory before it is written anywhere.
pub struct Build {
    pub restaurants: Vec<Restaurant>,
    pub failures: Vec<LinkFailure>,
}

/// Top-level runner: crawl, merge, write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// Nothing is written unless every crawl returned.
pub fn run(
    opts: &RunOptions,
    net: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let mut geocoder = Geocoder::with_endpoint(opts.geocode_endpoint.as_str(), opts.api_key.as_str());

    let built = build(opts, net, &mut geocoder, &mut *progress);
    progress.finish();
    let built = built?;

    let out = file::write_snapshot(&opts.out, &built.restaurants)?;
    info!(
        out = %out.display(),
        restaurants = built.restaurants.len(),
        geocode_lookups = geocoder.lookups(),
        failures = built.failures.len(),
        "run complete"
    );

    Ok(RunSummary {
        out,
        restaurants: built.restaurants.len(),
        geocode_lookups: geocoder.lookups(),
        failures: built.failures,
    })
}

/// Crawl every selected category in fixed order and merge the results.
pub fn build(
    opts: &RunOptions,
    net: &dyn Fetch,
    geocoder: &mut Geocoder,
    progress: &mut dyn Progress,
) -> Result<Build> {
    let base = Url::parse(&opts.base_url)
        .map_err(|source| Error::Url { url: opts.base_url.clone(), source })?;

    let mut batches: Vec<(Category, Vec<Restaurant>)> = Vec::new();
    let mut failures = Vec::new();

    for category in opts.ordered_categories() {
        let listing_url = opts.listing_url(category);
        progress.log(&format!("Crawling {category} restaurants ({listing_url})"));
        let outcome = scrape::crawl(
            net,
            geocoder,
            &base,
            &listing_url,
            category,
            opts.policy,
            &mut *progress,
        )?;
        batches.push((category, outcome.records));
        failures.extend(outcome.failures);
    }

    let dir = directory::aggregate(batches);
    Ok(Build { restaurants: dir.into_records(), failures })
}
