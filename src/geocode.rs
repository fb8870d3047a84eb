// src/geocode.rs

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::consts::GEOCODE_ENDPOINT;
use crate::core::net::Fetch;
use crate::data::Position;

/// One search hit from geocode.maps.co. Everything else in the hit is ignored.
#[derive(Debug, Deserialize)]
struct Hit {
    lat: Option<String>,
    lon: Option<String>,
}

/// Location text → coordinates, memoized for one run.
///
/// Failed lookups are cached as `Position::unknown()` as well, so a location
/// that the provider cannot place costs exactly one request per run.
pub struct Geocoder {
    endpoint: String,
    api_key: String,
    cache: HashMap<String, Position>,
    lookups: usize,
}

impl Geocoder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(GEOCODE_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            cache: HashMap::new(),
            lookups: 0,
        }
    }

    pub fn resolve(&mut self, net: &dyn Fetch, location: &str) -> Position {
        if let Some(hit) = self.cache.get(location) {
            debug!(location, resolved = hit.is_resolved(), "geocode cache hit");
            return hit.clone();
        }
        let position = self.lookup(net, location);
        self.cache.insert(s!(location), position.clone());
        position
    }

    /// External requests made so far.
    pub fn lookups(&self) -> usize { self.lookups }

    pub fn cached(&self, location: &str) -> Option<&Position> {
        self.cache.get(location)
    }

    fn query_url(&self, location: &str) -> String {
        format!(
            "{}?q={}&api_key={}",
            self.endpoint,
            urlencoding::encode(location),
            urlencoding::encode(&self.api_key),
        )
    }

    fn lookup(&mut self, net: &dyn Fetch, location: &str) -> Position {
        self.lookups += 1;

        let resp = match net.get(&self.query_url(location)) {
            Ok(resp) => resp,
            Err(e) => {
                warn!(location, error = %e, "geocode request failed");
                return Position::unknown();
            }
        };
        if !resp.is_success() {
            warn!(location, status = resp.status, "geocode rejected");
            return Position::unknown();
        }

        let hits: Vec<Hit> = match serde_json::from_str(&resp.body) {
            Ok(hits) => hits,
            Err(e) => {
                warn!(location, error = %e, "geocode response unreadable");
                return Position::unknown();
            }
        };
        let Some(first) = hits.into_iter().next() else {
            warn!(location, "geocode found nothing");
            return Position::unknown();
        };

        let position = Position::from_parts(first.lat, first.lon);
        debug!(location, lat = position.lat(), lon = position.lon(), "geocoded");
        position
    }
}
