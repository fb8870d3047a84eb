// tests/common/mod.rs
//
// In-memory stand-in for sodexo.fi and the geocoding service.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use sodexo_scrape::config::options::RunOptions;
use sodexo_scrape::core::net::{Fetch, Response};
use sodexo_scrape::Error;

pub const SITE: &str = "http://sodexo.test/";
pub const GEO: &str = "http://geo.test/search";
pub const KEY: &str = "test-key";

#[derive(Default)]
pub struct FakeWeb {
    pages: HashMap<String, Response>,
    /// location → JSON body; unknown locations answer `[]`.
    places: HashMap<String, String>,
    hits: RefCell<Vec<String>>,
}

impl FakeWeb {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, path: &str, body: impl Into<String>) -> Self {
        self.pages.insert(format!("{SITE}{path}"), Response::ok(body));
        self
    }

    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.pages.insert(format!("{SITE}{path}"), Response { status, body: String::new() });
        self
    }

    pub fn place(mut self, location: &str, lat: &str, lon: &str) -> Self {
        self.places.insert(
            location.to_string(),
            format!(r#"[{{"place_id":1,"lat":"{lat}","lon":"{lon}","display_name":"{location}"}}]"#),
        );
        self
    }

    pub fn requests(&self) -> Vec<String> { self.hits.borrow().clone() }

    pub fn count(&self, prefix: &str) -> usize {
        self.hits.borrow().iter().filter(|u| u.starts_with(prefix)).count()
    }

    pub fn geocode_calls(&self) -> usize { self.count(GEO) }

    pub fn geocode_calls_for(&self, location: &str) -> usize {
        self.hits
            .borrow()
            .iter()
            .filter_map(|u| query_location(u))
            .filter(|q| q == location)
            .count()
    }
}

fn query_location(url: &str) -> Option<String> {
    let rest = url.strip_prefix(GEO)?.strip_prefix("?q=")?;
    let (q, key) = rest.split_once("&api_key=")?;
    assert_eq!(key, KEY, "geocoder must send the configured key");
    Some(urlencoding::decode(q).ok()?.into_owned())
}

impl Fetch for FakeWeb {
    fn get(&self, url: &str) -> sodexo_scrape::Result<Response> {
        self.hits.borrow_mut().push(url.to_string());
        if let Some(location) = query_location(url) {
            let body = self.places.get(&location).cloned().unwrap_or_else(|| "[]".to_string());
            return Ok(Response::ok(body));
        }
        match self.pages.get(url) {
            Some(resp) => Ok(resp.clone()),
            None => Err(Error::Transport { url: url.to_string(), source: "connection refused".into() }),
        }
    }
}

/// Listing page: one `<h3>` per section, restaurant links beneath it.
pub fn listing(sections: &[(&str, &[(&str, &str)])]) -> String {
    let mut html = String::from(r#"<html><body><nav><a href="/yhteystiedot">Yhteystiedot</a></nav>"#);
    for (heading, links) in sections {
        html.push_str(&format!("<h3>{heading}</h3><ul>"));
        for (id, name) in *links {
            html.push_str(&format!(r#"<li><a href="/ravintolat/{id}">{name}</a></li>"#));
        }
        html.push_str("</ul>");
    }
    html.push_str("</body></html>");
    html
}

/// Restaurant page with labeled hours and an optional weekly feed link.
pub fn detail(open: &str, lunch: &str, feed: Option<&str>) -> String {
    let feed = feed
        .map(|id| format!(r#"<a href="/ruokalistat/output/weekly_json/{id}">Viikon ruokalista</a>"#))
        .unwrap_or_default();
    format!(
        r#"<html><body>
            <p>Avoinna <span class="hours">{open}</span></p>
            <p>Lounas <span class="hours">{lunch}</span></p>
            {feed}
        </body></html>"#
    )
}

pub fn options(out: PathBuf) -> RunOptions {
    RunOptions {
        out,
        base_url: SITE.to_string(),
        geocode_endpoint: GEO.to_string(),
        api_key: KEY.to_string(),
        ..RunOptions::default()
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sodexo_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
