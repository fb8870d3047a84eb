// src/specs/listing.rs

use crate::config::consts::{RESTAURANT_LINK_MARKER, SECTION_HEADING};
use crate::core::html::{text_of, Page};
use crate::core::sanitize::non_blank;
use crate::error::Result;

/// One restaurant link as it appears on a listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLink {
    pub href: String,
    pub name: String,
    /// Text of the nearest preceding section heading, if any.
    pub location: Option<String>,
}

/// Restaurant links in page order, each tagged with the heading in force
/// when the scan reached it. Duplicates are kept.
pub fn parse(body: &str) -> Result<Vec<ListingLink>> {
    let page = Page::parse(body);
    let scan = sel!("h3, a[href]");

    let mut heading: Option<String> = None;
    let mut links = Vec::new();

    for el in page.scan(&scan) {
        if el.value().name() == SECTION_HEADING {
            heading = non_blank(text_of(el));
            continue;
        }
        let href = el.value().attr("href").unwrap_or_default();
        if !href.contains(RESTAURANT_LINK_MARKER) { continue; }

        links.push(ListingLink {
            href: s!(href),
            name: text_of(el),
            location: heading.clone(),
        });
    }
    Ok(links)
}
