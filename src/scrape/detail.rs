// src/scrape/detail.rs

use tracing::debug;
use url::Url;

use crate::core::net::Fetch;
use crate::core::sanitize::last_segment;
use crate::data::{Category, Position, Restaurant};
use crate::error::{Error, Result};
use crate::specs::detail;
use crate::specs::listing::ListingLink;

/// Fetch one restaurant page and build its single-category record.
pub fn extract(
    net: &dyn Fetch,
    base: &Url,
    link: &ListingLink,
    category: Category,
    position: Position,
) -> Result<Restaurant> {
    let url = detail_url(base, &link.href)?;
    let url_id = last_segment(url.path())
        .map(|id| s!(id))
        .ok_or_else(|| Error::Markup(format!("no restaurant id in {url}")))?;

    let body = net.get(url.as_str())?.into_page(url.as_str())?;
    let fields = detail::parse(&body)?;
    debug!(%url, url_id = %url_id, json_id = fields.json_id.as_deref(), "restaurant page parsed");

    Ok(Restaurant {
        url_id,
        json_id: fields.json_id,
        name: link.name.clone(),
        location: link.location.clone(),
        position,
        open_hours: fields.open_hours,
        lunch_hours: fields.lunch_hours,
        types: vec![category],
    })
}

/// Site root joined with the link target. Absolute hrefs pass through.
pub(crate) fn detail_url(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| Error::Url { url: s!(href), source })
}
