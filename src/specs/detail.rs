// src/specs/detail.rs

use crate::config::consts::{HOURS_SELECTOR, OFFICE_HOURS_SELECTOR, WEEKLY_FEED_MARKER};
use crate::core::html::Page;
use crate::core::sanitize::{last_segment, non_blank};
use crate::error::Result;

/// What a restaurant page tells us beyond the listing link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub open_hours: Option<String>,
    pub lunch_hours: Option<String>,
    pub json_id: Option<String>,
}

pub fn parse(body: &str) -> Result<DetailFields> {
    let page = Page::parse(body);

    let (open_hours, lunch_hours) = read_hours(&page)?;
    let anchors = sel!("a[href]");
    let json_id = page
        .first_href(&anchors, |href| href.contains(WEEKLY_FEED_MARKER))
        .and_then(|href| last_segment(&href).map(|id| s!(id)));

    Ok(DetailFields { open_hours, lunch_hours, json_id })
}

/// Two layouts exist. Newer pages carry labeled `span.hours` (opening, then
/// lunch); others only have office-hours slot rows. Labeled values always win;
/// slots fill whatever is still unset, in order.
fn read_hours(page: &Page) -> Result<(Option<String>, Option<String>)> {
    let mut labeled = page.texts(&sel!(HOURS_SELECTOR)).into_iter();
    let mut open = labeled.next().and_then(non_blank);
    let mut lunch = labeled.next().and_then(non_blank);

    if open.is_none() || lunch.is_none() {
        let mut slots = page.texts(&sel!(OFFICE_HOURS_SELECTOR)).into_iter();
        for field in [&mut open, &mut lunch] {
            if field.is_none() {
                *field = slots.next().and_then(non_blank);
            }
        }
    }
    Ok((open, lunch))
}
