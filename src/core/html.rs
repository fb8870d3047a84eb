// src/core/html.rs
// Thin query layer over `scraper`. Specs only need four shapes:
// all texts for a selector, first href matching a predicate, a
// document-order scan, and element text.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

pub fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector { css, reason: e.to_string() })
}

/// Visible text of an element, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(body: &str) -> Self {
        Self { doc: Html::parse_document(body) }
    }

    /// Text of every element matching `sel`, in page order.
    pub fn texts(&self, sel: &Selector) -> Vec<String> {
        self.doc.select(sel).map(text_of).collect()
    }

    /// `href` of the first `<a>` whose target satisfies `pred`.
    pub fn first_href<F>(&self, anchors: &Selector, pred: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        self.doc
            .select(anchors)
            .filter_map(|a| a.value().attr("href"))
            .find(|&href| pred(href))
            .map(|href| s!(href))
    }

    /// Elements matching a selector group, in document order. Matching `h3, a`
    /// interleaves headings and links exactly as they appear in the markup.
    pub fn scan<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.doc.select(sel)
    }
}
