// src/specs/mod.rs
//! # Page “specs”
//!
//! Page-specific reading rules for sodexo.fi. Each spec takes the HTML of one
//! kind of page and returns a small typed bundle; nothing here fetches,
//! geocodes, or merges.
//!
//! ## What lives here
//! - **Listing pages** (`/lounasravintolat`, `/opiskelijaravintolat`, `/kahvilat`):
//!   restaurant links plus the section heading each one sits under.
//! - **Restaurant pages** (`/ravintolat/<id>`): hours in either of the two
//!   layouts the site uses, and the weekly menu feed id.
//!
//! ## What does **not** live here
//! - **Network access** – callers hand in page bodies (`scrape::*` fetches them).
//! - **Geocoding and identity** – `geocode` and `directory` own those.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::crawl (fetch listing) → specs::listing::parse
//!        ↘ geocode::Geocoder::resolve
//!        ↘ scrape::detail (fetch page)   → specs::detail::parse
//!                                     → directory::Directory::upsert
//! ```
//!
//! ## Conventions
//! - Missing markup is absence (`None`), never an error.
//! - Heading association is **positional**: a link belongs to the last `h3`
//!   seen before it in document order, whatever element nests it.
//! - Specs are testable offline against inline fixtures.
pub mod detail;
pub mod listing;
