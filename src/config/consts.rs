// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://www.sodexo.fi/";
pub const LUNCH_PATH: &str = "lounasravintolat";
pub const STUDENT_PATH: &str = "opiskelijaravintolat";
pub const CAFE_PATH: &str = "kahvilat";

// Listing page
pub const RESTAURANT_LINK_MARKER: &str = "/ravintolat/";
pub const SECTION_HEADING: &str = "h3";

// Detail page
pub const HOURS_SELECTOR: &str = "span.hours";
pub const OFFICE_HOURS_SELECTOR: &str = "div.office-hours__item-slots";
pub const WEEKLY_FEED_MARKER: &str = "/weekly_json/";

// Geocoding
pub const GEOCODE_ENDPOINT: &str = "https://geocode.maps.co/search";
pub const API_KEY_VAR: &str = "GEOCODE_API_KEY";

// Net
pub const USER_AGENT: &str = concat!("sodexo_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Output
pub const DEFAULT_OUT_FILE: &str = "sodexo_restaurants.json";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_FILTER_VAR: &str = "SODEXO_LOG";
