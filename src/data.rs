// src/data.rs
//
// Canonical records shared by every stage of the pipeline.
//
// - Category: which listing page a restaurant was discovered on.
// - Position: geocoded coordinates, both-or-neither.
// - Restaurant: one entry of the output directory, keyed by `url_id`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::consts::{CAFE_PATH, LUNCH_PATH, STUDENT_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lunch,
    Student,
    Cafe,
}

impl Category {
    /// Fixed processing order. Earlier categories win non-type fields on merge.
    pub const ALL: [Category; 3] = [Category::Lunch, Category::Student, Category::Cafe];

    pub fn label(self) -> &'static str {
        match self {
            Category::Lunch => "lunch",
            Category::Student => "student",
            Category::Cafe => "cafe",
        }
    }

    /// Listing page path relative to the site root.
    pub fn listing_path(self) -> &'static str {
        match self {
            Category::Lunch => LUNCH_PATH,
            Category::Student => STUDENT_PATH,
            Category::Cafe => CAFE_PATH,
        }
    }

    pub fn from_label(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lunch" => Some(Category::Lunch),
            "student" => Some(Category::Student),
            "cafe" => Some(Category::Cafe),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Latitude/longitude as the provider reports them (decimal strings).
/// Fields are private so a half-resolved pair cannot be built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    lat: Option<String>,
    lon: Option<String>,
}

impl Position {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn resolved(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self { lat: Some(lat.into()), lon: Some(lon.into()) }
    }

    /// Resolved only when both halves are present.
    pub fn from_parts(lat: Option<String>, lon: Option<String>) -> Self {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::resolved(lat, lon),
            _ => Self::unknown(),
        }
    }

    pub fn lat(&self) -> Option<&str> { self.lat.as_deref() }
    pub fn lon(&self) -> Option<&str> { self.lon.as_deref() }
    pub fn is_resolved(&self) -> bool { self.lat.is_some() }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub url_id: String,
    pub json_id: Option<String>,
    pub name: String,
    pub location: Option<String>,
    #[serde(flatten)]
    pub position: Position,
    pub open_hours: Option<String>,
    pub lunch_hours: Option<String>,
    /// First-seen order, no duplicates, never empty.
    pub types: Vec<Category>,
}

impl Restaurant {
    /// Add `category` to `types` unless already present. Returns true if it was new.
    pub fn add_type(&mut self, category: Category) -> bool {
        if self.types.contains(&category) {
            return false;
        }
        self.types.push(category);
        true
    }
}
