// src/directory.rs
//
// The canonical restaurant set. One entry per `url_id`, kept in first-seen
// order. Re-encounters only widen `types`; every other field stays as it was
// first scraped.

use std::collections::HashMap;

use tracing::debug;

use crate::data::{Category, Restaurant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    /// Already known; the incoming categories were unioned into `types`.
    Merged { new_types: usize },
}

#[derive(Debug, Default)]
pub struct Directory {
    index: HashMap<String, usize>,
    records: Vec<Restaurant>,
}

impl Directory {
    pub fn new() -> Self { Self::default() }

    pub fn upsert(&mut self, record: Restaurant) -> Upsert {
        if let Some(&ix) = self.index.get(&record.url_id) {
            let existing = &mut self.records[ix];
            let new_types = record
                .types
                .into_iter()
                .filter(|&c| existing.add_type(c))
                .count();
            debug!(url_id = %existing.url_id, new_types, types = ?existing.types, "merged");
            return Upsert::Merged { new_types };
        }

        debug!(url_id = %record.url_id, "new restaurant");
        self.index.insert(record.url_id.clone(), self.records.len());
        self.records.push(record);
        Upsert::Inserted
    }

    pub fn get(&self, url_id: &str) -> Option<&Restaurant> {
        self.index.get(url_id).map(|&ix| &self.records[ix])
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[Restaurant] { &self.records }

    /// Canonical list in first-insertion order.
    pub fn into_records(self) -> Vec<Restaurant> { self.records }
}

/// Fold per-category crawl results into one directory. Batches are applied
/// in `Category::ALL` order whatever order they arrive in, so the earliest
/// category decides names and hours of shared restaurants.
pub fn aggregate<I>(batches: I) -> Directory
where
    I: IntoIterator<Item = (Category, Vec<Restaurant>)>,
{
    let mut batches: Vec<(Category, Vec<Restaurant>)> = batches.into_iter().collect();
    // stable: same-category batches keep their relative order
    batches.sort_by_key(|(category, _)| *category);

    let mut dir = Directory::new();
    for (category, records) in batches {
        for mut record in records {
            if record.types.is_empty() {
                record.types.push(category);
            }
            dir.upsert(record);
        }
    }
    dir
}
