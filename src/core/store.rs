//! # Listing Store
//!
//! Ordered listings from the most recent successful fetch. The store is
//! only ever replaced in full; there is no merge and no in-place edit.
//!
//! ```text
//! fetch ok  ──►  replace(batch)  ──►  revision += 1
//! fetch err ──►  (untouched)
//! ```

use log::{debug, warn};
use std::collections::HashSet;

use crate::core::listing::{Listing, ListingId};

#[derive(Debug, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
    /// Bumped on every replacement, including replacement with an identical batch.
    revision: u64,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a freshly fetched batch, keeping payload order.
    ///
    /// Duplicate ids are kept as-is; lookups resolve them to the first match.
    pub fn replace(&mut self, batch: Vec<Listing>) {
        let duplicates = duplicate_ids(&batch);
        if !duplicates.is_empty() {
            warn!(
                "Listing batch contains {} duplicate id(s): {:?}",
                duplicates.len(),
                duplicates
            );
        }
        self.listings = batch;
        self.revision += 1;
        debug!(
            "Listing store replaced: {} listings (revision {})",
            self.listings.len(),
            self.revision
        );
    }

    /// Drop every listing. Used on screen teardown.
    pub fn clear(&mut self) {
        self.listings.clear();
        self.revision += 1;
    }
}

/// Ids that occur more than once, in order of their second appearance.
pub fn duplicate_ids(listings: &[Listing]) -> Vec<ListingId> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for listing in listings {
        if !seen.insert(&listing.id) && !dupes.contains(&listing.id) {
            dupes.push(listing.id.clone());
        }
    }
    dupes
}
