//! # Presentation Contracts
//!
//! The core never draws anything. It talks to the UI through these traits,
//! which the TUI components implement and tests replace with recorders.
//!
//! Rendering diffs the incoming collection against what is displayed:
//! item identity is the listing `id`, content equality is full structural
//! equality. A render that changes nothing lets the surface skip a redraw.

use crate::core::bridge::CameraUpdate;
use crate::core::listing::{LatLng, Listing, ListingId};

/// Result of comparing the displayed items with a new collection.
///
/// Items are matched by id, one occurrence at a time: the n-th `1` in the
/// new collection pairs with the n-th `1` in the old one. Counts are per
/// item, so duplicate ids are counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDiff {
    /// Same id, same content, same position.
    pub kept: usize,
    /// Same id at the same position, different content.
    pub changed: usize,
    /// New items with no unmatched old item of the same id.
    pub inserted: usize,
    /// Old items left unmatched by the new collection.
    pub removed: usize,
    /// Matched items whose position differs.
    pub moved: usize,
}

impl ListDiff {
    pub fn is_unchanged(&self) -> bool {
        self.changed == 0 && self.inserted == 0 && self.removed == 0 && self.moved == 0
    }
}

pub fn diff(old: &[Listing], new: &[Listing]) -> ListDiff {
    let mut result = ListDiff::default();
    let mut matched = vec![false; old.len()];

    for (i, item) in new.iter().enumerate() {
        let slot = old
            .iter()
            .enumerate()
            .position(|(j, o)| !matched[j] && o.id == item.id);
        match slot {
            None => result.inserted += 1,
            Some(j) => {
                matched[j] = true;
                if j != i {
                    result.moved += 1;
                } else if old[j] == *item {
                    result.kept += 1;
                } else {
                    result.changed += 1;
                }
            }
        }
    }
    result.removed = matched.iter().filter(|m| !**m).count();
    result
}

/// A surface that displays the whole listing collection.
pub trait Presentation {
    /// Replace the displayed items. Returns the diff against the previous items.
    fn render(&mut self, collection: &[Listing]) -> ListDiff;

    /// Ids of the displayed items, in display order.
    fn item_ids(&self) -> Vec<ListingId>;
}

/// The paging presentation. One item is "current" at a time.
pub trait Carousel: Presentation {
    /// Make `index` the current page. Returns the new page if it actually changed.
    fn scroll_to(&mut self, index: usize) -> Option<usize>;

    fn current_page(&self) -> Option<usize>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: ListingId,
    pub position: LatLng,
}

impl Marker {
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            position: listing.position(),
        }
    }
}

/// Map camera and marker overlay.
pub trait MapSurface {
    /// Replace every marker on the map.
    fn show_markers(&mut self, markers: Vec<Marker>);

    fn move_camera(&mut self, update: CameraUpdate);
}
