//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::bridge::CameraUpdate;
use crate::core::listing::{Listing, ListingId};
use crate::core::presentation::{Carousel, ListDiff, MapSurface, Marker, Presentation, diff};
use crate::core::state::App;

/// A listing with an integer id and predictable display fields.
pub fn listing(id: i64, lat: f64, lng: f64) -> Listing {
    Listing {
        id: ListingId::Int(id),
        title: format!("Listing {id}"),
        price: format!("₩{},000", id * 10),
        image_url: format!("https://img.example/{id}.jpg"),
        lat,
        lng,
    }
}

/// Creates a test App with default settings.
pub fn test_app() -> App {
    App::new()
}

/// Presentation that remembers what it was given.
#[derive(Default)]
pub struct RecordingList {
    pub items: Vec<Listing>,
    pub render_count: usize,
}

impl Presentation for RecordingList {
    fn render(&mut self, collection: &[Listing]) -> ListDiff {
        self.render_count += 1;
        let d = diff(&self.items, collection);
        self.items = collection.to_vec();
        d
    }

    fn item_ids(&self) -> Vec<ListingId> {
        self.items.iter().map(|l| l.id.clone()).collect()
    }
}

#[derive(Default)]
pub struct RecordingCarousel {
    pub list: RecordingList,
    pub page: Option<usize>,
    pub scrolls: Vec<usize>,
}

impl Presentation for RecordingCarousel {
    fn render(&mut self, collection: &[Listing]) -> ListDiff {
        self.page = match self.page {
            _ if collection.is_empty() => None,
            Some(p) => Some(p.min(collection.len() - 1)),
            None => Some(0),
        };
        self.list.render(collection)
    }

    fn item_ids(&self) -> Vec<ListingId> {
        self.list.item_ids()
    }
}

impl Carousel for RecordingCarousel {
    fn scroll_to(&mut self, index: usize) -> Option<usize> {
        self.scrolls.push(index);
        if index >= self.list.items.len() || self.page == Some(index) {
            return None;
        }
        self.page = Some(index);
        Some(index)
    }

    fn current_page(&self) -> Option<usize> {
        self.page
    }
}

#[derive(Default)]
pub struct RecordingMap {
    pub markers: Vec<Marker>,
    pub camera_moves: Vec<CameraUpdate>,
}

impl MapSurface for RecordingMap {
    fn show_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    fn move_camera(&mut self, update: CameraUpdate) {
        self.camera_moves.push(update);
    }
}
