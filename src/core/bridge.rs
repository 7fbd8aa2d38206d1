//! # Selection Bridge
//!
//! Keeps the map and the carousel pointed at the same listing. An event on
//! one surface becomes a navigation command for the other:
//!
//! ```text
//! marker tapped(id)        ──►  ScrollCarouselTo(index of id)
//! carousel page(index)     ──►  MoveCamera(lat, lng, easing)
//! list row activated(id)   ──►  MoveCamera(lat, lng, instant)
//! carousel card(id)        ──►  Share(payload)
//! ```
//!
//! Lookups go through the listing `id`, never through a position shared
//! between surfaces. A miss (stale marker, out-of-range page) yields no
//! command; it is not an error. With duplicate ids the first match wins.

use crate::core::listing::{LatLng, Listing, ListingId};
use crate::core::share::SharePayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAnimation {
    None,
    Easing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraUpdate {
    pub target: LatLng,
    pub animation: CameraAnimation,
}

impl CameraUpdate {
    pub fn scroll_to(target: LatLng) -> Self {
        Self {
            target,
            animation: CameraAnimation::None,
        }
    }

    pub fn animate(mut self, animation: CameraAnimation) -> Self {
        self.animation = animation;
        self
    }
}

/// A navigation command for one of the presentations.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScrollCarouselTo(usize),
    MoveCamera(CameraUpdate),
    Share(SharePayload),
}

/// Index of the first listing with the given id.
pub fn position_of(collection: &[Listing], id: &ListingId) -> Option<usize> {
    collection.iter().position(|listing| &listing.id == id)
}

fn find<'a>(collection: &'a [Listing], id: &ListingId) -> Option<&'a Listing> {
    collection.iter().find(|listing| &listing.id == id)
}

pub fn on_marker_tapped(collection: &[Listing], id: &ListingId) -> Option<Command> {
    position_of(collection, id).map(Command::ScrollCarouselTo)
}

pub fn on_carousel_page_changed(collection: &[Listing], index: usize) -> Option<Command> {
    let listing = collection.get(index)?;
    Some(Command::MoveCamera(
        CameraUpdate::scroll_to(listing.position()).animate(CameraAnimation::Easing),
    ))
}

pub fn on_list_item_activated(collection: &[Listing], id: &ListingId) -> Option<Command> {
    find(collection, id).map(|listing| Command::MoveCamera(CameraUpdate::scroll_to(listing.position())))
}

pub fn on_carousel_item_activated(
    collection: &[Listing],
    id: &ListingId,
    promo_prefix: &str,
) -> Option<Command> {
    find(collection, id).map(|listing| Command::Share(SharePayload::for_listing(promo_prefix, listing)))
}
