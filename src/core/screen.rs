//! # Screen Controller
//!
//! Runs actions through `update()` and applies the resulting navigation
//! commands to the presentations. The controller owns nothing itself: the
//! caller passes the state and every surface in explicitly.
//!
//! Effects the core cannot carry out (fetching, sharing, quitting) are
//! returned to the caller in the order they were produced.
//!
//! A carousel scroll that actually changes the page is fed back in as
//! `CarouselPageChanged`, the same as a user swipe, so a marker tap ends
//! with the camera centered on that marker's listing.

use log::debug;
use std::collections::VecDeque;

use crate::core::action::{Action, Effect, update};
use crate::core::bridge::Command;
use crate::core::presentation::{Carousel, MapSurface, Marker, Presentation};
use crate::core::share::SharePayload;
use crate::core::state::App;

/// Everything the controller may draw on.
pub struct Surfaces<'a> {
    pub detail: &'a mut dyn Presentation,
    pub carousel: &'a mut dyn Carousel,
    pub map: &'a mut dyn MapSurface,
}

/// Work left for the host after `dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEffect {
    SpawnFetch,
    Share(SharePayload),
    Quit,
}

pub fn dispatch(app: &mut App, action: Action, surfaces: &mut Surfaces<'_>) -> Vec<HostEffect> {
    let mut host = Vec::new();
    let mut queue = VecDeque::from([action]);

    while let Some(action) = queue.pop_front() {
        match update(app, action) {
            Effect::None => {}
            Effect::Quit => host.push(HostEffect::Quit),
            Effect::SpawnFetch => host.push(HostEffect::SpawnFetch),
            Effect::Refresh => refresh(app, surfaces),
            Effect::Navigate(Command::ScrollCarouselTo(index)) => {
                if let Some(page) = surfaces.carousel.scroll_to(index) {
                    queue.push_back(Action::CarouselPageChanged(page));
                }
            }
            Effect::Navigate(Command::MoveCamera(camera)) => surfaces.map.move_camera(camera),
            Effect::Navigate(Command::Share(payload)) => host.push(HostEffect::Share(payload)),
        }
    }
    host
}

/// Push the store's contents to every presentation.
pub fn refresh(app: &App, surfaces: &mut Surfaces<'_>) {
    let listings = app.store.listings();
    let detail_diff = surfaces.detail.render(listings);
    let carousel_diff = surfaces.carousel.render(listings);
    surfaces
        .map
        .show_markers(listings.iter().map(Marker::for_listing).collect());
    debug!(
        "Refreshed presentations (revision {}): detail {:?}, carousel {:?}",
        app.store.revision(),
        detail_diff,
        carousel_diff
    );
}
