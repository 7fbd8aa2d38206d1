//! # Actions
//!
//! Everything that can happen on the listing screen becomes an `Action`.
//! User taps a marker? That's `Action::MarkerTapped(id)`.
//! The fetch completes? That's `Action::FetchSucceeded(batch)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the caller must carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::bridge::{self, Command};
use crate::core::listing::{Listing, ListingId};
use crate::core::state::{App, Notice};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Screen load or manual reload.
    LoadRequested,
    FetchSucceeded(Vec<Listing>),
    FetchFailed(String),
    MarkerTapped(ListingId),
    CarouselPageChanged(usize),
    ListItemActivated(ListingId),
    CarouselItemActivated(ListingId),
    /// Raise a notice from outside the core (e.g. a failed share command).
    Notify(String),
    DismissNotice,
    Quit,
}

/// What the caller must do after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnFetch,
    /// The store was replaced; every presentation must re-render.
    Refresh,
    Navigate(Command),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadRequested => {
            if app.is_loading {
                debug!("Load requested while a fetch is in flight, ignoring");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Loading listings...");
            Effect::SpawnFetch
        }
        Action::FetchSucceeded(batch) => {
            info!("Fetch succeeded: {} listings", batch.len());
            app.is_loading = false;
            app.store.replace(batch);
            app.last_updated = Some(Local::now());
            app.status_message = format!("{} listings", app.store.len());
            Effect::Refresh
        }
        Action::FetchFailed(message) => {
            warn!("Fetch failed: {}", message);
            app.is_loading = false;
            app.status_message = String::from("Fetch failed");
            app.notice = Some(Notice::error(message));
            Effect::None
        }
        Action::MarkerTapped(id) => navigate(bridge::on_marker_tapped(app.store.listings(), &id), "marker", &id),
        Action::CarouselPageChanged(index) => {
            match bridge::on_carousel_page_changed(app.store.listings(), index) {
                Some(command) => Effect::Navigate(command),
                None => {
                    debug!("Carousel page {} out of range, ignoring", index);
                    Effect::None
                }
            }
        }
        Action::ListItemActivated(id) => {
            navigate(bridge::on_list_item_activated(app.store.listings(), &id), "list row", &id)
        }
        Action::CarouselItemActivated(id) => navigate(
            bridge::on_carousel_item_activated(app.store.listings(), &id, &app.promo_prefix),
            "carousel card",
            &id,
        ),
        Action::Notify(message) => {
            app.notice = Some(Notice::info(message));
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => {
            app.store.clear();
            Effect::Quit
        }
    }
}

fn navigate(command: Option<Command>, source: &str, id: &ListingId) -> Effect {
    match command {
        Some(command) => Effect::Navigate(command),
        None => {
            debug!("Stale {} id {}, ignoring", source, id);
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::{CameraAnimation, CameraUpdate};
    use crate::core::listing::LatLng;
    use crate::core::state::NoticeKind;
    use crate::test_support::{listing, test_app};

    #[test]
    fn test_load_requested_spawns_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::LoadRequested), Effect::SpawnFetch);
        assert!(app.is_loading);
        assert_eq!(update(&mut app, Action::LoadRequested), Effect::None);
    }

    #[test]
    fn test_fetch_success_replaces_store() {
        let mut app = test_app();
        update(&mut app, Action::LoadRequested);
        let effect = update(
            &mut app,
            Action::FetchSucceeded(vec![listing(1, 37.1, 127.1), listing(2, 37.2, 127.2)]),
        );
        assert_eq!(effect, Effect::Refresh);
        assert!(!app.is_loading);
        assert_eq!(app.store.len(), 2);
        assert!(app.last_updated.is_some());
        assert_eq!(app.status_message, "2 listings");
    }

    #[test]
    fn test_fetch_failure_keeps_store_and_raises_notice() {
        let mut app = test_app();
        update(&mut app, Action::FetchSucceeded(vec![listing(1, 0.0, 0.0)]));
        update(&mut app, Action::LoadRequested);

        let effect = update(&mut app, Action::FetchFailed("network error: refused".into()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.store.len(), 1);
        assert!(!app.is_loading);
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("refused"));
    }

    #[test]
    fn test_marker_and_page_navigation() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchSucceeded(vec![listing(1, 37.1, 127.1), listing(2, 37.2, 127.2)]),
        );
        assert_eq!(
            update(&mut app, Action::MarkerTapped(ListingId::Int(2))),
            Effect::Navigate(Command::ScrollCarouselTo(1))
        );
        assert_eq!(
            update(&mut app, Action::CarouselPageChanged(0)),
            Effect::Navigate(Command::MoveCamera(
                CameraUpdate::scroll_to(LatLng::new(37.1, 127.1)).animate(CameraAnimation::Easing)
            ))
        );
        assert_eq!(update(&mut app, Action::CarouselPageChanged(5)), Effect::None);
    }

    #[test]
    fn test_stale_marker_after_refetch() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchSucceeded(vec![listing(1, 37.1, 127.1), listing(2, 37.2, 127.2)]),
        );
        update(&mut app, Action::FetchSucceeded(vec![listing(2, 37.2, 127.2)]));
        assert_eq!(update(&mut app, Action::MarkerTapped(ListingId::Int(1))), Effect::None);
    }

    #[test]
    fn test_card_activation_uses_promo_prefix() {
        let mut app = test_app();
        app.promo_prefix = "SALE".into();
        update(&mut app, Action::FetchSucceeded(vec![listing(1, 0.0, 0.0)]));
        match update(&mut app, Action::CarouselItemActivated(ListingId::Int(1))) {
            Effect::Navigate(Command::Share(payload)) => assert!(payload.text.starts_with("SALE ")),
            other => panic!("expected share, got {other:?}"),
        }
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = test_app();
        update(&mut app, Action::Notify("copied".into()));
        assert!(app.notice.is_some());
        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_quit_discards_listings() {
        let mut app = test_app();
        update(&mut app, Action::FetchSucceeded(vec![listing(1, 0.0, 0.0)]));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert!(app.store.is_empty());
    }
}
