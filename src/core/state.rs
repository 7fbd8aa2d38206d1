//! # Application State
//!
//! Core state for the listing screen. Domain data only; presentation
//! state (focus, scroll, camera animation) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: ListingStore           // listings from the last good fetch
//! ├── is_loading: bool              // fetch in flight
//! ├── notice: Option<Notice>        // transient, dismissible message
//! ├── status_message: String        // title bar text
//! ├── last_updated: Option<DateTime>// time of the last store replacement
//! └── promo_prefix: String          // share text prefix
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::share::DEFAULT_PROMO_PREFIX;
use crate::core::store::ListingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A toast-style message. Expires on its own or is dismissed with Esc.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: Instant,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= ttl
    }
}

pub struct App {
    pub store: ListingStore,
    pub is_loading: bool,
    pub notice: Option<Notice>,
    pub status_message: String,
    pub last_updated: Option<DateTime<Local>>,
    pub promo_prefix: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: ListingStore::new(),
            is_loading: false,
            notice: None,
            status_message: String::from("Welcome to staymap!"),
            last_updated: None,
            promo_prefix: DEFAULT_PROMO_PREFIX.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new();
        app.promo_prefix = config.promo_prefix.clone();
        app
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to staymap!");
        assert!(!app.is_loading);
        assert!(app.store.is_empty());
        assert_eq!(app.promo_prefix, DEFAULT_PROMO_PREFIX);
    }

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::error("boom");
        let later = notice.raised_at + Duration::from_secs(3);
        assert!(!notice.is_expired(Duration::from_secs(3), notice.raised_at));
        assert!(notice.is_expired(Duration::from_secs(3), later));
    }
}
