//! # Core Application Logic
//!
//! This module contains staymap's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Listing store        │
//!                    │  • Selection bridge     │
//!                    │  • update() (reducer)   │
//!                    │  • dispatch() (screen)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Presentation / Carousel / MapSurface
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Detail    │      │  Carousel  │      │    Map     │
//!     │   list     │      │  (pager)   │      │  (canvas)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`listing`]: The `Listing` entity and its wire payload
//! - [`store`]: `ListingStore`, replaced wholesale on every fetch
//! - [`bridge`]: Selection bridge, event on one surface → command for another
//! - [`presentation`]: Traits the UI implements, plus the id/content diff
//! - [`state`]: The `App` struct, all core state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`screen`]: `dispatch()`, which routes commands to the surfaces
//! - [`share`]: Share text for a listing
//! - [`config`]: `~/.staymap/config.toml`, env vars and CLI overrides

pub mod action;
pub mod bridge;
pub mod config;
pub mod listing;
pub mod presentation;
pub mod screen;
pub mod share;
pub mod state;
pub mod store;
