//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar
//! - `NoticeToast`: Transient notice over the body
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! each frame to render. The state types are also the surfaces the core
//! renders into:
//!
//! - `MapViewState` (`MapSurface`) / `MapView`
//! - `DetailListState` (`Presentation`) / `DetailList`
//! - `CarouselState` (`Carousel`) / `CarouselView`
//! - `ShareSheetState` / `ShareSheet` (overlay)
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top status bar)
//! ├── map_view.rs     (braille map, camera, markers)
//! ├── detail_list.rs  (vertical listing rows)
//! ├── carousel.rs     (one-card pager)
//! ├── notice.rs       (toast)
//! └── share_sheet.rs  (share overlay)
//! ```

pub mod carousel;
pub mod detail_list;
pub mod map_view;
pub mod notice;
pub mod share_sheet;
mod title_bar;

pub use carousel::{CarouselEvent, CarouselState, CarouselView};
pub use detail_list::{DetailList, DetailListEvent, DetailListState};
pub use map_view::{MapEvent, MapView, MapViewState};
pub use notice::NoticeToast;
pub use share_sheet::{ShareSheet, ShareSheetEvent, ShareSheetState};
pub use title_bar::TitleBar;
