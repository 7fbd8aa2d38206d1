//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Lifecycle
//!
//! `run` is the screen's create hook: it builds the listing source, the
//! surfaces, and dispatches the initial `LoadRequested`. Teardown is the
//! terminal-mode guard's `Drop` plus `ratatui::restore()`.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (fetch in flight, camera easing, notice on screen):
//!   draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
pub mod share;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::screen::{HostEffect, Surfaces, dispatch};
use crate::core::share::SharePayload;
use crate::core::state::App;
use crate::listings::{HttpListingSource, ListingSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CarouselEvent, CarouselState, DetailListEvent, DetailListState, MapEvent, MapViewState,
    ShareSheetEvent, ShareSheetState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Map,
    Carousel,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Map => Focus::Carousel,
            Focus::Carousel => Focus::List,
            Focus::List => Focus::Map,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Map => Focus::List,
            Focus::Carousel => Focus::Map,
            Focus::List => Focus::Carousel,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub map: MapViewState,
    pub detail_list: DetailListState,
    pub carousel: CarouselState,
    pub focus: Focus,
    pub share_sheet: Option<ShareSheetState>,
    pub share_command: Option<String>,
    pub notice_ttl: Duration,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            map: MapViewState::new(
                config.initial_center,
                config.zoom,
                config.min_zoom,
                config.max_zoom,
            ),
            detail_list: DetailListState::new(),
            carousel: CarouselState::new(),
            focus: Focus::Carousel,
            share_sheet: None,
            share_command: config.share_command.clone(),
            notice_ttl: config.notice_ttl,
        }
    }

    /// Borrow the three surfaces for `core::screen::dispatch`.
    pub fn surfaces(&mut self) -> Surfaces<'_> {
        Surfaces {
            detail: &mut self.detail_list,
            carousel: &mut self.carousel,
            map: &mut self.map,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        let config = crate::core::config::resolve(
            &crate::core::config::StaymapConfig::default(),
            &crate::core::config::CliOverrides::default(),
        );
        let mut state = Self::new(&config);
        state.share_command = None;
        state
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one terminal event into at most one core action.
///
/// Focus changes, highlight movement, zoom and overlay handling happen here
/// directly since they never touch core state.
pub fn route_event(tui: &mut TuiState, app: &App, event: &TuiEvent, now: Instant) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The share sheet swallows everything while open
    if let Some(sheet) = tui.share_sheet.as_mut() {
        if let Some(ShareSheetEvent::Dismiss) = sheet.handle_event(event) {
            tui.share_sheet = None;
        }
        return None;
    }

    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Reload => Some(Action::LoadRequested),
        TuiEvent::Escape => app.notice.as_ref().map(|_| Action::DismissNotice),
        TuiEvent::NextFocus => {
            tui.focus = tui.focus.next();
            None
        }
        TuiEvent::PrevFocus => {
            tui.focus = tui.focus.prev();
            None
        }
        TuiEvent::MouseClick(col, row) => route_click(tui, *col, *row, now),
        _ => match tui.focus {
            Focus::Map => tui.map.handle_event(event).map(|e| match e {
                MapEvent::MarkerTapped(id) => Action::MarkerTapped(id),
            }),
            Focus::Carousel => tui.carousel.handle_event(event).map(|e| match e {
                CarouselEvent::PageChanged(page) => Action::CarouselPageChanged(page),
                CarouselEvent::Activated(id) => Action::CarouselItemActivated(id),
            }),
            Focus::List => tui.detail_list.handle_event(event).map(|e| match e {
                DetailListEvent::Activated(id) => Action::ListItemActivated(id),
            }),
        },
    }
}

fn route_click(tui: &mut TuiState, col: u16, row: u16, now: Instant) -> Option<Action> {
    if tui.map.last_inner.is_some_and(|r| r.contains((col, row).into())) {
        tui.focus = Focus::Map;
        return tui.map.marker_at(col, row, now).map(Action::MarkerTapped);
    }
    if tui.detail_list.last_inner.is_some_and(|r| r.contains((col, row).into())) {
        tui.focus = Focus::List;
        return tui
            .detail_list
            .click(col, row)
            .map(|DetailListEvent::Activated(id)| Action::ListItemActivated(id));
    }
    if tui.carousel.contains(col, row) {
        tui.focus = Focus::Carousel;
        return tui
            .carousel
            .current()
            .map(|l| Action::CarouselItemActivated(l.id.clone()));
    }
    None
}

/// Open the share sheet and, if configured, pipe the text to the share command.
/// Returns a notice for the user when the command fails.
fn share(tui: &mut TuiState, payload: SharePayload) -> Option<Action> {
    let mut sheet = ShareSheetState::new(payload);
    let mut failure = None;
    if let Some(command) = &tui.share_command {
        match share::run_share_command(command, &sheet.payload.text) {
            Ok(program) => sheet.delivery = Some(format!("Sent to {program}")),
            Err(e) => {
                warn!("Share command failed: {}", e);
                failure = Some(Action::Notify(format!("Share failed: {e}")));
            }
        }
    }
    tui.share_sheet = Some(sheet);
    failure
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn ListingSource> =
        match HttpListingSource::new(config.endpoint.clone(), config.timeout) {
            Ok(source) => Arc::new(source),
            Err(e) => return Err(std::io::Error::other(e.to_string())),
        };
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut pending: Vec<Action> = vec![Action::LoadRequested];

    'event_loop: loop {
        // Drain queued actions; a share may queue a follow-up notice
        while !pending.is_empty() {
            needs_redraw = true;
            for action in std::mem::take(&mut pending) {
                let effects = dispatch(&mut app, action, &mut tui.surfaces());
                for effect in effects {
                    match effect {
                        HostEffect::Quit => break 'event_loop,
                        HostEffect::SpawnFetch => spawn_fetch(source.clone(), tx.clone()),
                        HostEffect::Share(payload) => pending.extend(share(&mut tui, payload)),
                    }
                }
            }
        }

        let now = Instant::now();
        if let Some(notice) = &app.notice
            && notice.is_expired(tui.notice_ttl, now)
        {
            pending.push(Action::DismissNotice);
            continue;
        }

        let animating = app.is_loading || app.notice.is_some() || tui.map.is_animating(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&mut tui, &app, &event, Instant::now()) {
                pending.push(action);
            }
        }

        // Fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            pending.push(action);
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_fetch(source: Arc<dyn ListingSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning listings fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_listings().await {
            Ok(batch) => Action::FetchSucceeded(batch),
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Fetch finished after teardown: receiver dropped");
        }
    });
}
