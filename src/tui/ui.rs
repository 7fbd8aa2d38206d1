use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CarouselView, DetailList, MapView, NoticeToast, ShareSheet, TitleBar,
};
use crate::tui::{Focus, TuiState};

const CAROUSEL_HEIGHT: u16 = 8;

/// Screen regions, top to bottom: title, body (map | list), carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub body: Rect,
    pub map: Rect,
    pub list: Rect,
    pub carousel: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min, Percentage};
    let [title, body, carousel] =
        Layout::vertical([Length(1), Min(0), Length(CAROUSEL_HEIGHT)]).areas(area);
    let [map, list] = Layout::horizontal([Percentage(60), Percentage(40)]).areas(body);
    ScreenLayout {
        title,
        body,
        map,
        list,
        carousel,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize, now: Instant) {
    let area = frame.area();
    let layout = screen_layout(area);

    TitleBar {
        listing_count: app.store.len(),
        last_updated: app.last_updated,
        status_message: app.status_message.clone(),
        is_loading: app.is_loading,
        spinner_frame,
    }
    .render(frame, layout.title);

    MapView::new(&mut tui.map, tui.focus == Focus::Map, now).render(frame, layout.map);
    DetailList::new(&mut tui.detail_list, tui.focus == Focus::List).render(frame, layout.list);
    CarouselView::new(&mut tui.carousel, tui.focus == Focus::Carousel).render(frame, layout.carousel);

    if let Some(notice) = &app.notice {
        NoticeToast { notice }.render(frame, layout.body);
    }

    if let Some(sheet) = &tui.share_sheet {
        ShareSheet::new(sheet).render(frame, area);
    }
}
