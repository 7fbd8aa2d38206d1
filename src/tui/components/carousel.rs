//! # Carousel Component
//!
//! Horizontal pager showing one listing card at a time, with the page
//! position drawn underneath. Paging with Left/Right emits `PageChanged`;
//! Enter on a card emits `Activated`, which the core turns into a share.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::listing::{Listing, ListingId};
use crate::core::presentation::{Carousel, ListDiff, Presentation, diff};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Dots are only drawn for short carousels; longer ones show "n / total".
const MAX_DOTS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    PageChanged(usize),
    Activated(ListingId),
}

#[derive(Default)]
pub struct CarouselState {
    pub items: Vec<Listing>,
    page: Option<usize>,
    pub last_area: Option<Rect>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Listing> {
        self.page.and_then(|p| self.items.get(p))
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.last_area
            .is_some_and(|area| area.contains((col, row).into()))
    }

    fn set_page(&mut self, page: usize) -> Option<usize> {
        if page >= self.items.len() || self.page == Some(page) {
            return None;
        }
        self.page = Some(page);
        Some(page)
    }
}

impl Presentation for CarouselState {
    fn render(&mut self, collection: &[Listing]) -> ListDiff {
        let d = diff(&self.items, collection);
        if d.is_unchanged() {
            return d;
        }
        self.items = collection.to_vec();
        self.page = match self.page {
            _ if self.items.is_empty() => None,
            Some(p) => Some(p.min(self.items.len() - 1)),
            None => Some(0),
        };
        d
    }

    fn item_ids(&self) -> Vec<ListingId> {
        self.items.iter().map(|l| l.id.clone()).collect()
    }
}

impl Carousel for CarouselState {
    fn scroll_to(&mut self, index: usize) -> Option<usize> {
        self.set_page(index)
    }

    fn current_page(&self) -> Option<usize> {
        self.page
    }
}

impl EventHandler for CarouselState {
    type Event = CarouselEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CarouselEvent> {
        let page = self.page?;
        match event {
            TuiEvent::Left | TuiEvent::Up => page
                .checked_sub(1)
                .and_then(|p| self.set_page(p))
                .map(CarouselEvent::PageChanged),
            TuiEvent::Right | TuiEvent::Down => self.set_page(page + 1).map(CarouselEvent::PageChanged),
            TuiEvent::Enter => self.current().map(|l| CarouselEvent::Activated(l.id.clone())),
            _ => None,
        }
    }
}

/// "● ○ ○" for short carousels, "3 / 40" otherwise.
pub fn page_indicator(page: usize, total: usize) -> String {
    if total <= MAX_DOTS {
        (0..total)
            .map(|i| if i == page { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        format!("{} / {}", page + 1, total)
    }
}

pub struct CarouselView<'a> {
    state: &'a mut CarouselState,
    focused: bool,
}

impl<'a> CarouselView<'a> {
    pub fn new(state: &'a mut CarouselState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Component for CarouselView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = Some(area);
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Carousel ")
            .title_bottom(Line::from(" ←/→ Page  Enter Share ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (Some(page), Some(listing)) = (self.state.page, self.state.current()) else {
            let empty = Paragraph::new("Nothing to show")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        };

        let [card_area, dots_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let [prev_area, body_area, next_area] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(card_area);

        let arrow = Style::default().fg(Color::Gray);
        if page > 0 {
            frame.render_widget(Paragraph::new(Span::styled("‹", arrow)), prev_area);
        }
        if page + 1 < self.state.items.len() {
            frame.render_widget(
                Paragraph::new(Span::styled("›", arrow)).alignment(Alignment::Right),
                next_area,
            );
        }

        // Title wraps; price and image URL take one line each below it.
        let title_rows = usize::from(body_area.height.saturating_sub(2)).max(1);
        let mut lines: Vec<Line> = textwrap::wrap(&listing.title, usize::from(body_area.width.max(1)))
            .into_iter()
            .take(title_rows)
            .map(|l| {
                Line::from(Span::styled(
                    l.into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        lines.push(Line::from(Span::styled(
            listing.price.clone(),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(Span::styled(
            listing.image_url.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), body_area);

        let dots = Paragraph::new(page_indicator(page, self.state.items.len()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(dots, dots_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    fn filled(n: i64) -> CarouselState {
        let mut s = CarouselState::new();
        let batch: Vec<_> = (1..=n).map(|i| listing(i, i as f64, i as f64)).collect();
        s.render(&batch);
        s
    }

    #[test]
    fn test_first_render_selects_first_page() {
        let s = filled(3);
        assert_eq!(s.current_page(), Some(0));
        assert!(CarouselState::new().current_page().is_none());
    }

    #[test]
    fn test_paging_emits_page_changes_within_bounds() {
        let mut s = filled(2);
        assert_eq!(s.handle_event(&TuiEvent::Left), None);
        assert_eq!(s.handle_event(&TuiEvent::Right), Some(CarouselEvent::PageChanged(1)));
        assert_eq!(s.handle_event(&TuiEvent::Right), None);
        assert_eq!(s.handle_event(&TuiEvent::Left), Some(CarouselEvent::PageChanged(0)));
    }

    #[test]
    fn test_enter_activates_current_card() {
        let mut s = filled(3);
        s.scroll_to(2);
        assert_eq!(
            s.handle_event(&TuiEvent::Enter),
            Some(CarouselEvent::Activated(ListingId::Int(3)))
        );
    }

    #[test]
    fn test_scroll_to_reports_only_real_changes() {
        let mut s = filled(3);
        assert_eq!(s.scroll_to(0), None);
        assert_eq!(s.scroll_to(2), Some(2));
        assert_eq!(s.scroll_to(7), None);
        assert_eq!(s.current_page(), Some(2));
    }

    #[test]
    fn test_shrinking_batch_clamps_page() {
        let mut s = filled(5);
        s.scroll_to(4);
        s.render(&[listing(1, 0.0, 0.0), listing(2, 0.0, 0.0)]);
        assert_eq!(s.current_page(), Some(1));
        s.render(&[]);
        assert_eq!(s.current_page(), None);
        assert_eq!(s.handle_event(&TuiEvent::Right), None);
    }

    #[test]
    fn test_dropping_a_duplicate_drops_its_page() {
        let mut s = CarouselState::new();
        s.render(&[listing(2, 0.0, 0.0), listing(1, 0.0, 0.0), listing(1, 5.0, 5.0)]);
        s.scroll_to(2);
        s.render(&[listing(2, 0.0, 0.0), listing(1, 0.0, 0.0)]);
        assert_eq!(s.item_ids(), vec![ListingId::Int(2), ListingId::Int(1)]);
        assert_eq!(s.current_page(), Some(1));
        assert_eq!(s.handle_event(&TuiEvent::Right), None);
    }

    #[test]
    fn test_page_indicator() {
        assert_eq!(page_indicator(1, 3), "○ ● ○");
        assert_eq!(page_indicator(4, 40), "5 / 40");
    }
}
