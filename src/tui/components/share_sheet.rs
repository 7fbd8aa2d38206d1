//! # Share Sheet Component
//!
//! Overlay showing the share text for a carousel card. If a share command
//! is configured, the text has already been piped to it by the time the
//! sheet opens; the sheet reports where it went.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ShareSheetState` lives in `TuiState` (None = hidden)
//! - `ShareSheet` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::share::SharePayload;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub struct ShareSheetState {
    pub payload: SharePayload,
    /// Where the text went, e.g. "Sent to wl-copy".
    pub delivery: Option<String>,
}

impl ShareSheetState {
    pub fn new(payload: SharePayload) -> Self {
        Self {
            payload,
            delivery: None,
        }
    }
}

pub enum ShareSheetEvent {
    Dismiss,
}

impl EventHandler for ShareSheetState {
    type Event = ShareSheetEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ShareSheetEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Enter | TuiEvent::Quit => Some(ShareSheetEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct ShareSheet<'a> {
    state: &'a ShareSheetState,
}

impl<'a> ShareSheet<'a> {
    pub fn new(state: &'a ShareSheetState) -> Self {
        Self { state }
    }
}

impl Component for ShareSheet<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 40, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" Share listing #{} ", self.state.payload.listing_id))
            .title_bottom(Line::from(" Enter/Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![Line::from(self.state.payload.text.as_str()), Line::from("")];
        if let Some(delivery) = &self.state.delivery {
            lines.push(Line::styled(delivery.as_str(), Style::default().fg(Color::Green)));
        } else {
            lines.push(Line::styled(
                "Copy the text above, or set share.command in ~/.staymap/config.toml",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::ListingId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn payload() -> SharePayload {
        SharePayload {
            listing_id: ListingId::Int(4),
            text: "[Deal] Loft ₩10,000 https://img.example/4.jpg".into(),
        }
    }

    #[test]
    fn test_escape_and_enter_dismiss() {
        let mut s = ShareSheetState::new(payload());
        assert!(matches!(s.handle_event(&TuiEvent::Escape), Some(ShareSheetEvent::Dismiss)));
        assert!(matches!(s.handle_event(&TuiEvent::Enter), Some(ShareSheetEvent::Dismiss)));
        assert!(s.handle_event(&TuiEvent::Left).is_none());
    }

    #[test]
    fn test_sheet_shows_share_text() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ShareSheetState::new(payload());
        state.delivery = Some("Sent to cat".into());

        terminal
            .draw(|f| {
                let area = f.area();
                ShareSheet::new(&state).render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Share listing #4"));
        assert!(text.contains("https://img.example/4.jpg"));
        assert!(text.contains("Sent to cat"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let r = centered_rect(70, 40, outer);
        assert!(r.x >= outer.x && r.right() <= outer.right());
        assert!(r.y >= outer.y && r.bottom() <= outer.bottom());
        assert_eq!(r.width, 70);
        assert_eq!(r.height, 20);
    }
}
