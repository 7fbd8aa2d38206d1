//! # TitleBar Component
//!
//! Top status bar: app name, listing count, time of the last successful
//! fetch, status text, and a spinner while a fetch is in flight.
//!
//! Stateless: every field is a prop filled in by the parent each frame.
//!
//! ```text
//! staymap | 12 listings | updated 14:03:22 | Loading listings... ⠹
//! ```

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub listing_count: usize,
    pub last_updated: Option<DateTime<Local>>,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn text(&self) -> String {
        let mut parts = vec![
            "staymap".to_string(),
            format!("{} listings", self.listing_count),
        ];
        if let Some(at) = self.last_updated {
            parts.push(format!("updated {}", at.format("%H:%M:%S")));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        let mut text = parts.join(" | ");
        if self.is_loading {
            text.push(' ');
            text.push_str(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "   Tab Focus  r Reload  q Quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(line, area);
    }
}
