//! Toast-style notice drawn over the bottom of the body area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;

pub struct NoticeToast<'a> {
    pub notice: &'a Notice,
}

/// A box three rows tall, at most 60 columns wide, centered at the bottom of `area`.
pub fn toast_rect(area: Rect) -> Rect {
    let width = area.width.min(60);
    let height = area.height.min(3);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height,
        width,
        height,
    }
}

impl Component for NoticeToast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = toast_rect(area);
        let (color, title) = match self.notice.kind {
            NoticeKind::Error => (Color::Red, " Error · Esc "),
            NoticeKind::Info => (Color::Yellow, " Notice · Esc "),
        };
        frame.render_widget(Clear, rect);
        let toast = Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            );
        frame.render_widget(toast, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_is_bottom_centered() {
        let area = Rect::new(0, 1, 100, 20);
        let r = toast_rect(area);
        assert_eq!(r, Rect::new(20, 18, 60, 3));
    }

    #[test]
    fn test_toast_rect_fits_small_area() {
        let area = Rect::new(5, 5, 10, 2);
        let r = toast_rect(area);
        assert_eq!(r, Rect::new(5, 5, 10, 2));
    }
}
