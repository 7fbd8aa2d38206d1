//! # Detail List Component
//!
//! Vertical list with one two-line row per listing: title on the first
//! line, price and image URL on the second.
//!
//! `DetailListState` is the `Presentation` the core renders into;
//! `DetailList` is the per-frame wrapper that draws it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::listing::{Listing, ListingId};
use crate::core::presentation::{ListDiff, Presentation, diff};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ROW_HEIGHT: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailListEvent {
    Activated(ListingId),
}

#[derive(Default)]
pub struct DetailListState {
    pub items: Vec<Listing>,
    pub list_state: ListState,
    /// Inner area from the last render, for mouse hit testing.
    pub last_inner: Option<Rect>,
    /// Set when the items changed since the rows were last built.
    pub dirty: bool,
    /// Rows built at `rows_width`, reused until the items or the width change.
    rows: Vec<ListItem<'static>>,
    rows_width: Option<usize>,
}

impl DetailListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Row index under a mouse click, accounting for scroll offset.
    pub fn index_at(&self, col: u16, row: u16) -> Option<usize> {
        let inner = self.last_inner?;
        if !inner.contains((col, row).into()) {
            return None;
        }
        let index = self.list_state.offset() + usize::from((row - inner.y) / ROW_HEIGHT);
        (index < self.items.len()).then_some(index)
    }

    /// Select and activate the row under a mouse click.
    pub fn click(&mut self, col: u16, row: u16) -> Option<DetailListEvent> {
        let index = self.index_at(col, row)?;
        self.list_state.select(Some(index));
        Some(DetailListEvent::Activated(self.items[index].id.clone()))
    }
}

impl Presentation for DetailListState {
    fn render(&mut self, collection: &[Listing]) -> ListDiff {
        let d = diff(&self.items, collection);
        if d.is_unchanged() {
            return d;
        }
        // Keep the selection on the same listing when it survives the update.
        let selected_id = self
            .selected()
            .and_then(|i| self.items.get(i))
            .map(|l| l.id.clone());
        self.items = collection.to_vec();
        let new_selection = match selected_id {
            Some(id) => self
                .items
                .iter()
                .position(|l| l.id == id)
                .or_else(|| (!self.items.is_empty()).then_some(0)),
            None => None,
        };
        self.list_state.select(new_selection);
        if new_selection.is_none() {
            *self.list_state.offset_mut() = 0;
        }
        self.dirty = true;
        d
    }

    fn item_ids(&self) -> Vec<ListingId> {
        self.items.iter().map(|l| l.id.clone()).collect()
    }
}

impl EventHandler for DetailListState {
    type Event = DetailListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailListEvent> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        match event {
            TuiEvent::Up => {
                let i = self.selected().map_or(last, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
                None
            }
            TuiEvent::Down => {
                let i = self.selected().map_or(0, |i| (i + 1).min(last));
                self.list_state.select(Some(i));
                None
            }
            TuiEvent::Enter => self
                .selected()
                .and_then(|i| self.items.get(i))
                .map(|l| DetailListEvent::Activated(l.id.clone())),
            _ => None,
        }
    }
}

/// Truncate to `max_width` display columns, adding "…" if anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub struct DetailList<'a> {
    state: &'a mut DetailListState,
    focused: bool,
}

impl<'a> DetailList<'a> {
    pub fn new(state: &'a mut DetailListState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Component for DetailList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Listings ({}) ", self.state.items.len()));
        let inner = block.inner(area);
        self.state.last_inner = Some(inner);

        if self.state.items.is_empty() {
            let empty = Paragraph::new("No listings yet. Press r to reload.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = usize::from(inner.width);
        if self.state.dirty || self.state.rows_width != Some(width) {
            self.state.rows = build_rows(&self.state.items, width);
            self.state.rows_width = Some(width);
            self.state.dirty = false;
        }

        let list = List::new(self.state.rows.clone())
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn build_rows(items: &[Listing], width: usize) -> Vec<ListItem<'static>> {
    items
        .iter()
        .map(|listing| {
            let title = truncate_to_width(&listing.title, width);
            let price_width = listing.price.width();
            let url = truncate_to_width(&listing.image_url, width.saturating_sub(price_width + 2));
            ListItem::new(vec![
                Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
                Line::from(vec![
                    Span::styled(listing.price.clone(), Style::default().fg(Color::Green)),
                    Span::raw("  "),
                    Span::styled(url, Style::default().fg(Color::DarkGray)),
                ]),
            ])
        })
        .collect()
}
