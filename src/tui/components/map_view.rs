//! # Map View Component
//!
//! A braille canvas standing in for a slippy map. Markers are plotted at
//! their coordinates; the camera decides which slice of the world is
//! visible.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MapViewState` lives in `TuiState` and implements `MapSurface`
//! - `MapView` is created each frame with borrowed state
//!
//! ## Projection
//!
//! Each terminal column covers `360 / (256 · 2^zoom) · 8` degrees of
//! longitude (one cell ≈ 8 px of a 256 px world tile). Rows are twice as
//! tall as columns and shrink with `cos(lat)`, which is close enough to
//! Web Mercator at city scale.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders};

use crate::core::bridge::{CameraAnimation, CameraUpdate};
use crate::core::listing::{LatLng, ListingId};
use crate::core::presentation::{MapSurface, Marker};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EASING_DURATION: Duration = Duration::from_millis(400);

/// Visible slice of the world, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl Viewport {
    pub fn around(center: LatLng, zoom: f64, cols: u16, rows: u16) -> Self {
        let col_deg = degrees_per_column(zoom);
        let row_deg = col_deg * 2.0 * center.lat.to_radians().cos().abs().max(0.01);
        let half_w = col_deg * f64::from(cols) / 2.0;
        let half_h = row_deg * f64::from(rows) / 2.0;
        Self {
            west: center.lng - half_w,
            east: center.lng + half_w,
            south: center.lat - half_h,
            north: center.lat + half_h,
        }
    }

    pub fn contains(&self, p: LatLng) -> bool {
        (self.west..=self.east).contains(&p.lng) && (self.south..=self.north).contains(&p.lat)
    }

    /// Coordinate under the center of terminal cell `(col, row)` of `inner`.
    pub fn cell_to_latlng(&self, inner: Rect, col: u16, row: u16) -> Option<LatLng> {
        if inner.width == 0 || inner.height == 0 || !inner.contains((col, row).into()) {
            return None;
        }
        let fx = (f64::from(col - inner.x) + 0.5) / f64::from(inner.width);
        let fy = (f64::from(row - inner.y) + 0.5) / f64::from(inner.height);
        Some(LatLng::new(
            self.north - fy * (self.north - self.south),
            self.west + fx * (self.east - self.west),
        ))
    }

    /// Size of one terminal cell in degrees, as `(lat, lng)`.
    pub fn cell_size(&self, inner: Rect) -> (f64, f64) {
        (
            (self.north - self.south) / f64::from(inner.height.max(1)),
            (self.east - self.west) / f64::from(inner.width.max(1)),
        )
    }
}

pub fn degrees_per_column(zoom: f64) -> f64 {
    360.0 / (256.0 * 2f64.powf(zoom)) * 8.0
}

/// Index of the marker closest to `point`, if one lies within one cell on both axes.
/// Equal distances resolve to the earlier marker.
pub fn nearest_marker(markers: &[Marker], point: LatLng, cell: (f64, f64)) -> Option<usize> {
    let (cell_lat, cell_lng) = cell;
    let mut best: Option<(usize, f64)> = None;
    for (i, marker) in markers.iter().enumerate() {
        let dy = (marker.position.lat - point.lat).abs() / cell_lat;
        let dx = (marker.position.lng - point.lng).abs() / cell_lng;
        if dx > 1.0 || dy > 1.0 {
            continue;
        }
        let dist = dx * dx + dy * dy;
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Cubic ease-in-out over `t ∈ [0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Flight {
    from: LatLng,
    to: LatLng,
    started: Instant,
}

/// Events emitted by the map pane.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    MarkerTapped(ListingId),
}

/// Persistent map state: camera, zoom, markers, highlight.
pub struct MapViewState {
    center: LatLng,
    flight: Option<Flight>,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub markers: Vec<Marker>,
    /// Keyboard cursor over `markers`.
    pub highlighted: Option<usize>,
    /// Inner canvas area from the last render, for mouse hit testing.
    pub last_inner: Option<Rect>,
}

impl MapViewState {
    pub fn new(center: LatLng, zoom: f64, min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            center,
            flight: None,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
            markers: Vec::new(),
            highlighted: None,
            last_inner: None,
        }
    }

    /// Camera center at `now`, taking a running easing flight into account.
    pub fn center_at(&self, now: Instant) -> LatLng {
        let Some(flight) = self.flight else {
            return self.center;
        };
        let t = now.saturating_duration_since(flight.started).as_secs_f64()
            / EASING_DURATION.as_secs_f64();
        let k = ease_in_out(t);
        LatLng::new(
            flight.from.lat + (flight.to.lat - flight.from.lat) * k,
            flight.from.lng + (flight.to.lng - flight.from.lng) * k,
        )
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.flight
            .is_some_and(|f| now.saturating_duration_since(f.started) < EASING_DURATION)
    }

    /// The camera's resting target.
    pub fn target(&self) -> LatLng {
        self.flight.map_or(self.center, |f| f.to)
    }

    pub fn move_camera_at(&mut self, update: CameraUpdate, now: Instant) {
        match update.animation {
            CameraAnimation::None => {
                self.flight = None;
                self.center = update.target;
            }
            CameraAnimation::Easing => {
                let from = self.center_at(now);
                self.flight = Some(Flight {
                    from,
                    to: update.target,
                    started: now,
                });
                self.center = update.target;
            }
        }
        log::debug!("Camera → ({:.6}, {:.6}) {:?}", update.target.lat, update.target.lng, update.animation);
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn viewport_at(&self, now: Instant, inner: Rect) -> Viewport {
        Viewport::around(self.center_at(now), self.zoom, inner.width, inner.height)
    }

    /// Marker under a mouse click, if any.
    pub fn marker_at(&self, col: u16, row: u16, now: Instant) -> Option<ListingId> {
        let inner = self.last_inner?;
        let viewport = self.viewport_at(now, inner);
        let point = viewport.cell_to_latlng(inner, col, row)?;
        nearest_marker(&self.markers, point, viewport.cell_size(inner))
            .map(|i| self.markers[i].id.clone())
    }

    fn cycle_highlight(&mut self, forward: bool) {
        let len = self.markers.len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        });
    }
}

impl MapSurface for MapViewState {
    fn show_markers(&mut self, markers: Vec<Marker>) {
        self.highlighted = match self.highlighted {
            _ if markers.is_empty() => None,
            Some(i) => Some(i.min(markers.len() - 1)),
            None => None,
        };
        self.markers = markers;
    }

    fn move_camera(&mut self, update: CameraUpdate) {
        self.move_camera_at(update, Instant::now());
    }
}

impl EventHandler for MapViewState {
    type Event = MapEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MapEvent> {
        match event {
            TuiEvent::Right | TuiEvent::Down => {
                self.cycle_highlight(true);
                None
            }
            TuiEvent::Left | TuiEvent::Up => {
                self.cycle_highlight(false);
                None
            }
            TuiEvent::ZoomIn => {
                self.zoom_by(1.0);
                None
            }
            TuiEvent::ZoomOut => {
                self.zoom_by(-1.0);
                None
            }
            TuiEvent::Enter => self
                .highlighted
                .and_then(|i| self.markers.get(i))
                .map(|m| MapEvent::MarkerTapped(m.id.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the map pane.
pub struct MapView<'a> {
    state: &'a mut MapViewState,
    focused: bool,
    now: Instant,
}

impl<'a> MapView<'a> {
    pub fn new(state: &'a mut MapViewState, focused: bool, now: Instant) -> Self {
        Self {
            state,
            focused,
            now,
        }
    }
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Map  z{:.0} ", self.state.zoom))
            .title_bottom(
                Line::from(format!(
                    " {:.5}, {:.5} ",
                    self.state.target().lat,
                    self.state.target().lng
                ))
                .right_aligned(),
            );

        let inner = block.inner(area);
        self.state.last_inner = Some(inner);
        let viewport = self.state.viewport_at(self.now, inner);
        let center = self.state.center_at(self.now);

        let plain: Vec<(f64, f64)> = self
            .state
            .markers
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.state.highlighted)
            .map(|(_, m)| (m.position.lng, m.position.lat))
            .collect();
        let highlighted = self
            .state
            .highlighted
            .and_then(|i| self.state.markers.get(i))
            .filter(|m| viewport.contains(m.position))
            .map(|m| (m.position.lng, m.position.lat, m.id.to_string()));

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds([viewport.west, viewport.east])
            .y_bounds([viewport.south, viewport.north])
            .paint(move |ctx| {
                ctx.print(
                    center.lng,
                    center.lat,
                    Span::styled("+", Style::default().fg(Color::DarkGray)),
                );
                ctx.draw(&Points {
                    coords: &plain,
                    color: Color::Red,
                });
                ctx.layer();
                for &(x, y) in &plain {
                    ctx.print(x, y, Span::styled("●", Style::default().fg(Color::Red)));
                }
                if let Some((x, y, label)) = &highlighted {
                    ctx.print(
                        *x,
                        *y,
                        Span::styled(
                            format!("◆ #{label}"),
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
