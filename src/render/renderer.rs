use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{Cell, GameConfig};
use crate::ports::{RenderPort, Snapshot};

const GAME_OVER_TEXT: &str = "Game Over :(";

/// Host-side [`RenderPort`]: keeps the most recent engine snapshot for
/// the frame timer to draw. Clones share the same slot; one lives inside
/// the engine, one stays with the host.
#[derive(Clone, Default)]
pub struct FrameStore {
    latest: Rc<RefCell<Option<Snapshot>>>,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.latest.borrow().clone()
    }
}

impl RenderPort for FrameStore {
    fn present(&mut self, frame: &Snapshot) {
        *self.latest.borrow_mut() = Some(frame.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

/// Draws a snapshot: status header, the wrap-around grid, and a controls
/// footer. Each grid cell is `scale` terminal columns wide.
pub struct Renderer {
    scale: usize,
}

impl Renderer {
    pub fn new(scale: usize) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn draw(&self, frame: &mut Frame, snap: &Snapshot, config: &GameConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // status line
                Constraint::Min(0),    // grid
                Constraint::Length(1), // controls
            ])
            .split(frame.area());

        frame.render_widget(self.status_widget(snap), chunks[0]);

        let grid_area = chunks[1];
        frame.render_widget(self.grid_widget(snap, config), grid_area);

        if snap.over {
            let overlay_area = Rect {
                x: grid_area.x,
                y: grid_area.y + grid_area.height / 2,
                width: grid_area.width,
                height: 1,
            };
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.game_over_widget(), overlay_area);
        }

        frame.render_widget(self.controls_widget(snap), chunks[2]);
    }

    fn kind_at(snap: &Snapshot, cell: Cell) -> CellKind {
        // On the terminal frame the head duplicates a body cell; head wins
        // so the overlap is visible.
        if cell == snap.head() {
            CellKind::Head
        } else if snap.body.contains(&cell) {
            CellKind::Body
        } else if cell == snap.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    fn grid_widget(&self, snap: &Snapshot, config: &GameConfig) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(config.grid_height);

        for y in 0..config.grid_height {
            let mut spans = Vec::with_capacity(config.grid_width);

            for x in 0..config.grid_width {
                let kind = Self::kind_at(snap, Cell::new(x as i32, y as i32));
                let (symbol, style) = match kind {
                    CellKind::Head => (
                        "■",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Body => ("□", Style::default().fg(Color::Green)),
                    CellKind::Food => (
                        "O",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Empty => (".", Style::default().fg(Color::DarkGray)),
                };
                spans.push(Span::styled(
                    format!("{symbol:<width$}", width = self.scale),
                    style,
                ));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn status_widget(&self, snap: &Snapshot) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            snap.status_line(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn game_over_widget(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            GAME_OVER_TEXT,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn controls_widget(&self, snap: &Snapshot) -> Paragraph<'_> {
        let line = if snap.over {
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            body: vec![Cell::new(0, 5), Cell::new(1, 5), Cell::new(2, 5)],
            food: Cell::new(7, 2),
            score: 3,
            over: false,
        }
    }

    #[test]
    fn frame_store_keeps_the_latest_snapshot() {
        let mut store = FrameStore::new();
        assert!(store.latest().is_none());

        let first = snapshot();
        store.present(&first);
        assert_eq!(store.latest(), Some(first.clone()));

        let mut second = snapshot();
        second.score = 4;
        store.present(&second);
        assert_eq!(store.latest(), Some(second));
    }

    #[test]
    fn frame_store_clones_share_the_slot() {
        let mut engine_side = FrameStore::new();
        let host_side = engine_side.clone();

        engine_side.present(&snapshot());
        assert_eq!(host_side.latest(), Some(snapshot()));
    }

    #[test]
    fn cell_classification() {
        let snap = snapshot();
        assert_eq!(Renderer::kind_at(&snap, Cell::new(2, 5)), CellKind::Head);
        assert_eq!(Renderer::kind_at(&snap, Cell::new(0, 5)), CellKind::Body);
        assert_eq!(Renderer::kind_at(&snap, Cell::new(7, 2)), CellKind::Food);
        assert_eq!(Renderer::kind_at(&snap, Cell::new(9, 9)), CellKind::Empty);
    }

    #[test]
    fn duplicate_terminal_head_draws_as_head() {
        let mut snap = snapshot();
        snap.body.push(Cell::new(1, 5)); // collision frame
        snap.over = true;
        assert_eq!(Renderer::kind_at(&snap, Cell::new(1, 5)), CellKind::Head);
    }
}
