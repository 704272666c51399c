//! Screen layout and shared rendering helpers.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use super::panel::Panel;

/// Renders the whole application: location, game, notes, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Location
            Constraint::Length(10), // Board
            Constraint::Min(6),     // Notes
            Constraint::Length(1),  // Help
        ])
        .split(frame.area());

    app.location().render(frame, chunks[0], false);
    app.game().render(frame, chunks[1], app.focus() == Focus::Game);
    app.notes().render(frame, chunks[2], app.focus() == Focus::Notes);

    let help = Paragraph::new("Tab: switch panel  u: refresh location  r: restart game  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);

    app.game().render_overlay(frame);
}

/// Bordered block whose border lights up when the panel has focus.
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(style)
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
