//! Tic-tac-toe panel: renders a [`GameState`] and turns keys into moves.

use crossterm::event::{KeyCode, KeyEvent};
use mini_xo::{Coord, GameEngine, GameState, Line, MoveOutcome, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{debug, info, instrument};

use super::input::{keypad_cell, move_cursor};
use super::panel::{KeyOutcome, Panel};
use super::ui::{center_rect, panel_block};

const CENTER: Coord = Coord::ALL[4];

/// State of the game panel.
#[derive(Debug)]
pub struct GamePanel {
    engine: GameEngine,
    cursor: Coord,
    status: String,
    dialog: Option<String>,
}

impl GamePanel {
    /// Creates a panel with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: CENTER,
            status: turn_message(Player::X),
            dialog: None,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.engine.current_state()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the result dialog text while one is shown.
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    /// Forwards a cell selection to the engine and updates the status.
    #[instrument(skip(self), fields(%coord))]
    pub fn select(&mut self, coord: Coord) {
        match self.engine.try_apply_move(coord.row(), coord.col()) {
            Ok(MoveOutcome::Continue { next }) => {
                self.status = turn_message(next);
            }
            Ok(MoveOutcome::Won { winner, line }) => {
                info!(%winner, %line, "Showing result dialog");
                self.status = format!("{} completed the {}", winner, line);
                self.dialog = Some(format!("{} wins!", winner));
            }
            Ok(MoveOutcome::Draw) => {
                info!("Showing draw dialog");
                self.status = "Board full".to_string();
                self.dialog = Some("It's a draw!".to_string());
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status = e.to_string();
            }
        }
    }

    /// Abandons the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.reset();
        self.cursor = CENTER;
        self.dialog = None;
        self.status = turn_message(Player::X);
    }

    /// Acknowledges the result dialog, which starts a new game.
    #[instrument(skip(self))]
    fn dismiss_dialog(&mut self) {
        debug!("Result dialog dismissed");
        self.restart();
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let state = self.engine.state();
        let winning = self.engine.winning_line();
        let separator = Span::styled("───┼───┼───", Style::default().fg(Color::DarkGray));

        let mut lines = Vec::new();
        for row in 0..3 {
            let mut spans = Vec::new();
            for col in 0..3 {
                let Some(coord) = Coord::new(row, col) else {
                    continue;
                };
                spans.push(self.cell_span(state, coord, focused, winning));
                if col < 2 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
            }
            lines.push(TextLine::from(spans));
            if row < 2 {
                lines.push(TextLine::from(separator.clone()));
            }
        }
        lines.push(TextLine::default());
        lines.push(TextLine::from(Span::styled(
            self.status.clone(),
            Style::default().fg(Color::Yellow),
        )));

        let board = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(board, area);
    }

    fn cell_span(
        &self,
        state: &GameState,
        coord: Coord,
        focused: bool,
        winning: Option<Line>,
    ) -> Span<'static> {
        let (symbol, mut style) = match state.grid().get(coord).player() {
            None => ("   ", Style::default().fg(Color::DarkGray)),
            Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        };
        if winning.is_some_and(|line| line.contains(coord)) {
            style = style.bg(Color::Green);
        }
        if focused && coord == self.cursor && self.dialog.is_none() {
            style = style.bg(Color::White).fg(Color::Black);
        }
        Span::styled(symbol, style)
    }

    fn render_dialog(&self, frame: &mut Frame, message: &str) {
        let area = center_rect(frame.area(), 34, 7);
        let text = vec![
            TextLine::from(Span::styled(
                message.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            TextLine::default(),
            TextLine::from("Press Enter to play again"),
        ];
        let dialog = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Game over")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(dialog, area);
    }
}

impl Default for GamePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for GamePanel {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = panel_block("Tic-Tac-Toe", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.render_board(frame, inner, focused);
    }

    fn render_overlay(&self, frame: &mut Frame) {
        if let Some(message) = &self.dialog {
            self.render_dialog(frame, message);
        }
    }

    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if self.dialog.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    self.dismiss_dialog();
                    KeyOutcome::Handled
                }
                _ => KeyOutcome::Ignored,
            };
        }

        if let Some(cursor) = move_cursor(self.cursor, key.code) {
            self.cursor = cursor;
            return KeyOutcome::Handled;
        }
        if let Some(coord) = keypad_cell(key.code) {
            self.cursor = coord;
            self.select(coord);
            return KeyOutcome::Handled;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(self.cursor);
                KeyOutcome::Handled
            }
            KeyCode::Char('r') => {
                self.restart();
                self.status = format!("Game restarted. {}.", turn_message(Player::X));
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn is_modal(&self) -> bool {
        self.dialog.is_some()
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
