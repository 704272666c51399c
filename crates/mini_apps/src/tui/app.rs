//! Application state: the three panels, focus, and global key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, instrument};

use super::game::GamePanel;
use super::location::LocationPanel;
use super::notes::NotesPanel;
use super::panel::{KeyOutcome, Panel};
use crate::location::GeolocationProvider;
use crate::notes::NoteStore;

/// Panel receiving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The tic-tac-toe board.
    Game,
    /// The notes list.
    Notes,
}

/// Main application state.
///
/// Collaborators are injected so the same state machine runs against real
/// storage or test doubles.
#[derive(Debug)]
pub struct App {
    location: LocationPanel,
    game: GamePanel,
    notes: NotesPanel,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates the application around its collaborators.
    #[instrument(skip(store, provider))]
    pub fn new(store: Box<dyn NoteStore>, provider: Box<dyn GeolocationProvider>) -> Self {
        info!("Creating application state");
        Self {
            location: LocationPanel::new(provider),
            game: GamePanel::new(),
            notes: NotesPanel::new(store),
            focus: Focus::Game,
            should_quit: false,
        }
    }

    /// Returns the location panel.
    pub fn location(&self) -> &LocationPanel {
        &self.location
    }

    /// Returns the game panel.
    pub fn game(&self) -> &GamePanel {
        &self.game
    }

    /// Returns the notes panel.
    pub fn notes(&self) -> &NotesPanel {
        &self.notes
    }

    /// Returns the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key: modal panels first, then the focused panel, then
    /// global bindings.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let outcome = if self.notes.is_modal() {
            self.notes.handle_key(key)
        } else if self.game.is_modal() {
            self.game.handle_key(key)
        } else {
            match self.focus {
                Focus::Game => self.game.handle_key(key),
                Focus::Notes => self.notes.handle_key(key),
            }
        };
        if outcome == KeyOutcome::Handled {
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Game => Focus::Notes,
                    Focus::Notes => Focus::Game,
                };
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('u') | KeyCode::F(5) => self.location.refresh(),
            _ => {}
        }
    }
}
