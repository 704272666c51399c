//! Panel trait shared by the stacked sections of the terminal UI.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

/// Whether a panel consumed a key.
///
/// Ignored keys fall through to the application's global bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The panel acted on the key.
    Handled,
    /// The panel has no binding for the key.
    Ignored,
}

/// A section of the screen that owns its state, renders itself, and reacts
/// to keys while focused.
pub trait Panel {
    /// Renders the panel into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool);

    /// Renders popups above every panel. Called after all panels are drawn.
    fn render_overlay(&self, _frame: &mut Frame) {}

    /// Handles a key event while the panel is focused or modal.
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome;

    /// True while the panel must receive every key (dialogs, text entry).
    fn is_modal(&self) -> bool {
        false
    }
}
