//! Location panel: one line naming the current city.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tracing::{info, instrument};

use super::panel::{KeyOutcome, Panel};
use super::ui::panel_block;
use crate::location::{GeolocationProvider, describe};

/// State of the location panel.
pub struct LocationPanel {
    provider: Box<dyn GeolocationProvider>,
    text: String,
}

impl std::fmt::Debug for LocationPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationPanel")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl LocationPanel {
    /// Creates the panel and resolves the location once.
    #[instrument(skip(provider))]
    pub fn new(provider: Box<dyn GeolocationProvider>) -> Self {
        let text = describe(provider.as_ref());
        Self { provider, text }
    }

    /// Returns the displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Asks the provider again.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) {
        self.text = describe(self.provider.as_ref());
        info!(text = %self.text, "Location refreshed");
    }
}

impl Panel for LocationPanel {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let paragraph = Paragraph::new(self.text.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(panel_block("Location", focused));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> KeyOutcome {
        KeyOutcome::Ignored
    }
}
