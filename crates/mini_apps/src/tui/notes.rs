//! Notes panel: list, detail view, and editor over an injected [`NoteStore`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{debug, info, instrument, warn};

use super::panel::{KeyOutcome, Panel};
use super::ui::panel_block;
use crate::notes::{Note, NoteDraft, NoteError, NoteStore};

/// Which editor field receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    /// The single-line title.
    #[default]
    Title,
    /// The multi-line body.
    Body,
}

/// In-progress note being composed.
#[derive(Debug, Clone, Default)]
pub struct NoteEditor {
    title: String,
    body: String,
    field: EditorField,
    error: Option<String>,
}

impl NoteEditor {
    /// Returns the title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the focused field.
    pub fn field(&self) -> EditorField {
        self.field
    }

    /// Returns the last save error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn focused_text(&mut self) -> &mut String {
        match self.field {
            EditorField::Title => &mut self.title,
            EditorField::Body => &mut self.body,
        }
    }
}

/// What the notes panel is showing.
#[derive(Debug, Clone)]
pub enum NotesMode {
    /// The list of notes.
    List,
    /// One note, read-only.
    Detail(Note),
    /// The editor for a new note.
    Editor(NoteEditor),
}

/// State of the notes panel.
pub struct NotesPanel {
    store: Box<dyn NoteStore>,
    notes: Vec<Note>,
    list_state: ListState,
    mode: NotesMode,
    status: Option<String>,
}

impl std::fmt::Debug for NotesPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotesPanel")
            .field("notes", &self.notes.len())
            .field("mode", &self.mode)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl NotesPanel {
    /// Creates the panel and loads notes from the store.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn NoteStore>) -> Self {
        let mut panel = Self {
            store,
            notes: Vec::new(),
            list_state: ListState::default(),
            mode: NotesMode::List,
            status: None,
        };
        panel.reload();
        panel
    }

    /// Returns the loaded notes.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the index of the selected note.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> &NotesMode {
        &self.mode
    }

    /// Returns the last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Re-fetches notes from the store, keeping the selection in range.
    #[instrument(skip(self))]
    pub fn reload(&mut self) {
        match self.store.fetch_all() {
            Ok(notes) => {
                debug!(count = notes.len(), "Notes reloaded");
                self.notes = notes;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load notes");
                self.status = Some(format!("Failed to load notes: {}", e));
            }
        }
        let selected = match (self.notes.len(), self.list_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn select_previous(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.notes.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        if self.notes.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.notes.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_note(&self) -> Option<&Note> {
        self.list_state.selected().and_then(|i| self.notes.get(i))
    }

    #[instrument(skip(self))]
    fn open_selected(&mut self) {
        let Some(id) = self.selected_note().map(|n| *n.id()) else {
            return;
        };
        match self.store.get(id) {
            Ok(Some(note)) => self.mode = NotesMode::Detail(note),
            Ok(None) => {
                self.status = Some(NoteError::NotFound(id).to_string());
                self.reload();
            }
            Err(e) => self.status = Some(format!("Failed to open note: {}", e)),
        }
    }

    #[instrument(skip(self))]
    fn delete_selected(&mut self) {
        let Some(id) = self.selected_note().map(|n| *n.id()) else {
            return;
        };
        match self.store.delete(id) {
            Ok(()) => {
                info!(note_id = id, "Note deleted from panel");
                self.status = Some("Note deleted".to_string());
            }
            Err(e) => self.status = Some(format!("Failed to delete note: {}", e)),
        }
        self.reload();
    }

    #[instrument(skip(self))]
    fn save(&mut self) {
        let NotesMode::Editor(editor) = &mut self.mode else {
            return;
        };
        let draft = NoteDraft::new(editor.title.clone(), editor.body.clone());
        match self.store.create(draft) {
            Ok(note) => {
                info!(note_id = note.id(), "Note saved from editor");
                self.mode = NotesMode::List;
                self.status = Some("Note saved".to_string());
                self.reload();
                let index = self.notes.iter().position(|n| n.id() == note.id());
                self.list_state.select(index.or(self.list_state.selected()));
            }
            Err(NoteError::Validation) => {
                editor.error = Some(NoteError::Validation.to_string());
            }
            Err(e) => {
                warn!(error = %e, "Failed to save note");
                editor.error = Some(format!("Failed to save note: {}", e));
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('a') => {
                self.status = None;
                self.mode = NotesMode::Editor(NoteEditor::default());
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Enter => self.open_selected(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.save();
            }
            return KeyOutcome::Handled;
        }
        let NotesMode::Editor(editor) = &mut self.mode else {
            return KeyOutcome::Ignored;
        };
        match key.code {
            KeyCode::Esc => {
                debug!("Editor cancelled");
                self.mode = NotesMode::List;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                editor.field = match editor.field {
                    EditorField::Title => EditorField::Body,
                    EditorField::Body => EditorField::Title,
                };
            }
            KeyCode::Enter => match editor.field {
                EditorField::Title => editor.field = EditorField::Body,
                EditorField::Body => editor.body.push('\n'),
            },
            KeyCode::Backspace => {
                editor.focused_text().pop();
            }
            KeyCode::Char(c) => {
                editor.focused_text().push(c);
                editor.error = None;
            }
            _ => {}
        }
        KeyOutcome::Handled
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        if self.notes.is_empty() {
            let empty = Paragraph::new("No notes yet. Press 'a' to add one.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .notes
                .iter()
                .map(|note| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            note.title().clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            note.preview(),
                            Style::default().fg(Color::Gray),
                        )),
                    ])
                })
                .collect();
            let highlight = if focused {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default().bg(Color::DarkGray)
            };
            let list = List::new(items)
                .highlight_style(highlight)
                .highlight_symbol("> ");
            let mut state = self.list_state.clone();
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }

        let footer = self.status.as_deref().unwrap_or("a: add  d: delete  Enter: open");
        frame.render_widget(
            Paragraph::new(footer).style(Style::default().fg(Color::Yellow)),
            chunks[1],
        );
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, note: &Note) {
        let text = vec![
            Line::from(Span::styled(
                note.title().clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                note.created_label(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ]
        .into_iter()
        .chain(note.body().lines().map(|l| Line::from(l.to_string())))
        .chain([
            Line::default(),
            Line::from(Span::styled("Esc: back", Style::default().fg(Color::Yellow))),
        ])
        .collect::<Vec<_>>();
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect, editor: &NoteEditor) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let field_block = |title: &'static str, active: bool| {
            let style = if active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Block::default().title(title).borders(Borders::ALL).border_style(style)
        };

        let title = if editor.title.is_empty() && editor.field != EditorField::Title {
            Paragraph::new("Title").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(editor.title.as_str())
        };
        frame.render_widget(
            title.block(field_block("Title", editor.field == EditorField::Title)),
            chunks[0],
        );

        let body = if editor.body.is_empty() && editor.field != EditorField::Body {
            Paragraph::new("Write here...").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(editor.body.as_str())
        };
        frame.render_widget(
            body.wrap(Wrap { trim: false })
                .block(field_block("Body", editor.field == EditorField::Body)),
            chunks[1],
        );

        let footer = match &editor.error {
            Some(error) => Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("Ctrl-S: save  Tab: switch field  Esc: cancel")
                .style(Style::default().fg(Color::Yellow)),
        };
        frame.render_widget(footer, chunks[2]);
    }
}

impl Panel for NotesPanel {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = match self.mode {
            NotesMode::List => "Notes",
            NotesMode::Detail(_) => "Note",
            NotesMode::Editor(_) => "Add note",
        };
        let block = panel_block(title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.mode {
            NotesMode::List => self.render_list(frame, inner, focused),
            NotesMode::Detail(note) => self.render_detail(frame, inner, note),
            NotesMode::Editor(editor) => self.render_editor(frame, inner, editor),
        }
    }

    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match self.mode {
            NotesMode::List => self.handle_list_key(key),
            NotesMode::Detail(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    self.mode = NotesMode::List;
                    KeyOutcome::Handled
                }
                _ => KeyOutcome::Ignored,
            },
            NotesMode::Editor(_) => self.handle_editor_key(key),
        }
    }

    fn is_modal(&self) -> bool {
        matches!(self.mode, NotesMode::Editor(_))
    }
}
