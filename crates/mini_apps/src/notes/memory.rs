//! In-memory note store.

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::{Note, NoteDraft, NoteError, NoteStore};

/// Vector-backed [`NoteStore`]. Contents are lost on drop.
#[derive(Debug, Clone)]
pub struct MemoryNoteStore {
    notes: Vec<Note>,
    next_id: i32,
}

impl MemoryNoteStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for MemoryNoteStore {
    #[instrument(skip(self, draft), fields(title = %draft.title()))]
    fn create(&mut self, draft: NoteDraft) -> Result<Note, NoteError> {
        draft.validate()?;
        let id = self.next_id;
        self.next_id += 1;

        let note = Note::new(
            id,
            draft.title().clone(),
            draft.body().clone(),
            Utc::now().naive_utc(),
        );
        self.notes.push(note.clone());
        info!(note_id = id, "Note created");
        Ok(note)
    }

    #[instrument(skip(self))]
    fn fetch_all(&mut self) -> Result<Vec<Note>, NoteError> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| (a.created_at(), a.id()).cmp(&(b.created_at(), b.id())));
        debug!(count = notes.len(), "Notes loaded");
        Ok(notes)
    }

    #[instrument(skip(self))]
    fn get(&mut self, id: i32) -> Result<Option<Note>, NoteError> {
        Ok(self.notes.iter().find(|n| *n.id() == id).cloned())
    }

    #[instrument(skip(self))]
    fn delete(&mut self, id: i32) -> Result<(), NoteError> {
        let index = self
            .notes
            .iter()
            .position(|n| *n.id() == id)
            .ok_or(NoteError::NotFound(id))?;
        self.notes.remove(index);
        info!(note_id = id, "Note deleted");
        Ok(())
    }
}
