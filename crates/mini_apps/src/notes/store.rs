//! The note store contract.

use super::{Note, NoteDraft, NoteError};

/// Persistence collaborator for notes.
///
/// Injected into the presentation layer; implementations own their storage.
pub trait NoteStore {
    /// Validates and stores a draft, returning the stored note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Validation`] for a blank title or body, or
    /// [`NoteError::Database`] if the backend fails.
    fn create(&mut self, draft: NoteDraft) -> Result<Note, NoteError>;

    /// Returns all notes, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Database`] if the backend fails.
    fn fetch_all(&mut self) -> Result<Vec<Note>, NoteError>;

    /// Returns a single note, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Database`] if the backend fails.
    fn get(&mut self, id: i32) -> Result<Option<Note>, NoteError>;

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::NotFound`] if no note has this id.
    fn delete(&mut self, id: i32) -> Result<(), NoteError>;
}
