//! SQLite-backed note store.

use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use super::models::NewNote;
use super::{DbError, Note, NoteDraft, NoteError, NoteStore, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// [`NoteStore`] persisting to an SQLite database through diesel.
///
/// Pending migrations are applied when the store is opened.
pub struct SqliteNoteStore {
    db_path: String,
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqliteNoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteNoteStore")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl SqliteNoteStore {
    /// Opens (creating if needed) the database at `db_path` and migrates it.
    ///
    /// Use `":memory:"` for a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or a migration fails.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DbError> {
        let db_path = db_path.as_ref().to_string();
        info!(path = %db_path, "Opening note database");
        let mut conn = SqliteConnection::establish(&db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", db_path, e)))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        Ok(Self { db_path, conn })
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }
}

impl NoteStore for SqliteNoteStore {
    #[instrument(skip(self, draft), fields(title = %draft.title()))]
    fn create(&mut self, draft: NoteDraft) -> Result<Note, NoteError> {
        draft.validate()?;
        let new_note = NewNote::new(
            draft.title().clone(),
            draft.body().clone(),
            Utc::now().naive_utc(),
        );

        let note = diesel::insert_into(schema::notes::table)
            .values(&new_note)
            .returning(Note::as_returning())
            .get_result(&mut self.conn)?;

        info!(note_id = note.id(), "Note created");
        Ok(note)
    }

    #[instrument(skip(self))]
    fn fetch_all(&mut self) -> Result<Vec<Note>, NoteError> {
        let notes = schema::notes::table
            .order((schema::notes::created_at.asc(), schema::notes::id.asc()))
            .select(Note::as_select())
            .load(&mut self.conn)?;

        debug!(count = notes.len(), "Notes loaded");
        Ok(notes)
    }

    #[instrument(skip(self))]
    fn get(&mut self, id: i32) -> Result<Option<Note>, NoteError> {
        let note = schema::notes::table
            .find(id)
            .select(Note::as_select())
            .first(&mut self.conn)
            .optional()?;
        Ok(note)
    }

    #[instrument(skip(self))]
    fn delete(&mut self, id: i32) -> Result<(), NoteError> {
        let deleted =
            diesel::delete(schema::notes::table.find(id)).execute(&mut self.conn)?;

        if deleted == 0 {
            warn!(note_id = id, "Delete requested for missing note");
            return Err(NoteError::NotFound(id));
        }
        info!(note_id = id, "Note deleted");
        Ok(())
    }
}
