//! Note models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::Serialize;
use tracing::instrument;

use super::{NoteError, schema};

/// Number of body words shown in a list preview.
const PREVIEW_WORDS: usize = 9;

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters, Serialize, new)]
#[diesel(table_name = schema::notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Note {
    id: i32,
    title: String,
    body: String,
    created_at: NaiveDateTime,
}

impl Note {
    /// Returns the body shortened for list display.
    ///
    /// Bodies longer than eight space-separated words are cut to their first
    /// nine words followed by `...`.
    #[instrument(skip(self), fields(note_id = self.id))]
    pub fn preview(&self) -> String {
        let words: Vec<&str> = self.body.split(' ').collect();
        if words.len() > PREVIEW_WORDS - 1 {
            let mut text = words[..PREVIEW_WORDS].join(" ");
            text.push_str("...");
            text
        } else {
            self.body.clone()
        }
    }

    /// Formats the creation time for display.
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A note the user is composing, not yet validated or stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, new)]
pub struct NoteDraft {
    title: String,
    body: String,
}

impl NoteDraft {
    /// Checks that neither title nor body is blank.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Validation`] if either field is empty after trimming.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), NoteError> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err(NoteError::Validation);
        }
        Ok(())
    }
}

/// Insertable note row.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::notes)]
pub(super) struct NewNote {
    title: String,
    body: String,
    created_at: NaiveDateTime,
}
