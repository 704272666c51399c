//! Note store error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Database error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Database error: {} at {}:{}", message, file, line)]
pub struct DbError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DbError {
    /// Creates a new database error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Diesel error: {}", err))
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("Connection error: {}", err))
    }
}

/// Error returned by [`NoteStore`](super::NoteStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NoteError {
    /// Title or body was blank.
    #[display("Please enter a title and body for your note!")]
    Validation,
    /// No note with this id exists.
    #[display("Note {_0} not found")]
    NotFound(#[error(not(source))] i32),
    /// The storage backend failed.
    #[display("{_0}")]
    Database(DbError),
}

impl PartialEq for DbError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for DbError {}

impl From<DbError> for NoteError {
    fn from(err: DbError) -> Self {
        Self::Database(err)
    }
}

impl From<diesel::result::Error> for NoteError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(DbError::from(err))
    }
}
