//! Notes persistence: the [`NoteStore`] collaborator and its implementations.

mod error;
mod memory;
mod models;
mod schema; // Diesel schema - internal use only
mod sqlite;
mod store;

pub use error::{DbError, NoteError};
pub use memory::MemoryNoteStore;
pub use models::{Note, NoteDraft};
pub use sqlite::SqliteNoteStore;
pub use store::NoteStore;
