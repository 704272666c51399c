//! Mini Apps library: notes, location, and a tic-tac-toe board in one terminal UI.
//!
//! # Architecture
//!
//! - **Notes**: [`NoteStore`] with SQLite and in-memory implementations
//! - **Location**: [`GeolocationProvider`] resolving the device position to a city
//! - **TUI**: ratatui panels composed by [`tui::App`]
//! - **Game**: the [`mini_xo`] engine, re-exported for convenience
//!
//! # Example
//!
//! ```
//! use mini_apps::{MemoryNoteStore, NoteDraft, NoteStore};
//!
//! let mut store = MemoryNoteStore::new();
//! let note = store
//!     .create(NoteDraft::new("Groceries".to_string(), "Milk and bread".to_string()))
//!     .unwrap();
//! assert_eq!(store.fetch_all().unwrap(), vec![note]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod location;
mod notes;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LocationConfig, LogConfig, NotesConfig, PlaceConfig};

// Crate-level exports - Location
pub use location::{
    ConfiguredLocationProvider, Coordinates, GeolocationProvider, LocationError, describe,
    haversine_km,
};

// Crate-level exports - Notes
pub use notes::{DbError, MemoryNoteStore, Note, NoteDraft, NoteError, NoteStore, SqliteNoteStore};

pub use mini_xo;

/// Environment variable overriding the configured device position (`"lat,lon"`).
pub const LOCATION_ENV: &str = "MINI_APPS_LOCATION";
