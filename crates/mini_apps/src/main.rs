//! Mini Apps - Unified CLI
//!
//! Terminal UI plus scriptable access to each mini app.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, NotesAction};
use mini_apps::mini_xo::{Coord, GameEngine};
use mini_apps::{
    AppConfig, ConfiguredLocationProvider, LOCATION_ENV, MemoryNoteStore, NoteDraft, NoteStore,
    SqliteNoteStore, describe, tui,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config.set_db_path(db_path);
    }

    match cli.command.unwrap_or(Command::Tui { ephemeral: false }) {
        Command::Tui { ephemeral } => run_tui(&config, ephemeral),
        Command::Notes { action } => {
            initialize_cli_tracing(&config);
            run_notes(&config, action)
        }
        Command::Location => {
            initialize_cli_tracing(&config);
            run_location(&config)
        }
        Command::Xo { moves } => {
            initialize_cli_tracing(&config);
            run_xo(&moves)
        }
    }
}

/// Logs to stderr so stdout stays clean for command output.
fn initialize_cli_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Logs to a file so output does not interfere with the terminal UI.
fn initialize_tui_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log().file())
        .with_context(|| format!("Failed to create log file {}", config.log().file()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn location_provider(config: &AppConfig) -> ConfiguredLocationProvider {
    let env_override = std::env::var(LOCATION_ENV).ok();
    ConfiguredLocationProvider::from_config(config.location(), env_override.as_deref())
}

/// Run the terminal UI
#[instrument(skip(config))]
fn run_tui(config: &AppConfig, ephemeral: bool) -> Result<()> {
    initialize_tui_tracing(config)?;
    info!("Starting Mini Apps TUI");

    let store: Box<dyn NoteStore> = if ephemeral {
        Box::new(MemoryNoteStore::new())
    } else {
        Box::new(SqliteNoteStore::open(config.notes().db_path())?)
    };
    let provider = location_provider(config);

    tui::run(tui::App::new(store, Box::new(provider)))
}

/// Run a notes subcommand against the database
#[instrument(skip(config))]
fn run_notes(config: &AppConfig, action: NotesAction) -> Result<()> {
    let mut store = SqliteNoteStore::open(config.notes().db_path())?;

    match action {
        NotesAction::Add { title, body } => {
            let note = store.create(NoteDraft::new(title, body))?;
            println!("Added note {}", note.id());
        }
        NotesAction::List { json } => {
            let notes = store.fetch_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if notes.is_empty() {
                println!("No notes");
            } else {
                for note in &notes {
                    println!(
                        "{:>4}  {}  {}  {}",
                        note.id(),
                        note.created_label(),
                        note.title(),
                        note.preview()
                    );
                }
            }
        }
        NotesAction::Delete { id } => {
            store.delete(id)?;
            println!("Deleted note {}", id);
        }
    }
    Ok(())
}

/// Print the current city
#[instrument(skip(config))]
fn run_location(config: &AppConfig) -> Result<()> {
    let provider = location_provider(config);
    println!("{}", describe(&provider));
    Ok(())
}

/// Replay moves and print the final board
#[instrument]
fn run_xo(moves: &[String]) -> Result<()> {
    let mut engine = GameEngine::new();
    for raw in moves {
        let coord = Coord::parse(raw).with_context(|| format!("Invalid move: {}", raw))?;
        if let Err(e) = engine.try_apply_move(coord.row(), coord.col()) {
            warn!(error = %e, "Move ignored");
            eprintln!("Ignored {}: {}", raw, e);
        }
    }

    println!("{}", engine.state().grid().display());
    println!("{}", engine.state().phase());
    Ok(())
}
