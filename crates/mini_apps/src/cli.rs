//! Command-line interface for mini_apps.

use clap::{Parser, Subcommand};

/// Mini Apps - notes, location, and tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "mini_apps")]
#[command(about = "Notes, location, and tic-tac-toe in one terminal app", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "mini_apps.toml")]
    pub config: std::path::PathBuf,

    /// Override the notes database path
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Tui {
        /// Keep notes in memory instead of the database
        #[arg(long)]
        ephemeral: bool,
    },

    /// Manage notes without the UI
    Notes {
        /// Notes operation
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Print the current city
    Location,

    /// Replay moves on a fresh board and print the result
    Xo {
        /// Moves as `row,col` (0-based) or keypad digits 1-9
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

/// Notes subcommands
#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// Add a note
    Add {
        /// Note title
        #[arg(short, long)]
        title: String,

        /// Note body
        #[arg(short, long)]
        body: String,
    },

    /// List notes, oldest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by id
    Delete {
        /// Note id
        id: i32,
    },
}
