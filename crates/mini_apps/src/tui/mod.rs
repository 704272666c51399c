//! Terminal UI presenting the three mini apps.

mod app;
mod game;
mod input;
mod location;
mod notes;
mod panel;
mod ui;

pub use app::{App, Focus};
pub use game::GamePanel;
pub use location::LocationPanel;
pub use notes::{EditorField, NoteEditor, NotesMode, NotesPanel};
pub use panel::{KeyOutcome, Panel};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(app))]
pub fn run(mut app: App) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    let restored = restore_terminal(&mut terminal);
    if let Err(err) = &restored {
        warn!(error = %err, "Failed to restore terminal");
    }
    info!("Terminal UI stopped");
    first_error(res, restored)
}

/// Returns the loop result, falling back to the restore result only when the
/// loop succeeded.
fn first_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    res.and(restored)
}

/// Leaves raw mode and the alternate screen, attempting every step.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_error_survives_restore_failure() {
        let res = first_error(
            Err(anyhow::anyhow!("loop failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");
    }

    #[test]
    fn test_restore_error_reported_after_clean_loop() {
        let res = first_error(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
    }

    #[test]
    fn test_clean_shutdown() {
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
