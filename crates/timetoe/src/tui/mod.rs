//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::draw;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::config::Settings;

/// Runs a restore function on drop. Restores raw mode and the screen on
/// every exit path, including failed setup and unwinding panics.
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs the TUI until the user quits.
///
/// The terminal is restored whether setup, the event loop or a panic ends
/// the session.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting timetoe TUI");

    enable_raw_mode()?;
    let _guard = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.move_order());
    let res = event_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(steps = app.game().latest_step(), "TUI closed");
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        // Blocks until the next event; nothing changes between key presses.
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
